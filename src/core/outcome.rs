//! Outcome values shared by heuristics and search.
//!
//! Exact search scores are integers in `{LOSE, WIN}`; `DRAW` exists for
//! heuristics only, since no terminal position of a supported game is drawn.
//! Heuristic estimates are continuous values in `[-1, 1]`.

/// Exact negamax score.
pub type Score = i8;

/// The mover is forced to lose.
pub const LOSE: Score = -1;

/// Neither side is favoured.
pub const DRAW: Score = 0;

/// The mover can force a win.
pub const WIN: Score = 1;

/// Clamp a heuristic estimate into `[-1, 1]`.
///
/// NaN is treated as a draw.
#[inline]
#[must_use]
pub fn clamp_estimate(value: f64) -> f64 {
    if value.is_nan() {
        f64::from(DRAW)
    } else {
        value.clamp(f64::from(LOSE), f64::from(WIN))
    }
}
