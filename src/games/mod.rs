//! Bundled rule sets.
//!
//! Small games used to exercise the engines:
//! - `subtract`: subtract-a-square, a finite game solvable by full search
//! - `chopsticks`: the finger-counting game, whose positions can cycle

pub mod chopsticks;
pub mod subtract;

pub use chopsticks::{Chopsticks, ChopsticksState, Hand, Hands, Tap};
pub use subtract::{SubtractSquare, SubtractState};
