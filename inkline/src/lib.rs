pub use alignment::*;
pub use board::*;
pub use coord::*;
pub use errors::*;
pub use match_state::*;
pub use snapshot::*;
pub use visualization::*;

mod alignment;
#[cfg(test)]
mod arbitrary;
mod board;
mod coord;
mod errors;
mod match_state;
mod snapshot;
mod visualization;
