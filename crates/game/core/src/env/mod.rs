//! Collaborators that feed the engine its starting board.
//!
//! The engine never touches randomness itself. A [`GridFactory`] turns a random
//! source into a valid starting [`Grid`](crate::Grid), and [`seeded_rng`]
//! supplies a reproducible source when the caller wants one.
mod layout;
mod rng;

pub use layout::GridFactory;
pub use rng::{LayoutRng, seeded_rng};
