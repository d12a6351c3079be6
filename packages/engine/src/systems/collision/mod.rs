//! Pairwise AABB collision detection
//!
//! Detection runs over an immutable snapshot of boxes so it can fan out on
//! rayon; dispatch happens afterwards, sequentially, on the stage.

mod detect;

pub use detect::{detect_pairs, CollisionPair, CollisionProbe};
