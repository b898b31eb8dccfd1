// extensions/mod.rs
//
// Opt-in helpers that games drive themselves. Nothing in the engine core
// depends on them.

pub mod tween;

pub use tween::Tween;
