//! Enemy behavior for SKIRMISH.
//!
//! Pure functions that compute pursuit movement and facing for enemy
//! entities. No ECS dependency — operates on plain data, which keeps the
//! behavior unit-testable without a world.

pub mod seek;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
