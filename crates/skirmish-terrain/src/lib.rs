//! Procedural terrain for SKIRMISH.
//!
//! Generates a seeded heightmap and answers elevation queries over the
//! full movement and spawn range. The simulation only ever sees
//! `HeightField::height_at`; the generator behind it is replaceable.

pub mod heightfield;

pub use heightfield::HeightField;
