//! Host-facing data structures produced by a parse.
//!
//! - [`program`] – Identity of the program that wrote the file.
//! - [`atom`] – Atom labels and positions with their length unit.
//! - [`topology`] – Atom indices, bonds and the whole-system group.
//! - [`system`] – The structural snapshot and the run that owns it.
//! - [`archive`] – The assembled output of one parse call.
//! - [`types`] – Length units.

pub mod archive;
pub mod atom;
pub mod program;
pub mod system;
pub mod topology;
pub mod types;
