//! Registry file output
//!
//! The registry is a single JSON array, pretty-printed with 4-space indentation, that
//! replaces whatever was at the output path. Writes go through a sibling `.tmp` file
//! and a rename, so readers never see a half-written registry.

pub mod persistence;

pub use persistence::{render_registry, write_registry};
