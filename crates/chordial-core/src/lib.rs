#![forbid(unsafe_code)]

//! Chord diagram data model + layout (headless).
//!
//! Design goals:
//! - deterministic layout: the same matrix always yields the same angular
//!   geometry, so redraws and tests are stable
//! - no drawing here: this crate turns an adjacency matrix into groups and
//!   chords; SVG emission lives in `chordial-render`

pub mod color;
pub mod error;
pub mod geom;
pub mod layout;
pub mod model;
pub mod validate;

pub use color::CategoryScale;
pub use error::{Error, Result};
pub use layout::{Chord, ChordEnd, ChordGroup, ChordLayout, ChordLayoutData, LayoutEngine};
pub use model::{DiagramData, DisplayOptions};
pub use validate::{validate_data, validate_value};
