#![forbid(unsafe_code)]

//! Headless SVG renderer for chord layouts.
//!
//! [`render_diagram`] turns a [`chordial_core::ChordLayoutData`] into a
//! complete SVG document plus a [`scene::RenderedScene`] of clickable
//! regions, so embedding hosts can map pointer events back to element and
//! relationship indices without a DOM.

pub mod path;
pub mod scene;
pub mod svg;

pub use scene::{ClickAction, HitRegion, HitShape, RenderedScene};
pub use svg::{error_svg, loading_svg, render_diagram};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("negative arc radius: {radius}")]
    NegativeRadius { radius: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Width reserved for the legend column when it is shown.
pub const LEGEND_WIDTH: f64 = 200.0;
/// Peripheral margin that keeps rotated labels inside the surface.
pub const LABEL_PADDING: f64 = 80.0;
/// Peripheral margin without labels.
pub const BARE_PADDING: f64 = 20.0;
/// Radial thickness of the group arcs.
pub const RIBBON_BAND: f64 = 30.0;
/// Gap between the outer radius and the label anchor.
pub const LABEL_OFFSET: f64 = 10.0;

/// Resolved options for one render pass.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Drawable surface width in pixels.
    pub width: f64,
    /// Drawable surface height in pixels.
    pub height: f64,
    pub show_labels: bool,
    pub show_legend: bool,
    /// Root `id` of the emitted `<svg>`; also scopes the generated CSS.
    pub diagram_id: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            show_labels: true,
            show_legend: false,
            diagram_id: "chordial".to_string(),
        }
    }
}
