#![forbid(unsafe_code)]

//! `chordial` renders interactive chord diagrams for embedding hosts.
//!
//! The host owns a drawable surface and (optionally) a navigation bridge;
//! this crate owns everything in between: validation, layout, color
//! assignment, SVG emission, and click-to-navigate hit-testing. The one
//! entry point a host needs is [`DiagramPanel::update_diagram`], which never
//! propagates an error: failures are logged and rendered into the surface
//! as a visible error panel, and the host simply calls again with corrected
//! data.
//!
//! ```
//! use chordial::{DiagramPanel, PanelOptions};
//! use serde_json::json;
//!
//! let mut panel = DiagramPanel::new(PanelOptions::default());
//! panel.set_surface_size(800.0, 600.0);
//! panel.update_diagram(&json!({
//!     "matrix": [[0.0, 5.0], [5.0, 0.0]],
//!     "names": ["Alpha", "Beta"],
//! }));
//! assert!(panel.surface().document().contains("group-arc"));
//! ```

pub mod bridge;
pub mod panel;
pub mod surface;

pub use bridge::NavigationBridge;
pub use chordial_core::{
    CategoryScale, Chord, ChordEnd, ChordGroup, ChordLayout, ChordLayoutData, DiagramData,
    DisplayOptions, Error, LayoutEngine, Result, validate_data, validate_value,
};
pub use chordial_render::{ClickAction, RenderOptions, RenderedScene, render_diagram};
pub use panel::{DiagramPanel, PanelOptions};
pub use surface::{Surface, SurfaceContent};
