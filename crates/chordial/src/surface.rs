//! The drawable region the host hands to the panel.

use chordial_core::geom::{Size, size};
use chordial_render::RenderedScene;

/// What the surface currently shows. Exactly one of these at a time; every
/// update fully replaces the previous content.
#[derive(Debug, Clone, Default)]
pub enum SurfaceContent {
    /// Placeholder before the first dataset arrives.
    #[default]
    Loading,
    Diagram(RenderedScene),
    Error(String),
}

/// A single identified drawable region. The host reports its current pixel
/// size (zero is allowed and falls back to the panel's configured viewport)
/// and reads back the SVG document after each update.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    size: Size,
    content: SurfaceContent,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            size: size(width, height),
            content: SurfaceContent::Loading,
        }
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.size = size(width, height);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn content(&self) -> &SurfaceContent {
        &self.content
    }

    pub(crate) fn set_content(&mut self, content: SurfaceContent) {
        self.content = content;
    }

    /// The scene currently on screen, if the last update succeeded.
    pub fn scene(&self) -> Option<&RenderedScene> {
        match &self.content {
            SurfaceContent::Diagram(scene) => Some(scene),
            _ => None,
        }
    }

    /// Current SVG document for the surface: the diagram, the inline error
    /// panel, or the loading placeholder.
    pub fn document(&self) -> String {
        self.document_with("chordial", size(800.0, 600.0))
    }

    pub(crate) fn document_with(&self, diagram_id: &str, fallback: Size) -> String {
        let w = if self.size.width > 0.0 {
            self.size.width
        } else {
            fallback.width
        };
        let h = if self.size.height > 0.0 {
            self.size.height
        } else {
            fallback.height
        };
        match &self.content {
            SurfaceContent::Loading => chordial_render::loading_svg(w, h, diagram_id),
            SurfaceContent::Diagram(scene) => scene.svg.clone(),
            SurfaceContent::Error(message) => chordial_render::error_svg(message, w, h, diagram_id),
        }
    }
}
