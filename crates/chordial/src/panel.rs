//! The embeddable diagram panel.

use crate::bridge::NavigationBridge;
use crate::surface::{Surface, SurfaceContent};
use chordial_core::geom::{Size, size};
use chordial_core::{
    CategoryScale, ChordLayout, DiagramData, DisplayOptions, Error, LayoutEngine, Result, validate,
};
use chordial_render::{ClickAction, RenderOptions};
use serde_json::Value;
use std::sync::Arc;

/// Panel configuration, fixed for the panel's lifetime.
#[derive(Debug, Clone)]
pub struct PanelOptions {
    /// Size used when the surface reports zero width or height.
    pub fallback_viewport: Size,
    /// Geometry computation seam. `None` models the graphics dependency
    /// failing to load: the panel enters a persistent error state and never
    /// attempts a render.
    pub layout_engine: Option<Arc<dyn LayoutEngine>>,
    /// Root `id` for emitted SVG documents.
    pub diagram_id: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            fallback_viewport: size(800.0, 600.0),
            layout_engine: Some(Arc::new(ChordLayout::new())),
            diagram_id: "chordial".to_string(),
        }
    }
}

/// Bundles a surface, display configuration, an optional navigation bridge,
/// and the session-stable color scale.
///
/// All methods are synchronous and run to completion; the panel assumes
/// single-threaded use (standard UI event dispatch) and holds no locks.
#[derive(Debug)]
pub struct DiagramPanel {
    options: PanelOptions,
    surface: Surface,
    bridge: Option<Arc<dyn NavigationBridge>>,
    colors: CategoryScale,
}

impl DiagramPanel {
    pub fn new(options: PanelOptions) -> Self {
        let mut panel = Self {
            surface: Surface::new(),
            bridge: None,
            colors: CategoryScale::default(),
            options,
        };
        if panel.options.layout_engine.is_none() {
            tracing::error!("layout engine is not available; diagram rendering is disabled");
            panel
                .surface
                .set_content(SurfaceContent::Error(Error::DependencyMissing.to_string()));
        }
        panel
    }

    pub fn with_bridge(mut self, bridge: Arc<dyn NavigationBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn set_bridge(&mut self, bridge: Option<Arc<dyn NavigationBridge>>) {
        self.bridge = bridge;
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn set_surface_size(&mut self, width: f64, height: f64) {
        self.surface.set_size(width, height);
    }

    /// Current SVG document for the surface content.
    pub fn document(&self) -> String {
        self.surface
            .document_with(&self.options.diagram_id, self.options.fallback_viewport)
    }

    /// Replaces the diagram from a raw host payload.
    ///
    /// Never returns an error and never panics past this boundary: every
    /// failure is logged and rendered into the surface as an inline error
    /// panel. The host retries by calling again with corrected data.
    pub fn update_diagram(&mut self, data: &Value) {
        if let Err(err) = self.try_update_value(data) {
            self.show_error(&err);
        }
    }

    /// Replaces the diagram from already-typed data. Same contract as
    /// [`Self::update_diagram`].
    pub fn update(&mut self, data: &DiagramData) {
        if let Err(err) = self.try_update(data) {
            self.show_error(&err);
        }
    }

    /// Maps a surface-coordinate click to a navigation request and forwards
    /// it over the bridge. Without a bridge the request is logged and
    /// dropped; clicks on loading or error content do nothing.
    ///
    /// Returns the action taken so hosts and tests can observe dispatch.
    pub fn handle_click(&self, x: f64, y: f64) -> Option<ClickAction> {
        let scene = self.surface.scene()?;
        let action = scene.hit_test(x, y)?;
        match (&self.bridge, action) {
            (Some(bridge), ClickAction::SelectElement(index)) => {
                tracing::debug!(index, "navigating to element");
                bridge.select_element(index);
            }
            (Some(bridge), ClickAction::SelectRelationship(source, target)) => {
                tracing::debug!(source, target, "navigating to relationship");
                bridge.select_relationship(source, target);
            }
            (None, action) => {
                tracing::warn!(?action, "navigation bridge not available");
            }
        }
        Some(action)
    }

    fn try_update_value(&mut self, data: &Value) -> Result<()> {
        let engine = self.layout_engine()?;
        let data = validate::validate_value(data)?;
        self.render_with(engine.as_ref(), &data)
    }

    fn try_update(&mut self, data: &DiagramData) -> Result<()> {
        let engine = self.layout_engine()?;
        validate::validate_data(data)?;
        self.render_with(engine.as_ref(), data)
    }

    fn layout_engine(&self) -> Result<Arc<dyn LayoutEngine>> {
        self.options
            .layout_engine
            .clone()
            .ok_or(Error::DependencyMissing)
    }

    fn render_with(&mut self, engine: &dyn LayoutEngine, data: &DiagramData) -> Result<()> {
        let layout = engine.layout(&data.matrix)?;
        let options = self.resolved_render_options(data.options);
        let scene =
            chordial_render::render_diagram(&layout, &data.names, &options, &mut self.colors)
                .map_err(|err| Error::render(err.to_string()))?;
        self.surface.set_content(SurfaceContent::Diagram(scene));
        Ok(())
    }

    fn resolved_render_options(&self, display: DisplayOptions) -> RenderOptions {
        let current = self.surface.size();
        let fallback = self.options.fallback_viewport;
        RenderOptions {
            width: if current.width > 0.0 {
                current.width
            } else {
                fallback.width
            },
            height: if current.height > 0.0 {
                current.height
            } else {
                fallback.height
            },
            show_labels: display.show_labels,
            show_legend: display.show_legend,
            diagram_id: self.options.diagram_id.clone(),
        }
    }

    fn show_error(&mut self, err: &Error) {
        tracing::error!(error = %err, "diagram update failed");
        self.surface
            .set_content(SurfaceContent::Error(err.to_string()));
    }
}
