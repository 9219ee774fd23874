//! Interactive scene model: every clickable shape of a rendered diagram and
//! the navigation action it maps to.

use chordial_core::geom::{Point, Rect, Size, point};

/// Navigation request produced by a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    SelectElement(usize),
    SelectRelationship(usize, usize),
}

/// Clickable shape. `Sector` and `Polygon` are in diagram-centered
/// coordinates; `Rect` is in absolute surface coordinates.
#[derive(Debug, Clone)]
pub enum HitShape {
    Sector {
        inner_radius: f64,
        outer_radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Rect(Rect),
    Polygon(Vec<Point>),
}

#[derive(Debug, Clone)]
pub struct HitRegion {
    pub shape: HitShape,
    pub action: ClickAction,
}

/// One fully rendered diagram: the SVG document plus its clickable regions.
///
/// Regions are ordered arcs/labels/legend first, ribbons last, so ribbons
/// never occlude the arc hit-areas they pass under.
#[derive(Debug, Clone)]
pub struct RenderedScene {
    pub svg: String,
    pub size: Size,
    /// Diagram center in surface coordinates.
    pub center: Point,
    pub regions: Vec<HitRegion>,
    pub group_count: usize,
    pub chord_count: usize,
}

impl RenderedScene {
    /// Maps a surface-coordinate click to a navigation action, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<ClickAction> {
        let local = point(x - self.center.x, y - self.center.y);
        self.regions
            .iter()
            .find(|region| match &region.shape {
                HitShape::Sector {
                    inner_radius,
                    outer_radius,
                    start_angle,
                    end_angle,
                } => sector_contains(
                    local,
                    *inner_radius,
                    *outer_radius,
                    *start_angle,
                    *end_angle,
                ),
                HitShape::Rect(rect) => rect.contains(point(x, y)),
                HitShape::Polygon(pts) => polygon_contains(pts, local),
            })
            .map(|region| region.action)
    }
}

fn sector_contains(
    p: Point,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> bool {
    let r = p.x.hypot(p.y);
    if r < inner_radius || r > outer_radius {
        return false;
    }
    // Angle from 12 o'clock, clockwise, normalized to [0, tau). Label hit
    // sectors can spill past the seam, so the wrapped candidates are
    // checked too.
    let tau = std::f64::consts::TAU;
    let mut a = p.x.atan2(-p.y);
    if a < 0.0 {
        a += tau;
    }
    [a - tau, a, a + tau]
        .iter()
        .any(|&cand| cand >= start_angle && cand <= end_angle)
}

fn polygon_contains(pts: &[Point], p: Point) -> bool {
    if pts.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = pts.len() - 1;
    for i in 0..pts.len() {
        let (pi, pj) = (pts[i], pts[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
