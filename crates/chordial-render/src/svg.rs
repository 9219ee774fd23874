//! SVG document emission.
//!
//! One pass over the layout builds both the SVG string and the clickable
//! region list; the two stay in lockstep by construction.

use crate::path::{arc_path, fmt, fmt_value, ribbon_outline, ribbon_path};
use crate::scene::{ClickAction, HitRegion, HitShape, RenderedScene};
use crate::{
    BARE_PADDING, Error, LABEL_OFFSET, LABEL_PADDING, LEGEND_WIDTH, RIBBON_BAND, RenderOptions,
    Result,
};
use chordial_core::color::{CategoryScale, darken};
use chordial_core::geom::{point, rect, size};
use chordial_core::{ChordGroup, ChordLayoutData};
use std::fmt::Write as _;

/// Display label truncation: keep `keep` chars and add `...` when a label
/// exceeds `max` chars.
const ARC_LABEL_MAX: usize = 20;
const ARC_LABEL_KEEP: usize = 17;
const LEGEND_LABEL_MAX: usize = 25;
const LEGEND_LABEL_KEEP: usize = 22;

/// Approximate glyph advance at the 11px label size, used only for hit boxes.
const CHAR_WIDTH: f64 = 7.0;
const LABEL_HIT_HALF_HEIGHT: f64 = 6.0;
const LEGEND_ROW_STEP: f64 = 20.0;
const LEGEND_ROW_HEIGHT: f64 = 16.0;

pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn truncate_label(text: &str, max: usize, keep: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(keep).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

fn chord_css(diagram_id: &str) -> String {
    let id = escape_xml(diagram_id);
    format!(
        "#{id}{{font:11px sans-serif;}}\
         #{id} .group-arc{{cursor:pointer;}}\
         #{id} .group-label{{font-size:11px;fill:#333;cursor:pointer;}}\
         #{id} .ribbon{{cursor:pointer;}}\
         #{id} .legend-title{{font-weight:bold;font-size:12px;}}\
         #{id} .legend-item{{cursor:pointer;}}\
         #{id} .legend-item text{{font-size:11px;}}\
         #{id} .error-text{{fill:#c00;font-size:14px;}}\
         #{id} .error-title{{font-weight:bold;}}\
         #{id} .loading-text{{fill:#666;font-size:14px;}}"
    )
}

fn svg_open(out: &mut String, diagram_id: &str, width: f64, height: f64) {
    let id = escape_xml(diagram_id);
    let _ = write!(
        out,
        r#"<svg id="{id}" width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg" role="graphics-document document" aria-roledescription="chord">"#,
        w = fmt(width),
        h = fmt(height),
    );
    let _ = write!(out, "<style>{}</style>", chord_css(diagram_id));
}

/// Renders one chord layout into an SVG document plus its clickable regions.
///
/// `names` must be index-aligned with the layout's groups; `colors` is the
/// session-stable scale owned by the caller.
pub fn render_diagram(
    layout: &ChordLayoutData,
    names: &[String],
    options: &RenderOptions,
    colors: &mut CategoryScale,
) -> Result<RenderedScene> {
    let width = options.width;
    let height = options.height;
    let legend_width = if options.show_legend { LEGEND_WIDTH } else { 0.0 };
    let diagram_width = width - legend_width;
    let label_padding = if options.show_labels {
        LABEL_PADDING
    } else {
        BARE_PADDING
    };
    let outer_radius = diagram_width.min(height) * 0.5 - label_padding;
    let inner_radius = outer_radius - RIBBON_BAND;
    if outer_radius < 0.0 {
        return Err(Error::NegativeRadius {
            radius: outer_radius,
        });
    }
    if inner_radius < 0.0 {
        return Err(Error::NegativeRadius {
            radius: inner_radius,
        });
    }

    let center = point(diagram_width / 2.0, height / 2.0);
    let mut regions: Vec<HitRegion> = Vec::new();
    let mut out = String::new();
    svg_open(&mut out, &options.diagram_id, width, height);

    let _ = write!(
        &mut out,
        r#"<g class="diagram" transform="translate({x},{y})">"#,
        x = fmt(center.x),
        y = fmt(center.y),
    );

    // Group arcs, in ascending index order.
    out.push_str(r#"<g class="groups">"#);
    for group in &layout.groups {
        let name = names.get(group.index).map(String::as_str).unwrap_or("");
        let fill = colors.color_for(group.index);
        let stroke = darken(&fill);

        out.push_str(r#"<g class="group">"#);
        let _ = write!(
            &mut out,
            r#"<path class="group-arc" d="{d}" fill="{fill}" stroke="{stroke}" data-index="{idx}"><title>{title}</title></path>"#,
            d = arc_path(
                inner_radius,
                outer_radius,
                group.start_angle,
                group.end_angle
            ),
            fill = escape_xml(&fill),
            stroke = escape_xml(&stroke),
            idx = group.index,
            title = escape_xml(&format!(
                "{name}: {} connections\nClick to navigate",
                fmt_value(group.value)
            )),
        );
        regions.push(HitRegion {
            shape: HitShape::Sector {
                inner_radius,
                outer_radius,
                start_angle: group.start_angle,
                end_angle: group.end_angle,
            },
            action: ClickAction::SelectElement(group.index),
        });

        if options.show_labels {
            emit_group_label(&mut out, &mut regions, group, name, outer_radius);
        }
        out.push_str("</g>");
    }
    out.push_str("</g>");

    // Ribbons are drawn after all arcs so they never occlude the arc
    // hit-areas; the region list keeps the same precedence.
    out.push_str(r#"<g class="ribbons" fill-opacity="0.67">"#);
    let mut ribbon_regions: Vec<HitRegion> = Vec::new();
    for chord in &layout.chords {
        let source_name = names
            .get(chord.source.index)
            .map(String::as_str)
            .unwrap_or("");
        let target_name = names
            .get(chord.target.index)
            .map(String::as_str)
            .unwrap_or("");
        let fill = colors.color_for(chord.source.index);
        let stroke = darken(&fill);
        let _ = write!(
            &mut out,
            r#"<path class="ribbon" d="{d}" fill="{fill}" stroke="{stroke}" data-source="{src}" data-target="{tgt}"><title>{title}</title></path>"#,
            d = ribbon_path(&chord.source, &chord.target, inner_radius),
            fill = escape_xml(&fill),
            stroke = escape_xml(&stroke),
            src = chord.source.index,
            tgt = chord.target.index,
            title = escape_xml(&format!(
                "{source_name} \u{2194} {target_name}: {}\nClick to navigate to relationship",
                fmt_value(chord.source.value)
            )),
        );
        ribbon_regions.push(HitRegion {
            shape: HitShape::Polygon(ribbon_outline(&chord.source, &chord.target, inner_radius)),
            action: ClickAction::SelectRelationship(chord.source.index, chord.target.index),
        });
    }
    out.push_str("</g></g>");

    if options.show_legend {
        emit_legend(&mut out, &mut regions, names, diagram_width, colors);
    }

    regions.extend(ribbon_regions);
    out.push_str("</svg>");

    tracing::debug!(
        groups = layout.groups.len(),
        chords = layout.chords.len(),
        "diagram rendered"
    );

    Ok(RenderedScene {
        svg: out,
        size: size(width, height),
        center,
        regions,
        group_count: layout.groups.len(),
        chord_count: layout.chords.len(),
    })
}

fn emit_group_label(
    out: &mut String,
    regions: &mut Vec<HitRegion>,
    group: &ChordGroup,
    name: &str,
    outer_radius: f64,
) {
    let mid = (group.start_angle + group.end_angle) / 2.0;
    let degrees = mid.to_degrees() - 90.0;
    let anchor_radius = outer_radius + LABEL_OFFSET;
    let flipped = mid > std::f64::consts::PI;
    let transform = if flipped {
        format!(
            "rotate({}) translate({}) rotate(180)",
            fmt(degrees),
            fmt(anchor_radius)
        )
    } else {
        format!("rotate({}) translate({})", fmt(degrees), fmt(anchor_radius))
    };
    let anchor = if flipped { "end" } else { "start" };
    let text = truncate_label(name, ARC_LABEL_MAX, ARC_LABEL_KEEP);
    let _ = write!(
        out,
        r#"<text class="group-label" dy="0.35em" transform="{transform}" text-anchor="{anchor}" data-index="{idx}">{label}<title>{title}</title></text>"#,
        idx = group.index,
        label = escape_xml(&text),
        title = escape_xml(&format!("{name}\nClick to navigate")),
    );

    // The label reads radially outward from the anchor, so its hit box is a
    // thin sector starting at the anchor radius.
    let text_width = CHAR_WIDTH * text.chars().count() as f64;
    let half_angle = LABEL_HIT_HALF_HEIGHT / anchor_radius;
    regions.push(HitRegion {
        shape: HitShape::Sector {
            inner_radius: anchor_radius,
            outer_radius: anchor_radius + text_width,
            start_angle: mid - half_angle,
            end_angle: mid + half_angle,
        },
        action: ClickAction::SelectElement(group.index),
    });
}

fn emit_legend(
    out: &mut String,
    regions: &mut Vec<HitRegion>,
    names: &[String],
    diagram_width: f64,
    colors: &mut CategoryScale,
) {
    let origin = point(diagram_width + 20.0, 30.0);
    let _ = write!(
        out,
        r#"<g class="legend" transform="translate({x},{y})">"#,
        x = fmt(origin.x),
        y = fmt(origin.y),
    );
    let _ = write!(
        out,
        r#"<text class="legend-title" x="0" y="0">Legend</text>"#
    );

    for (i, name) in names.iter().enumerate() {
        // Index recovery goes through name lookup, so duplicate names all
        // navigate to the first occurrence.
        let index = names.iter().position(|n| n == name).unwrap_or(i);
        let fill = colors.color_for(i);
        let stroke = darken(&fill);
        let row_y = LEGEND_ROW_STEP + i as f64 * LEGEND_ROW_STEP;
        let text = truncate_label(name, LEGEND_LABEL_MAX, LEGEND_LABEL_KEEP);
        let _ = write!(
            out,
            r#"<g class="legend-item" transform="translate(0,{y})" data-index="{index}"><rect width="14" height="14" fill="{fill}" stroke="{stroke}"/><text x="20" y="11">{label}</text><title>{title}</title></g>"#,
            y = fmt(row_y),
            fill = escape_xml(&fill),
            stroke = escape_xml(&stroke),
            label = escape_xml(&text),
            title = escape_xml(&format!("{name}\nClick to navigate")),
        );

        let row_width = 20.0 + CHAR_WIDTH * text.chars().count() as f64;
        regions.push(HitRegion {
            shape: HitShape::Rect(rect(
                origin.x,
                origin.y + row_y,
                row_width,
                LEGEND_ROW_HEIGHT,
            )),
            action: ClickAction::SelectElement(index),
        });
    }
    out.push_str("</g>");
}

/// A visible inline error panel replacing the surface content.
pub fn error_svg(message: &str, width: f64, height: f64, diagram_id: &str) -> String {
    let mut out = String::new();
    svg_open(&mut out, diagram_id, width, height);
    let _ = write!(
        &mut out,
        r#"<text class="error-text" x="20" y="34"><tspan class="error-title">Rendering Error: </tspan>{msg}</text>"#,
        msg = escape_xml(message),
    );
    out.push_str("</svg>");
    out
}

/// The placeholder shown before the first dataset arrives.
pub fn loading_svg(width: f64, height: f64, diagram_id: &str) -> String {
    let mut out = String::new();
    svg_open(&mut out, diagram_id, width, height);
    let _ = write!(
        &mut out,
        r#"<text class="loading-text" x="20" y="34">Loading diagram...</text>"#,
    );
    out.push_str("</svg>");
    out
}
