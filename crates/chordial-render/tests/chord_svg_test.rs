use chordial_core::layout::{ChordLayout, LayoutEngine};
use chordial_core::{CategoryScale, color};
use chordial_render::{ClickAction, RenderOptions, render_diagram};

fn render(
    matrix: &[Vec<f64>],
    names: &[&str],
    options: RenderOptions,
) -> chordial_render::RenderedScene {
    let layout = ChordLayout::new().layout(matrix).expect("layout ok");
    let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    let mut colors = CategoryScale::default();
    render_diagram(&layout, &names, &options, &mut colors).expect("render ok")
}

#[test]
fn symmetric_pair_renders_two_arcs_and_one_ribbon() {
    let scene = render(
        &[vec![0.0, 5.0], vec![5.0, 0.0]],
        &["Alpha", "Beta"],
        RenderOptions::default(),
    );

    assert_eq!(scene.group_count, 2);
    assert_eq!(scene.chord_count, 1);
    assert_eq!(scene.svg.matches(r#"class="group-arc""#).count(), 2);
    assert_eq!(scene.svg.matches(r#"class="ribbon""#).count(), 1);

    // Source-colored ribbon: group 0's palette color.
    let ribbon_at = scene.svg.find(r#"class="ribbon""#).unwrap();
    assert!(scene.svg[ribbon_at..].contains(&format!(r#"fill="{}""#, color::CATEGORY10[0])));

    // Tooltips name both endpoints and the connection value.
    assert!(scene.svg.contains("Alpha: 5 connections"));
    assert!(scene.svg.contains("Alpha \u{2194} Beta: 5"));
}

#[test]
fn arcs_are_clickable_and_map_to_their_index() {
    let scene = render(
        &[vec![0.0, 5.0], vec![5.0, 0.0]],
        &["Alpha", "Beta"],
        RenderOptions::default(),
    );

    // Probe along each group's angular midpoint at mid-band radius.
    let mut seen = Vec::new();
    for step in 0..360 {
        let a = f64::from(step).to_radians();
        let r = 0.0_f64.max(scene.center.y.min(scene.center.x)) - 95.0;
        let x = scene.center.x + r * a.sin();
        let y = scene.center.y - r * a.cos();
        if let Some(action) = scene.hit_test(x, y) {
            if !seen.contains(&action) {
                seen.push(action);
            }
        }
    }
    assert!(seen.contains(&ClickAction::SelectElement(0)));
    assert!(seen.contains(&ClickAction::SelectElement(1)));
}

#[test]
fn ribbon_body_maps_to_the_relationship() {
    let scene = render(
        &[vec![0.0, 5.0], vec![5.0, 0.0]],
        &["Alpha", "Beta"],
        RenderOptions::default(),
    );
    // The diagram center sits inside the ribbon connecting the only pair.
    assert_eq!(
        scene.hit_test(scene.center.x, scene.center.y),
        Some(ClickAction::SelectRelationship(0, 1))
    );
}

#[test]
fn labels_render_truncated_and_upright() {
    let scene = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &["A very long element name here", "Short"],
        RenderOptions::default(),
    );
    // 29 chars -> 17 + ellipsis.
    assert!(scene.svg.contains(">A very long eleme...<"));
    assert!(scene.svg.contains(">Short<"));
    // Group 1 sits in the lower half, so its label is flipped and
    // right-aligned.
    assert!(scene.svg.contains("rotate(180)"));
    assert!(scene.svg.contains(r#"text-anchor="end""#));
    // The full name survives in the tooltip.
    assert!(scene.svg.contains("A very long element name here\nClick to navigate"));
}

#[test]
fn hiding_labels_shrinks_the_margin_and_drops_text() {
    let with = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &["A", "B"],
        RenderOptions::default(),
    );
    let without = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &["A", "B"],
        RenderOptions {
            show_labels: false,
            ..RenderOptions::default()
        },
    );
    assert!(with.svg.contains("group-label"));
    assert!(!without.svg.contains("group-label"));
    // Smaller padding means a larger outer radius in the path data.
    assert!(with.svg.contains("A220,220"));
    assert!(without.svg.contains("A280,280"));
    assert_eq!(
        without.regions.len(),
        2 + 1,
        "two arcs + one ribbon, no label regions"
    );
}

#[test]
fn legend_lists_every_name_with_truncation() {
    let names = ["Alpha", "A name exceeding the limit"];
    let scene = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &names,
        RenderOptions {
            show_legend: true,
            ..RenderOptions::default()
        },
    );

    assert!(scene.svg.contains(">Legend<"));
    assert_eq!(scene.svg.matches(r#"class="legend-item""#).count(), 2);
    // 26 chars -> 22 + ellipsis.
    assert!(scene.svg.contains(">A name exceeding the l...<"));

    // Legend rows are clickable in surface coordinates: the first row sits
    // at (diagram_width + 20, 50).
    let dw = 800.0 - chordial_render::LEGEND_WIDTH;
    assert_eq!(
        scene.hit_test(dw + 25.0, 55.0),
        Some(ClickAction::SelectElement(0))
    );
    assert_eq!(
        scene.hit_test(dw + 25.0, 75.0),
        Some(ClickAction::SelectElement(1))
    );
}

#[test]
fn legend_reserves_horizontal_space() {
    let with = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &["A", "B"],
        RenderOptions {
            show_legend: true,
            ..RenderOptions::default()
        },
    );
    // Diagram center shifts left by half the legend width.
    assert_eq!(with.center.x, (800.0 - chordial_render::LEGEND_WIDTH) / 2.0);

    let without = render(
        &[vec![0.0, 1.0], vec![1.0, 0.0]],
        &["A", "B"],
        RenderOptions::default(),
    );
    assert_eq!(without.center.x, 400.0);
}

#[test]
fn too_small_surface_is_a_negative_radius_error() {
    let layout = ChordLayout::new()
        .layout(&[vec![0.0, 1.0], vec![1.0, 0.0]])
        .unwrap();
    let names = vec!["A".to_string(), "B".to_string()];
    let mut colors = CategoryScale::default();
    let err = render_diagram(
        &layout,
        &names,
        &RenderOptions {
            width: 100.0,
            height: 100.0,
            ..RenderOptions::default()
        },
        &mut colors,
    )
    .unwrap_err();
    assert!(err.to_string().contains("negative arc radius"));
}

#[test]
fn colors_stay_stable_across_renders_of_one_scale() {
    let layout = ChordLayout::new()
        .layout(&[vec![0.0, 5.0], vec![5.0, 0.0]])
        .unwrap();
    let names = vec!["Alpha".to_string(), "Beta".to_string()];
    let mut colors = CategoryScale::default();
    let first = render_diagram(&layout, &names, &RenderOptions::default(), &mut colors).unwrap();
    let second = render_diagram(&layout, &names, &RenderOptions::default(), &mut colors).unwrap();
    assert_eq!(first.svg, second.svg);
}
