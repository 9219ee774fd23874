//! Categorical color assignment for group indices.

use rustc_hash::FxHashMap;

/// The classic 10-color categorical scheme.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Stable index -> color mapping, owned by one panel instance.
///
/// Assignment is first-seen: an index keeps its color for the lifetime of the
/// scale, across redraws, and the palette cycles once exhausted.
#[derive(Debug, Clone)]
pub struct CategoryScale {
    palette: Vec<String>,
    mapping: FxHashMap<usize, usize>,
    next: usize,
}

impl Default for CategoryScale {
    fn default() -> Self {
        Self::new(CATEGORY10.iter().map(|c| c.to_string()).collect())
    }
}

impl CategoryScale {
    pub fn new(palette: Vec<String>) -> Self {
        debug_assert!(!palette.is_empty());
        Self {
            palette,
            mapping: FxHashMap::default(),
            next: 0,
        }
    }

    pub fn color_for(&mut self, index: usize) -> String {
        if let Some(slot) = self.mapping.get(&index).copied() {
            return self.palette[slot % self.palette.len()].clone();
        }
        let slot = self.next;
        self.next += 1;
        self.mapping.insert(index, slot);
        self.palette[slot % self.palette.len()].clone()
    }
}

/// Darkens a `#rgb`/`#rrggbb` color by the conventional 0.7 channel factor,
/// for arc and swatch strokes. Non-hex colors pass through unchanged.
pub fn darken(color: &str) -> String {
    match parse_hex_rgb(color) {
        Some((r, g, b)) => format!(
            "#{:02x}{:02x}{:02x}",
            darken_channel(r),
            darken_channel(g),
            darken_channel(b)
        ),
        None => color.to_string(),
    }
}

fn darken_channel(c: u8) -> u8 {
    ((c as f64) * 0.7).round() as u8
}

fn parse_hex_rgb(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_index_yields_same_color_across_calls() {
        let mut scale = CategoryScale::default();
        let first = scale.color_for(3);
        scale.color_for(0);
        scale.color_for(7);
        assert_eq!(scale.color_for(3), first);
    }

    #[test]
    fn sequential_indices_walk_the_palette() {
        let mut scale = CategoryScale::default();
        for (i, expected) in CATEGORY10.iter().enumerate() {
            assert_eq!(scale.color_for(i), *expected);
        }
    }

    #[test]
    fn palette_cycles_after_ten_indices() {
        let mut scale = CategoryScale::default();
        for i in 0..10 {
            scale.color_for(i);
        }
        assert_eq!(scale.color_for(10), CATEGORY10[0]);
        assert_eq!(scale.color_for(11), CATEGORY10[1]);
    }

    #[test]
    fn darken_scales_each_channel() {
        assert_eq!(darken("#1f77b4"), "#16537e");
        assert_eq!(darken("#fff"), "#b3b3b3");
    }

    #[test]
    fn darken_passes_non_hex_through() {
        assert_eq!(darken("currentColor"), "currentColor");
    }
}
