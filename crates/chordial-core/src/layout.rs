//! Chord layout: adjacency matrix -> angular groups and chords.
//!
//! Angle convention matches the drawing side: zero at 12 o'clock, increasing
//! clockwise, in radians.

use crate::error::{Error, Result};

/// Fixed angular gap between adjacent groups, in radians.
pub const PAD_ANGLE: f64 = 0.05;

/// The circular segment representing one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ChordGroup {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Aggregate outgoing weight (row sum).
    pub value: f64,
}

/// The sub-arc of group `index` allocated to its flow toward `subindex`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordEnd {
    pub index: usize,
    pub subindex: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub value: f64,
}

/// One ribbon between two groups. The endpoint carrying the larger flow is
/// the source; on equal flows the lower-index group stays the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub source: ChordEnd,
    pub target: ChordEnd,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChordLayoutData {
    pub groups: Vec<ChordGroup>,
    pub chords: Vec<Chord>,
}

/// Geometry computation seam. The bundled implementation is [`ChordLayout`];
/// hosts may inject their own (or none, which puts the panel into a
/// persistent dependency-missing state).
pub trait LayoutEngine: std::fmt::Debug + Send + Sync {
    fn layout(&self, matrix: &[Vec<f64>]) -> Result<ChordLayoutData>;
}

/// The classic chord layout convention: groups in ascending index order,
/// sub-arcs within a group in descending cell-value order, one chord per
/// unordered index pair with a non-zero weight in either direction.
#[derive(Debug, Clone, Copy)]
pub struct ChordLayout {
    pad_angle: f64,
}

impl Default for ChordLayout {
    fn default() -> Self {
        Self {
            pad_angle: PAD_ANGLE,
        }
    }
}

impl ChordLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle.max(0.0);
        self
    }
}

impl LayoutEngine for ChordLayout {
    fn layout(&self, matrix: &[Vec<f64>]) -> Result<ChordLayoutData> {
        let n = matrix.len();
        if n == 0 {
            return Ok(ChordLayoutData::default());
        }

        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::render(format!(
                    "matrix row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
            for (j, v) in row.iter().enumerate() {
                if !v.is_finite() || *v < 0.0 {
                    return Err(Error::render(format!(
                        "matrix cell ({i}, {j}) has invalid weight {v}"
                    )));
                }
            }
        }

        let row_sums: Vec<f64> = matrix.iter().map(|row| row.iter().sum()).collect();
        let total: f64 = row_sums.iter().sum();

        // Column visit order per group: descending cell value; the sort is
        // stable, so equal cells keep ascending column order.
        let mut sub_order: Vec<Vec<usize>> = Vec::with_capacity(n);
        for row in matrix {
            let mut cols: Vec<usize> = (0..n).collect();
            cols.sort_by(|&a, &b| row[b].total_cmp(&row[a]));
            sub_order.push(cols);
        }

        let tau = std::f64::consts::TAU;
        let free = (tau - self.pad_angle * n as f64).max(0.0);
        let unit = if total > 0.0 { free / total } else { 0.0 };
        // When there is no angular extent to distribute, spread the (empty)
        // groups evenly instead of producing degenerate geometry.
        let pad = if unit > 0.0 { self.pad_angle } else { tau / n as f64 };

        let mut subgroups = vec![ChordEnd::default(); n * n];
        let mut groups = Vec::with_capacity(n);
        let mut x = 0.0;
        for i in 0..n {
            let x0 = x;
            for &j in &sub_order[i] {
                let v = matrix[i][j];
                let a0 = x;
                x += v * unit;
                subgroups[j * n + i] = ChordEnd {
                    index: i,
                    subindex: j,
                    start_angle: a0,
                    end_angle: x,
                    value: v,
                };
            }
            groups.push(ChordGroup {
                index: i,
                start_angle: x0,
                end_angle: x,
                value: row_sums[i],
            });
            x += pad;
        }

        let mut chords = Vec::new();
        for i in 0..n {
            for j in i..n {
                let source = subgroups[j * n + i].clone();
                let target = subgroups[i * n + j].clone();
                if source.value > 0.0 || target.value > 0.0 {
                    chords.push(if source.value < target.value {
                        Chord {
                            source: target,
                            target: source,
                        }
                    } else {
                        Chord { source, target }
                    });
                }
            }
        }

        tracing::debug!(
            groups = groups.len(),
            chords = chords.len(),
            "chord layout computed"
        );

        Ok(ChordLayoutData { groups, chords })
    }
}
