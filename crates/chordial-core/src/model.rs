use serde::{Deserialize, Serialize};

/// One dataset for the diagram: a square adjacency matrix where cell `(i, j)`
/// holds the relationship weight from entity `i` to entity `j`, plus one
/// display label per index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramData {
    pub matrix: Vec<Vec<f64>>,
    pub names: Vec<String>,
    #[serde(default)]
    pub options: DisplayOptions,
}

/// Display options as sent by the host. Missing fields take the host UI
/// defaults: labels on, legend off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(rename = "showLabels", default = "default_true")]
    pub show_labels: bool,
    #[serde(rename = "showLegend", default)]
    pub show_legend: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_legend: false,
        }
    }
}

fn default_true() -> bool {
    true
}
