//! Backend-neutral chart description.

use serde::{Deserialize, Serialize};

/// Kind of chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

/// Where the legend goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Legend {
    /// Whatever the backend does by default
    #[default]
    Default,
    Bottom,
    Hidden,
}

/// How a series is painted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesStyle {
    /// One colour for the whole series, or one per data point (pie slices)
    pub fill_colors: Vec<String>,
    pub border_color: Option<String>,
    /// Rounded bar corners, in pixels
    pub corner_radius: Option<u32>,
    /// Line curvature; 0 draws straight segments
    pub tension: Option<f64>,
    /// Fill the area under a line
    pub fill_area: bool,
}

/// A named run of values aligned with the chart labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub style: SeriesStyle,
}

/// Chart-wide layout options.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub legend: Legend,
    /// Value axis starts at zero (ignored by charts without axes)
    pub begin_at_zero: bool,
    /// Draw the border line of the value axis grid
    pub axis_border: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: Legend::Default,
            begin_at_zero: false,
            axis_border: true,
        }
    }
}

/// Everything a backend needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub options: ChartOptions,
}
