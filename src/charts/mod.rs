//! Charts Module
//!
//! Pie, bar and line chart factories. Each factory fills in a
//! backend-neutral [`ChartSpec`] and hands it to a [`ChartBackend`]; the
//! default backend produces Chart.js configuration objects.

mod chartjs;
mod spec;

use serde::Serialize;
use serde_json::Value;

pub use chartjs::ChartJs;
pub use spec::{ChartKind, ChartOptions, ChartSpec, Legend, Series, SeriesStyle};

/// Slice colours used when a pie chart gets none.
pub const DEFAULT_PIE_COLORS: [&str; 5] = ["#28a745", "#dc3545", "#ffc107", "#17a2b8", "#6c757d"];

/// Series colour used when a bar or line chart gets none.
pub const DEFAULT_SERIES_COLOR: &str = "#007bff";

/// Area fill under line charts.
pub const LINE_AREA_FILL: &str = "rgba(0,123,255,0.1)";

/// Turns a chart description into whatever the drawing library consumes.
pub trait ChartBackend {
    fn render(&self, spec: &ChartSpec) -> Value;
}

/// A configured chart bound to a drawing target (a canvas element id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub target: String,
    #[serde(skip)]
    pub spec: ChartSpec,
    pub config: Value,
}

/// Builds pie, bar and line charts through backend `B`.
#[derive(Debug, Clone, Default)]
pub struct ChartBuilder<B = ChartJs> {
    backend: B,
}

impl<B: ChartBackend> ChartBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Pie chart with one slice per label; legend at the bottom.
    pub fn pie(
        &self,
        target: &str,
        labels: Vec<String>,
        data: Vec<f64>,
        colors: Option<Vec<String>>,
    ) -> Chart {
        let fill_colors = colors
            .unwrap_or_else(|| DEFAULT_PIE_COLORS.iter().map(|c| c.to_string()).collect());

        self.build(
            target,
            ChartSpec {
                kind: ChartKind::Pie,
                labels,
                series: vec![Series {
                    label: None,
                    data,
                    style: SeriesStyle {
                        fill_colors,
                        ..SeriesStyle::default()
                    },
                }],
                options: ChartOptions {
                    legend: Legend::Bottom,
                    ..ChartOptions::default()
                },
            },
        )
    }

    /// Single-series bar chart with rounded bars, a zero-based value axis and
    /// no legend.
    pub fn bar(
        &self,
        target: &str,
        labels: Vec<String>,
        data: Vec<f64>,
        label: Option<String>,
        color: Option<String>,
    ) -> Chart {
        let color = color.unwrap_or_else(|| DEFAULT_SERIES_COLOR.to_string());

        self.build(
            target,
            ChartSpec {
                kind: ChartKind::Bar,
                labels,
                series: vec![Series {
                    label,
                    data,
                    style: SeriesStyle {
                        fill_colors: vec![color],
                        corner_radius: Some(5),
                        ..SeriesStyle::default()
                    },
                }],
                options: ChartOptions {
                    legend: Legend::Hidden,
                    begin_at_zero: true,
                    axis_border: false,
                    ..ChartOptions::default()
                },
            },
        )
    }

    /// Single-series smoothed line chart with a filled area and a zero-based
    /// value axis.
    pub fn line(
        &self,
        target: &str,
        labels: Vec<String>,
        data: Vec<f64>,
        label: Option<String>,
        color: Option<String>,
    ) -> Chart {
        let color = color.unwrap_or_else(|| DEFAULT_SERIES_COLOR.to_string());

        self.build(
            target,
            ChartSpec {
                kind: ChartKind::Line,
                labels,
                series: vec![Series {
                    label,
                    data,
                    style: SeriesStyle {
                        border_color: Some(color),
                        fill_colors: vec![LINE_AREA_FILL.to_string()],
                        tension: Some(0.4),
                        fill_area: true,
                        ..SeriesStyle::default()
                    },
                }],
                options: ChartOptions {
                    begin_at_zero: true,
                    ..ChartOptions::default()
                },
            },
        )
    }

    fn build(&self, target: &str, spec: ChartSpec) -> Chart {
        let config = self.backend.render(&spec);
        Chart {
            target: target.to_string(),
            spec,
            config,
        }
    }
}

/// Pie chart rendered for Chart.js.
pub fn create_pie_chart(
    target: &str,
    labels: Vec<String>,
    data: Vec<f64>,
    colors: Option<Vec<String>>,
) -> Chart {
    ChartBuilder::new(ChartJs).pie(target, labels, data, colors)
}

/// Bar chart rendered for Chart.js.
pub fn create_bar_chart(
    target: &str,
    labels: Vec<String>,
    data: Vec<f64>,
    label: Option<String>,
    color: Option<String>,
) -> Chart {
    ChartBuilder::new(ChartJs).bar(target, labels, data, label, color)
}

/// Line chart rendered for Chart.js.
pub fn create_line_chart(
    target: &str,
    labels: Vec<String>,
    data: Vec<f64>,
    label: Option<String>,
    color: Option<String>,
) -> Chart {
    ChartBuilder::new(ChartJs).line(target, labels, data, label, color)
}
