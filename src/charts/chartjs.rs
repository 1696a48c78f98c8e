//! Chart.js rendering of a [`ChartSpec`].

use serde_json::{json, Map, Value};

use super::spec::{ChartKind, ChartSpec, Legend, Series};
use super::ChartBackend;

/// Renders the `{type, data, options}` object passed to `new Chart(ctx, ...)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartBackend for ChartJs {
    fn render(&self, spec: &ChartSpec) -> Value {
        let datasets: Vec<Value> = spec
            .series
            .iter()
            .map(|series| dataset(spec.kind, series))
            .collect();

        json!({
            "type": spec.kind.as_str(),
            "data": {
                "labels": spec.labels,
                "datasets": datasets,
            },
            "options": options(spec),
        })
    }
}

fn dataset(kind: ChartKind, series: &Series) -> Value {
    let style = &series.style;
    let mut out = Map::new();

    if let Some(label) = &series.label {
        out.insert("label".into(), json!(label));
    }
    out.insert("data".into(), json!(series.data));

    // Pie slices take one colour each; other kinds take a single colour
    let fill = match (kind, style.fill_colors.as_slice()) {
        (_, []) => None,
        (ChartKind::Pie, colors) => Some(json!(colors)),
        (_, [color]) => Some(json!(color)),
        (_, colors) => Some(json!(colors)),
    };
    if let Some(border) = &style.border_color {
        out.insert("borderColor".into(), json!(border));
    }
    if let Some(fill) = fill {
        out.insert("backgroundColor".into(), fill);
    }
    if let Some(radius) = style.corner_radius {
        out.insert("borderRadius".into(), json!(radius));
    }
    if let Some(tension) = style.tension {
        out.insert("tension".into(), json!(tension));
    }
    if style.fill_area {
        out.insert("fill".into(), json!(true));
    }

    Value::Object(out)
}

fn options(spec: &ChartSpec) -> Value {
    let opts = &spec.options;
    let mut out = Map::new();
    out.insert("responsive".into(), json!(opts.responsive));
    out.insert("maintainAspectRatio".into(), json!(opts.maintain_aspect_ratio));

    if spec.kind != ChartKind::Pie && (opts.begin_at_zero || !opts.axis_border) {
        let mut y = Map::new();
        if opts.begin_at_zero {
            y.insert("beginAtZero".into(), json!(true));
        }
        if !opts.axis_border {
            y.insert("grid".into(), json!({ "drawBorder": false }));
        }
        out.insert("scales".into(), json!({ "y": y }));
    }

    match opts.legend {
        Legend::Default => {}
        Legend::Bottom => {
            out.insert("plugins".into(), json!({ "legend": { "position": "bottom" } }));
        }
        Legend::Hidden => {
            out.insert("plugins".into(), json!({ "legend": { "display": false } }));
        }
    }

    Value::Object(out)
}
