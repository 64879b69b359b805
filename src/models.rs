use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 560.0;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: f64 = 240.0;
/// Default padding around the plot in pixels.
pub const DEFAULT_PADDING: f64 = 28.0;
/// Default cap on rows shown by the ranked chart.
pub const DEFAULT_MAX_BARS: usize = 5;

/// One named series, aligned by index with the dataset's categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

impl From<Value> for Series {
    fn from(v: Value) -> Self {
        Self {
            name: coerce_string(v.get("name").unwrap_or(&Value::Null)),
            values: coerce_seq(v.get("values"))
                .iter()
                .map(coerce_f64)
                .collect(),
        }
    }
}

/// Input of the grouped bar chart: ordered categories and ordered series.
///
/// Always normalized: every series carries exactly `categories.len()` finite values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct GroupedData {
    pub categories: Vec<String>,
    pub series: Vec<Series>,
}

impl GroupedData {
    /// Build a dataset, padding missing values with 0 and dropping values past the last category.
    pub fn new(categories: Vec<String>, series: Vec<Series>) -> Self {
        let n = categories.len();
        let series = series
            .into_iter()
            .map(|mut s| {
                s.values.resize(n, 0.0);
                for v in s.values.iter_mut() {
                    if !v.is_finite() {
                        *v = 0.0;
                    }
                }
                s
            })
            .collect();
        Self { categories, series }
    }

    /// Position of a series by name (first match).
    pub fn series_index(&self, name: &str) -> Option<usize> {
        self.series.iter().position(|s| s.name == name)
    }
}

impl From<Value> for GroupedData {
    fn from(v: Value) -> Self {
        let categories = coerce_seq(v.get("categories"))
            .iter()
            .map(coerce_string)
            .collect();
        let series = coerce_seq(v.get("series"))
            .iter()
            .cloned()
            .map(Series::from)
            .collect();
        Self::new(categories, series)
    }
}

/// One bar of the ranked chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Row {
    pub label: String,
    pub value: f64,
}

impl Row {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: if value.is_finite() { value } else { 0.0 },
        }
    }
}

impl From<Value> for Row {
    fn from(v: Value) -> Self {
        Self {
            label: coerce_string(v.get("label").unwrap_or(&Value::Null)),
            value: coerce_f64(v.get("value").unwrap_or(&Value::Null)),
        }
    }
}

/// Input of the ranked chart. Row order is the caller's; nothing is sorted here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct RankedData {
    pub rows: Vec<Row>,
}

impl RankedData {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl From<Value> for RankedData {
    fn from(v: Value) -> Self {
        Self {
            rows: coerce_seq(v.get("rows")).iter().cloned().map(Row::from).collect(),
        }
    }
}

/// Canvas size overrides shared by both chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            padding: DEFAULT_PADDING,
        }
    }
}

impl ChartOptions {
    /// Read `width`/`height`/`padding` from a dataset object, keeping defaults for absent or
    /// unusable entries (width/height must be positive, padding non-negative).
    pub fn from_value(v: &Value) -> Self {
        let number = |key: &str| v.get(key).and_then(Value::as_f64);
        Self::default().with_overrides(number("width"), number("height"), number("padding"))
    }

    /// Replace settings with the given values (e.g. CLI flags) under the same rules as
    /// [`ChartOptions::from_value`]; a missing or unusable value keeps the current setting.
    pub fn with_overrides(
        self,
        width: Option<f64>,
        height: Option<f64>,
        padding: Option<f64>,
    ) -> Self {
        Self {
            width: width.and_then(positive).unwrap_or(self.width),
            height: height.and_then(positive).unwrap_or(self.height),
            padding: padding
                .filter(|p| p.is_finite() && *p >= 0.0)
                .unwrap_or(self.padding),
        }
    }
}

/// Options of the ranked chart: canvas plus the row cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedOptions {
    pub chart: ChartOptions,
    pub max_bars: usize,
}

impl Default for RankedOptions {
    fn default() -> Self {
        Self {
            chart: ChartOptions::default(),
            max_bars: DEFAULT_MAX_BARS,
        }
    }
}

impl RankedOptions {
    /// Like [`ChartOptions::from_value`], plus `maxBars` (or `max_bars`).
    pub fn from_value(v: &Value) -> Self {
        let max_bars = v
            .get("maxBars")
            .or_else(|| v.get("max_bars"))
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite() && *n >= 0.0)
            .map(|n| n as usize)
            .unwrap_or(DEFAULT_MAX_BARS);
        Self {
            chart: ChartOptions::from_value(v),
            max_bars,
        }
    }
}

fn positive(x: f64) -> Option<f64> {
    (x.is_finite() && x > 0.0).then_some(x)
}

/// Treat anything that is not an array as an empty sequence.
fn coerce_seq(v: Option<&Value>) -> &[Value] {
    match v {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

/// Numbers pass through, numeric strings are parsed, everything else (and NaN/inf) becomes 0.
pub(crate) fn coerce_f64(v: &Value) -> f64 {
    let x = match v {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if x.is_finite() { x } else { 0.0 }
}

fn coerce_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
