use expense_charts::ChartError;
use expense_charts::models::{DEFAULT_MAX_BARS, GroupedData};
use expense_charts::storage;
use std::fs;

#[test]
fn grouped_json_with_overrides() {
    let (data, options) = storage::parse_grouped_json(
        r#"{
            "categories": ["Jan", "Feb"],
            "series": [{ "name": "Hotel", "values": [100, 200] }],
            "width": 800, "height": 320, "padding": 10
        }"#,
    )
    .unwrap();
    assert_eq!(data.categories, vec!["Jan", "Feb"]);
    assert_eq!(data.series[0].values, vec![100.0, 200.0]);
    assert_eq!((options.width, options.height, options.padding), (800.0, 320.0, 10.0));
}

#[test]
fn malformed_grouped_json_degrades_gracefully() {
    let (data, options) = storage::parse_grouped_json(
        r#"{
            "categories": ["Jan", 2024],
            "series": [
                { "name": "A", "values": [1, "x", null, 5] },
                { "name": "B" },
                { "values": ["7.5"] }
            ],
            "width": "wide", "height": -5, "padding": -1
        }"#,
    )
    .unwrap();
    assert_eq!(data.categories, vec!["Jan", "2024"]);
    assert_eq!(data.series[0].values, vec![1.0, 0.0]);
    assert_eq!(data.series[1].values, vec![0.0, 0.0]);
    assert_eq!(data.series[2].name, "");
    assert_eq!(data.series[2].values, vec![7.5, 0.0]);
    assert_eq!((options.width, options.height, options.padding), (560.0, 240.0, 28.0));

    let (empty, _) = storage::parse_grouped_json(r#"{ "series": 3 }"#).unwrap();
    assert_eq!(empty, GroupedData::default());
}

#[test]
fn invalid_json_is_an_error() {
    assert!(matches!(
        storage::parse_grouped_json("{ not json"),
        Err(ChartError::Json(_))
    ));
}

#[test]
fn ranked_json_reads_max_bars() {
    let (data, options) = storage::parse_ranked_json(
        r#"{ "rows": [{ "label": "Travel", "value": "1200" }, { "label": "Food" }], "maxBars": 1 }"#,
    )
    .unwrap();
    assert_eq!(data.rows.len(), 2);
    assert_eq!(data.rows[0].value, 1200.0);
    assert_eq!(data.rows[1].value, 0.0);
    assert_eq!(options.max_bars, 1);

    let (_, defaults) = storage::parse_ranked_json(r#"{ "rows": [] }"#).unwrap();
    assert_eq!(defaults.max_bars, DEFAULT_MAX_BARS);
}

#[test]
fn grouped_and_ranked_csv() {
    let grouped = "category,Hotel,Food\nJan,100,300\nFeb,\"1,200\",\n";
    let data = storage::read_grouped_csv(grouped.as_bytes()).unwrap();
    assert_eq!(data.categories, vec!["Jan", "Feb"]);
    assert_eq!(data.series[0].name, "Hotel");
    assert_eq!(data.series[0].values, vec![100.0, 1200.0]);
    assert_eq!(data.series[1].values, vec![300.0, 0.0]);

    let ranked = "value,label\n₹450.5,Food\n90,Fuel\n";
    let data = storage::read_ranked_csv(ranked.as_bytes()).unwrap();
    assert_eq!(data.rows[0].label, "Food");
    assert_eq!(data.rows[0].value, 450.5);
    assert_eq!(data.rows[1].label, "Fuel");
}

#[test]
fn load_dispatches_on_extension() {
    let dir = tempfile::tempdir().unwrap();

    let json = dir.path().join("trip.json");
    fs::write(
        &json,
        r#"{ "categories": ["Jan"], "series": [{ "name": "Hotel", "values": [10] }] }"#,
    )
    .unwrap();
    let (data, _) = storage::load_grouped(&json).unwrap();
    assert_eq!(data.series[0].values, vec![10.0]);

    let csv = dir.path().join("top.CSV");
    fs::write(&csv, "label,value\nTravel,5\n").unwrap();
    let (data, options) = storage::load_ranked(&csv).unwrap();
    assert_eq!(data.rows[0].label, "Travel");
    assert_eq!(options.max_bars, DEFAULT_MAX_BARS);

    assert!(matches!(
        storage::load_grouped(dir.path().join("missing.json")),
        Err(ChartError::Io(_))
    ));
}

#[test]
fn save_json_writes_geometry() {
    use expense_charts::models::{ChartOptions, Series};
    use expense_charts::viz::{VisibilityState, layout_grouped};

    let data = GroupedData::new(vec!["Jan".into()], vec![Series::new("Hotel", vec![42.0])]);
    let geo = layout_grouped(&data, &VisibilityState::new(1), &ChartOptions::default());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geometry.json");
    storage::save_json(&geo, &path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["domain_max"], 42.0);
    assert_eq!(v["gridlines"].as_array().unwrap().len(), 4);
}

#[test]
fn open_chart_mounts_either_kind() {
    use expense_charts::viz::{self, Chart, ChartKind};

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("top.json");
    fs::write(
        &path,
        r#"{ "rows": [{ "label": "Travel", "value": 10 }], "width": 700 }"#,
    )
    .unwrap();

    let chart = viz::open_chart(ChartKind::Ranked, &path).unwrap();
    let (w, h) = chart.size();
    assert_eq!(w, 700.0);
    assert!((h - 240.0).abs() < 1e-9);
    assert!(chart.tooltip().is_none());
}
