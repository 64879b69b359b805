use expense_charts::models::{ChartOptions, GroupedData, RankedData, RankedOptions, Row, Series};
use expense_charts::viz::tooltip::HoverSource;
use expense_charts::viz::{Chart, ChartEvent, GroupedChart, Point, PrimitiveId, RankedChart};

fn grouped_chart() -> GroupedChart {
    GroupedChart::new(
        GroupedData::new(
            vec!["Jan".into(), "Feb".into()],
            vec![
                Series::new("Hotel", vec![100.0, 200.0]),
                Series::new("Food", vec![300.0, 50.0]),
            ],
        ),
        ChartOptions::default(),
    )
}

fn hover(target: PrimitiveId, x: f64, y: f64) -> ChartEvent {
    ChartEvent::Hover {
        target,
        pointer: Point::new(x, y),
        container_origin: Point::new(100.0, 50.0),
    }
}

#[test]
fn hover_positions_tooltip_relative_to_container() {
    let mut chart = grouped_chart();
    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 0 }, 150.0, 90.0));

    let t = chart.tooltip().expect("tooltip after hover");
    assert_eq!((t.x, t.y), (58.0, 48.0));
    assert_eq!(t.content, "Hotel · Jan: ₹100");
}

#[test]
fn leave_clears_and_next_hover_is_never_stale() {
    let mut chart = grouped_chart();
    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 0 }, 150.0, 90.0));
    chart.handle(ChartEvent::Leave);
    assert!(chart.tooltip().is_none());

    chart.handle(hover(PrimitiveId::Bar { category: 1, series: 1 }, 200.0, 120.0));
    let t = chart.tooltip().expect("tooltip after second hover");
    assert_eq!(t.content, "Food · Feb: ₹50");

    // moving straight to another bar replaces the content without a leave in between
    chart.handle(hover(PrimitiveId::Bar { category: 1, series: 0 }, 180.0, 120.0));
    assert_eq!(chart.tooltip().unwrap().content, "Hotel · Feb: ₹200");
}

#[test]
fn hovering_a_legend_chip_shows_nothing() {
    let mut chart = grouped_chart();
    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 0 }, 150.0, 90.0));
    chart.handle(hover(PrimitiveId::LegendChip(0), 500.0, 60.0));
    assert!(chart.tooltip().is_none());
}

#[test]
fn legend_click_toggles_visibility_only() {
    let mut chart = grouped_chart();
    chart.handle(ChartEvent::Click {
        target: PrimitiveId::LegendChip(1),
    });
    assert!(!chart.visibility().is_visible(1));
    assert!(chart.visibility().is_visible(0));
    assert_eq!(chart.geometry().domain_max, 200.0);

    // clicking a bar or an unknown chip changes nothing
    let before = chart.visibility().clone();
    chart.handle(ChartEvent::Click {
        target: PrimitiveId::Bar { category: 0, series: 0 },
    });
    chart.handle(ChartEvent::Click {
        target: PrimitiveId::LegendChip(9),
    });
    assert_eq!(chart.visibility(), &before);

    chart.toggle_series(1);
    assert_eq!(chart.visibility().hidden_count(), 0);
    assert_eq!(chart.geometry().domain_max, 300.0);
}

#[test]
fn hidden_bars_show_no_tooltip() {
    let mut chart = grouped_chart();
    chart.handle(ChartEvent::Click {
        target: PrimitiveId::LegendChip(1),
    });
    chart.handle(hover(PrimitiveId::Bar { category: 1, series: 0 }, 150.0, 90.0));
    assert!(chart.tooltip().is_some());

    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 1 }, 150.0, 90.0));
    assert!(chart.tooltip().is_none());
    let region = chart
        .scene()
        .region(PrimitiveId::Bar { category: 0, series: 1 })
        .cloned()
        .unwrap();
    assert_eq!(region.content, None);

    // shown again, the bar is hoverable again
    chart.toggle_series(1);
    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 1 }, 150.0, 90.0));
    assert_eq!(chart.tooltip().unwrap().content, "Food · Jan: ₹300");
}

#[test]
fn hit_test_finds_bars_and_chips() {
    let chart = grouped_chart();
    let geo = chart.geometry();
    let scene = chart.scene();

    let bar = geo.bar(1, 0).unwrap();
    let hit = scene.hit_test(bar.x + bar.width / 2.0, bar.y + bar.height / 2.0);
    assert_eq!(hit, Some(PrimitiveId::Bar { category: 1, series: 0 }));

    let chip = &geo.legend.chips[1].bounds;
    let hit = scene.hit_test(chip.x + 1.0, chip.y + 1.0);
    assert_eq!(hit, Some(PrimitiveId::LegendChip(1)));

    assert_eq!(scene.hit_test(1.0, 1.0), None);

    let region = scene
        .region(PrimitiveId::Bar { category: 1, series: 0 })
        .unwrap();
    assert_eq!(region.content.as_deref(), Some("Hotel · Feb: ₹200"));
}

#[test]
fn tooltip_does_not_capture_pointer() {
    let mut chart = grouped_chart();
    let regions_before = chart.scene().regions.len();
    chart.handle(hover(PrimitiveId::Bar { category: 0, series: 1 }, 150.0, 90.0));

    let scene = chart.scene();
    assert_eq!(scene.regions.len(), regions_before);
    assert!(scene.labels().any(|l| l == "Food · Jan: ₹300"));
}

#[test]
fn instances_do_not_share_state() {
    let mut a = grouped_chart();
    let b = grouped_chart();
    a.handle(hover(PrimitiveId::Bar { category: 0, series: 0 }, 150.0, 90.0));
    a.handle(ChartEvent::Click {
        target: PrimitiveId::LegendChip(0),
    });
    assert!(b.tooltip().is_none());
    assert_eq!(b.visibility().hidden_count(), 0);
}

#[test]
fn custom_tooltip_format() {
    fn terse(source: &HoverSource<'_>) -> String {
        match source {
            HoverSource::Bar { series, value, .. } => format!("{series}={value}"),
            HoverSource::Row { label, value } => format!("{label}={value}"),
        }
    }
    let mut chart = grouped_chart().with_tooltip_format(terse);
    chart.handle(hover(PrimitiveId::Bar { category: 1, series: 0 }, 150.0, 90.0));
    assert_eq!(chart.tooltip().unwrap().content, "Hotel=200");
}

#[test]
fn ranked_rows_hover_and_ignore_clicks() {
    let data = RankedData::new(vec![
        Row::new("Travel", 120_000.0),
        Row::new("Hotel", 8_000.0),
        Row::new("Food", 50.0),
    ]);
    let options = RankedOptions {
        max_bars: 2,
        ..RankedOptions::default()
    };
    let mut chart = RankedChart::new(data, options);

    chart.handle(hover(PrimitiveId::RankedRow(0), 300.0, 70.0));
    assert_eq!(chart.tooltip().unwrap().content, "Travel: ₹1,20,000");

    // the third row is past the cap and not on screen
    chart.handle(hover(PrimitiveId::RankedRow(2), 300.0, 70.0));
    assert!(chart.tooltip().is_none());

    chart.handle(ChartEvent::Click {
        target: PrimitiveId::RankedRow(0),
    });
    assert_eq!(chart.scene().regions.len(), 2);

    let geo = chart.geometry();
    let row = &geo.rows[1];
    let hit = chart
        .scene()
        .hit_test(row.track_x + 1.0, row.baseline_y);
    assert_eq!(hit, Some(PrimitiveId::RankedRow(1)));
}
