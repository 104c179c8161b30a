use astrolabe::angle::circular_distance;
use astrolabe::chart::{load_chart_input_from_json, ChartKind, ChartSettings};
use astrolabe::layout::{layout_chart, layout_chart_default, BodyState, WheelParts};
use astrolabe::tooltip::place_tooltip;
use astrolabe::viewport::{fit_to_viewport, fit_wheel_size, FixedViewport, HeadlessCanvas};

const SEVEN_GOVERNORS: &str = include_str!("fixtures/seven_governors.json");
const TRANSIT: &str = include_str!("fixtures/transit.json");

#[test]
fn test_seven_governors_chart() {
    let input = load_chart_input_from_json(SEVEN_GOVERNORS).unwrap();
    let settings = ChartSettings::default();
    let layout = layout_chart_default(&input, &settings);

    assert_eq!(layout.kind, ChartKind::SevenGovernors);
    assert_eq!(layout.labels.len(), 9);
    assert_eq!(layout.outer_labels.len(), 2);

    // 日 月 水 are within 2° of each other and get spread
    for band in [&layout.labels, &layout.outer_labels] {
        for (i, a) in band.iter().enumerate() {
            for b in band.iter().skip(i + 1) {
                assert!(circular_distance(a.display_angle, b.display_angle) >= settings.label_gap - 1e-9);
            }
        }
    }

    let mars = layout.labels.iter().find(|p| p.body.name == "火").unwrap();
    assert_eq!(mars.state, BodyState::Stationary);
    let saturn = layout.labels.iter().find(|p| p.body.name == "土").unwrap();
    assert_eq!(saturn.state, BodyState::Retrograde);

    match &layout.parts {
        WheelParts::SevenGovernors {
            frame,
            mansions,
            moving_toward,
        } => {
            assert_eq!(frame.asc.as_ref().unwrap().text, "井14度");
            let total: f64 = mansions.iter().map(|m| m.arc.width).sum();
            assert!((total - 360.0).abs() < 1e-6);
            assert_eq!(moving_toward.years.len(), 6);
            assert_eq!(moving_toward.current.as_ref().unwrap().long, 82.0);
        }
        other => panic!("unexpected parts {:?}", other),
    }
}

#[test]
fn test_transit_chart() {
    let input = load_chart_input_from_json(TRANSIT).unwrap();
    let layout = layout_chart_default(&input, &ChartSettings::default());

    assert_eq!(layout.frame.offset, 180.0 - 100.25);
    assert_eq!(layout.rings.len(), 4);
    assert_eq!(layout.outer_labels.len(), 2);
    assert_eq!(layout.aspects.bodies, vec!["Sun", "Moon", "Jupiter"]);
    assert_eq!(layout.aspects.cells.len(), 3);

    match &layout.parts {
        WheelParts::Western(frame) => {
            assert_eq!(frame.houses.len(), 12);
            assert_eq!(frame.signs.len(), 12);
        }
        other => panic!("unexpected parts {:?}", other),
    }

    let sun = layout
        .tooltips
        .iter()
        .find(|t| t.lines[0] == "Sun" && t.lines[1].starts_with("Aries"))
        .unwrap();
    assert!(sun.lines.iter().any(|l| l.contains("ExactExaltation")));
}

#[test]
fn test_small_screen_pipeline() {
    let input = load_chart_input_from_json(SEVEN_GOVERNORS).unwrap();
    let settings = ChartSettings::default();

    let fitted = fit_wheel_size(settings.governors_size, settings.font_size, 360.0);
    let layout = layout_chart(&input, fitted.size, fitted.font_size, &settings);
    assert_eq!(layout.size, 360.0);
    assert_eq!(layout.font_size, 9.0);

    for hover in &layout.tooltips {
        let tip = place_tooltip(hover.at, hover.lines.clone(), layout.font_size, layout.size);
        assert!(tip.x >= -tip.width && tip.x + tip.width <= layout.size + tip.width);
        assert!(tip.y + tip.height <= layout.size || tip.y < hover.at.y);
    }
}

#[tokio::test]
async fn test_zoom_after_draw() {
    let settings = ChartSettings::default();
    let mut canvas = HeadlessCanvas::new(settings.western_size, settings.western_size);
    let zoom = fit_to_viewport(&mut canvas, &FixedViewport(Some(360.0)), settings.viewport_margin).await;
    assert_eq!(zoom, Some(350.0 / 700.0));
    assert_eq!(canvas.width, 360.0);
}
