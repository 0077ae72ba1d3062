use scroll_chart::ChartError;
use scroll_chart::api::{
    ChartSizingController, DEFAULT_FIXED_HEIGHT, DEFAULT_MIN_X_TICK_WIDTH, ResizeTargetPolicy,
    ScrollableChartConfig,
};
use scroll_chart::core::LayoutMode;
use scroll_chart::render::NullSurface;
use scroll_chart::viewport::MeasuredContainer;

#[test]
fn default_config_matches_documented_values() {
    let config = ScrollableChartConfig::default();
    assert_eq!(config.min_x_tick_width, 150.0);
    assert_eq!(config.min_x_tick_width, DEFAULT_MIN_X_TICK_WIDTH);
    assert_eq!(config.fixed_height, DEFAULT_FIXED_HEIGHT);
    assert_eq!(config.resize_policy, ResizeTargetPolicy::TickSpan);
}

#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let config = ScrollableChartConfig::from_json_str("{}").expect("empty config");
    assert_eq!(config, ScrollableChartConfig::default());

    let config = ScrollableChartConfig::from_json_str(
        r#"{"min_x_tick_width": 50.0, "resize_policy": "TickSpanPlusAxisGutter"}"#,
    )
    .expect("partial config");
    assert_eq!(config.min_x_tick_width, 50.0);
    assert_eq!(config.fixed_height, 350.0);
    assert_eq!(
        config.resize_policy,
        ResizeTargetPolicy::TickSpanPlusAxisGutter
    );
}

#[test]
fn json_config_is_validated() {
    let err = ScrollableChartConfig::from_json_str(r#"{"min_x_tick_width": 0.0}"#)
        .expect_err("zero width must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ScrollableChartConfig::from_json_str(r#"{"fixed_height": -1.0}"#)
        .expect_err("negative height must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = ScrollableChartConfig::from_json_str("not json").expect_err("garbage must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[test]
fn controller_rejects_invalid_config() {
    let result: Result<ChartSizingController<NullSurface>, _> = ChartSizingController::new(
        ScrollableChartConfig::new(-5.0),
        MeasuredContainer::with_width(1000.0),
    );
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}

#[test]
fn set_config_reruns_decision() {
    let container = MeasuredContainer::with_width(1000.0);
    let mut controller: ChartSizingController<NullSurface> =
        ChartSizingController::new(ScrollableChartConfig::new(10.0), container)
            .expect("controller init");
    controller.mount_surface(NullSurface::default());
    controller
        .set_data(scroll_chart::core::ChartData::new(vec![
            scroll_chart::core::ChartDataset::from_values("a", &[0.0; 20]),
        ]))
        .expect("set data");
    assert_eq!(controller.mode(), LayoutMode::Regular);

    controller
        .set_config(ScrollableChartConfig::new(100.0).with_fixed_height(200.0))
        .expect("set config");
    assert_eq!(controller.mode(), LayoutMode::Scroll);
    let surface = controller.surface().expect("mounted");
    assert_eq!(surface.last_size, Some((2000.0, 200.0)));

    let err = controller
        .set_config(ScrollableChartConfig::default().with_fixed_height(f64::NAN))
        .expect_err("nan height must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
    assert_eq!(controller.config().fixed_height, 200.0);
}
