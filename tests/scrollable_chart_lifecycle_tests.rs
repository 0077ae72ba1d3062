use scroll_chart::api::{ChartSizingController, ScrollableChart, ScrollableChartConfig};
use scroll_chart::core::{ChartData, ChartDataset, LayoutMode};
use scroll_chart::render::RecordingSurface;
use scroll_chart::viewport::{MeasuredContainer, ViewportWatcher};

fn eight_tick_data() -> ChartData {
    ChartData::new(vec![
        ChartDataset::from_values("a", &[1.0; 5]),
        ChartDataset::from_values("b", &[2.0; 8]),
        ChartDataset::from_values("c", &[3.0; 3]),
    ])
}

fn mount_chart(
    container: &MeasuredContainer,
    watcher: &ViewportWatcher,
) -> ScrollableChart<RecordingSurface> {
    let mut controller =
        ChartSizingController::new(ScrollableChartConfig::default(), container.clone())
            .expect("controller init");
    controller.set_data(eight_tick_data()).expect("set data");
    controller.mount_surface(RecordingSurface::new());
    ScrollableChart::mount(controller, watcher)
}

fn resize_count(chart: &ScrollableChart<RecordingSurface>) -> usize {
    chart
        .controller()
        .surface()
        .expect("surface mounted")
        .resize_calls
        .len()
}

#[test]
fn mounting_subscribes_once_and_runs_initial_trigger() {
    let container = MeasuredContainer::with_width(1000.0);
    let watcher = ViewportWatcher::new();
    let chart = mount_chart(&container, &watcher);

    assert_eq!(watcher.listener_count(), 1);
    assert!(chart.is_subscribed());
    assert_eq!(chart.mode(), LayoutMode::Scroll);
    // One resize from attaching the surface, one from the mount trigger.
    assert_eq!(resize_count(&chart), 2);
}

#[test]
fn growing_viewport_switches_scroll_to_regular_and_keeps_listener() {
    let container = MeasuredContainer::with_width(1000.0);
    let watcher = ViewportWatcher::new();
    let chart = mount_chart(&container, &watcher);
    assert_eq!(chart.mode(), LayoutMode::Scroll);
    assert_eq!(chart.effective_options().responsive(), Some(false));

    container.set_width(1600.0);
    assert_eq!(watcher.dispatch_resize(), 1);

    assert_eq!(chart.mode(), LayoutMode::Regular);
    assert_eq!(chart.effective_options().responsive(), Some(true));
    {
        let controller = chart.controller();
        let surface = controller.surface().expect("surface mounted");
        let pushed = surface.last_options.as_ref().expect("options pushed");
        assert_eq!(pushed.responsive(), Some(true));
    }
    assert_eq!(watcher.listener_count(), 1);
    assert!(chart.is_subscribed());

    let controller = chart.unmount().expect("controller returned");
    assert_eq!(watcher.listener_count(), 0);
    assert_eq!(controller.mode(), LayoutMode::Regular);
}

#[test]
fn every_resize_event_recomputes_without_debounce() {
    let container = MeasuredContainer::with_width(1000.0);
    let watcher = ViewportWatcher::new();
    let chart = mount_chart(&container, &watcher);
    let before = resize_count(&chart);

    for _ in 0..5 {
        watcher.dispatch_resize();
    }
    assert_eq!(resize_count(&chart), before + 5);
}

#[test]
fn dropping_chart_releases_viewport_listener() {
    let container = MeasuredContainer::with_width(1000.0);
    let watcher = ViewportWatcher::new();
    {
        let _chart = mount_chart(&container, &watcher);
        assert_eq!(watcher.listener_count(), 1);
    }
    assert_eq!(watcher.listener_count(), 0);
    assert_eq!(watcher.dispatch_resize(), 0);
}

#[test]
fn charts_sharing_a_watcher_are_notified_independently() {
    let narrow = MeasuredContainer::with_width(1000.0);
    let wide = MeasuredContainer::with_width(1600.0);
    let watcher = ViewportWatcher::new();
    let first = mount_chart(&narrow, &watcher);
    let second = mount_chart(&wide, &watcher);

    assert_eq!(watcher.dispatch_resize(), 2);
    assert_eq!(first.mode(), LayoutMode::Scroll);
    assert_eq!(second.mode(), LayoutMode::Regular);

    drop(first);
    assert_eq!(watcher.listener_count(), 1);
    assert!(second.is_subscribed());
}

#[test]
fn data_and_tick_width_changes_flow_through_component() {
    let container = MeasuredContainer::with_width(1600.0);
    let watcher = ViewportWatcher::new();
    let chart = mount_chart(&container, &watcher);
    assert_eq!(chart.mode(), LayoutMode::Regular);

    chart.set_min_x_tick_width(300.0).expect("set width");
    assert_eq!(chart.mode(), LayoutMode::Scroll);
    assert_eq!(chart.controller().target_render_width(), Some(2400.0));

    chart
        .set_data(ChartData::new(vec![ChartDataset::from_values("a", &[1.0; 4])]))
        .expect("set data");
    assert_eq!(chart.mode(), LayoutMode::Regular);
}

#[test]
fn container_layout_allows_horizontal_scroll() {
    let container = MeasuredContainer::with_width(1000.0);
    let watcher = ViewportWatcher::new();
    let chart = mount_chart(&container, &watcher);

    let layout = chart.container_layout();
    assert_eq!(layout.min_height_px, 350.0);
    assert_eq!(
        layout.to_style_string(),
        "position: relative; min-height: 350px; width: 100%; overflow-x: scroll;"
    );
}
