use scroll_chart::core::{LayoutMode, decide_layout_mode, scroll_target_width};

#[test]
fn narrow_container_switches_to_scroll() {
    // 1000 / 8 = 125 px per tick, below the 150 px minimum.
    assert_eq!(decide_layout_mode(150.0, 8, Some(1000.0)), LayoutMode::Scroll);
}

#[test]
fn wide_container_stays_regular() {
    // 1600 / 8 = 200 px per tick.
    assert_eq!(decide_layout_mode(150.0, 8, Some(1600.0)), LayoutMode::Regular);
}

#[test]
fn per_tick_width_equal_to_minimum_is_regular() {
    assert_eq!(decide_layout_mode(150.0, 8, Some(1200.0)), LayoutMode::Regular);
    assert_eq!(decide_layout_mode(50.0, 3, Some(150.0)), LayoutMode::Regular);
}

#[test]
fn zero_ticks_fall_back_to_scroll_for_any_tick_width() {
    for min_tick_width in [1.0, 50.0, 150.0, 10_000.0] {
        assert_eq!(
            decide_layout_mode(min_tick_width, 0, Some(1600.0)),
            LayoutMode::Scroll
        );
    }
}

#[test]
fn unmeasured_container_falls_back_to_scroll() {
    assert_eq!(decide_layout_mode(1.0, 3, None), LayoutMode::Scroll);
    assert_eq!(decide_layout_mode(150.0, 3, Some(-20.0)), LayoutMode::Scroll);
    assert_eq!(
        decide_layout_mode(150.0, 3, Some(f64::INFINITY)),
        LayoutMode::Scroll
    );
}

#[test]
fn larger_minimum_tick_width_scrolls_at_wider_containers() {
    assert_eq!(decide_layout_mode(100.0, 10, Some(1200.0)), LayoutMode::Regular);
    assert_eq!(decide_layout_mode(150.0, 10, Some(1200.0)), LayoutMode::Scroll);
}

#[test]
fn decision_is_repeatable() {
    let first = decide_layout_mode(150.0, 8, Some(1000.0));
    let second = decide_layout_mode(150.0, 8, Some(1000.0));
    assert_eq!(first, second);
}

#[test]
fn scroll_target_width_is_tick_span() {
    assert_eq!(scroll_target_width(8, 150.0), 1200.0);
    assert_eq!(scroll_target_width(0, 150.0), 0.0);
}
