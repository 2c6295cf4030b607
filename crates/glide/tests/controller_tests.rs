//! Integration tests for the slider controller driven through a headless host.

use std::sync::Arc;
use std::time::Duration;

use glide::gesture::{GestureOutcome, Step};
use glide::{
    HeadlessSurface, HostOperation, Key, PointerId, Slide, SlideSet, SliderCommand, SliderConfig,
    SliderController, SliderError,
};
use parking_lot::Mutex;

const WIDTH: f32 = 1000.0;
const INTERVAL: Duration = Duration::from_millis(5200);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn slider(count: usize) -> SliderController<HeadlessSurface> {
    init_tracing();
    let mut slider = SliderController::new(
        SlideSet::untitled(count),
        SliderConfig::default(),
        HeadlessSurface::new(),
    )
    .unwrap();
    slider.host_mut().clear_commands();
    slider
}

fn drag(slider: &mut SliderController<HeadlessSurface>, from: f32, to: f32) {
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(7),
            position: from,
            viewport_width: WIDTH,
        })
        .unwrap();
    slider.dispatch(SliderCommand::DragTo { position: to }).unwrap();
    slider.dispatch(SliderCommand::PointerUp).unwrap();
}

fn assert_consistent(slider: &SliderController<HeadlessSurface>) {
    let index = slider.index();
    let host = slider.host();
    assert!(index < slider.slides().len());
    assert_eq!(host.active_slides(), vec![index]);
    assert_eq!(host.selected_indicators(), vec![index]);
    assert!(host.live_timers() <= 1);
    assert_eq!(slider.state().autoplay_active(), host.live_timers() == 1);
    if slider.state().is_dragging() {
        assert_eq!(host.live_timers(), 0);
    } else {
        assert_eq!(host.transform(), -100.0 * index as f32);
    }
}

// =========================================================================
// Index normalization
// =========================================================================

#[test]
fn test_set_index_wraps_every_request() {
    for count in 1..=6usize {
        let mut slider = slider(count);
        for requested in -20i64..=20 {
            let index = slider.set_index(requested, false).unwrap();
            assert_eq!(index, requested.rem_euclid(count as i64) as usize);
            assert_consistent(&slider);
        }
    }
}

#[test]
fn test_buttons_wrap_at_both_ends() {
    let mut slider = slider(3);
    slider.dispatch(SliderCommand::Retreat).unwrap();
    assert_eq!(slider.index(), 2);
    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(slider.index(), 0);
    assert_eq!(
        slider.host().announcements(),
        vec!["Slide 3 slide 3 of 3", "Slide 1 slide 1 of 3"]
    );
}

#[test]
fn test_pagination_jumps() {
    let mut slider = slider(5);
    assert_eq!(slider.host().indicators().len(), 5);
    assert_eq!(slider.host().indicators()[3].label, "Go to slide 4");

    slider.dispatch(SliderCommand::GoTo(3)).unwrap();
    assert_eq!(slider.index(), 3);
    assert_eq!(slider.host().announcement(), "Slide 4 slide 4 of 5");
    assert_consistent(&slider);

    let err = slider.dispatch(SliderCommand::GoTo(5)).unwrap_err();
    assert!(matches!(err, SliderError::IndicatorOutOfRange { index: 5, count: 5 }));
    assert_eq!(slider.index(), 3);
}

// =========================================================================
// Keyboard
// =========================================================================

#[test]
fn test_arrow_right_twice() {
    let mut slider = slider(5);
    slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
    let starts = slider.autoplay().start_count();

    slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();

    assert_eq!(slider.index(), 2);
    assert_eq!(
        slider.host().announcements(),
        vec!["Slide 2 slide 2 of 5", "Slide 3 slide 3 of 5"]
    );
    assert_eq!(slider.autoplay().start_count(), starts + 2);
    assert_eq!(slider.host().live_timers(), 1);
}

#[test]
fn test_keys_ignored_without_focus() {
    let mut slider = slider(4);
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();
    assert_eq!(slider.index(), 0);

    slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowLeft)).unwrap();
    assert_eq!(slider.index(), 3);

    slider.dispatch(SliderCommand::KeyPress(Key::Enter)).unwrap();
    slider.dispatch(SliderCommand::KeyPress(Key::from_name("Home"))).unwrap();
    assert_eq!(slider.index(), 3);

    slider.dispatch(SliderCommand::FocusChanged(false)).unwrap();
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowLeft)).unwrap();
    assert_eq!(slider.index(), 3);
}

// =========================================================================
// Drag
// =========================================================================

#[test]
fn test_drag_past_threshold_advances() {
    let mut slider = slider(5);
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(1),
            position: 600.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    assert_eq!(slider.host().captured_pointer(), Some(PointerId(1)));

    slider.dispatch(SliderCommand::DragTo { position: 350.0 }).unwrap();
    assert_eq!(slider.index(), 0);
    assert_eq!(slider.state().drag_offset_percent(), -25.0);
    assert_eq!(slider.host().transform(), -25.0);

    slider.dispatch(SliderCommand::PointerUp).unwrap();
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.host().announcements(), vec!["Slide 2 slide 2 of 5"]);
    assert_eq!(slider.host().captured_pointer(), None);
    assert_eq!(slider.state().drag_offset_percent(), 0.0);
    assert_consistent(&slider);
}

#[test]
fn test_drag_right_wraps_backwards() {
    let mut slider = slider(5);
    drag(&mut slider, 100.0, 400.0);
    assert_eq!(slider.index(), 4);
    assert_eq!(slider.host().announcement(), "Slide 5 slide 5 of 5");
}

#[test]
fn test_short_drag_snaps_back_silently() {
    let mut slider = slider(5);
    slider.set_index(2, false).unwrap();
    slider.host_mut().clear_commands();

    drag(&mut slider, 500.0, 350.0);
    assert_eq!(slider.index(), 2);
    assert!(slider.host().announcements().is_empty());
    assert_eq!(slider.host().transform(), -200.0);

    // Exactly at the threshold is still a cancel.
    drag(&mut slider, 500.0, 320.0);
    assert_eq!(slider.index(), 2);
    assert!(slider.host().announcements().is_empty());
    assert_consistent(&slider);
}

#[test]
fn test_drag_preview_is_clamped() {
    let mut slider = slider(3);
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(1),
            position: 900.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    slider.dispatch(SliderCommand::DragTo { position: -2000.0 }).unwrap();
    assert_eq!(slider.state().drag_offset_percent(), -100.0);

    slider.dispatch(SliderCommand::PointerUp).unwrap();
    assert_eq!(slider.index(), 1);
}

#[test]
fn test_pointer_cancel_evaluates_like_release() {
    let mut slider = slider(4);
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(3),
            position: 800.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    slider.dispatch(SliderCommand::DragTo { position: 500.0 }).unwrap();
    slider.dispatch(SliderCommand::PointerCancel).unwrap();

    assert_eq!(slider.index(), 1);
    assert!(!slider.state().is_dragging());
    assert_eq!(slider.host().captured_pointer(), None);
}

#[test]
fn test_unusable_press_is_ignored() {
    let mut slider = slider(4);
    for width in [0.0, -10.0, f32::NAN, f32::INFINITY] {
        slider
            .dispatch(SliderCommand::PointerDown {
                pointer: PointerId(1),
                position: 10.0,
                viewport_width: width,
            })
            .unwrap();
        assert!(!slider.state().is_dragging());
        assert_eq!(slider.host().captured_pointer(), None);
    }

    // Moves and releases without a press do nothing.
    slider.dispatch(SliderCommand::DragTo { position: 900.0 }).unwrap();
    slider.dispatch(SliderCommand::PointerUp).unwrap();
    assert_eq!(slider.index(), 0);
    assert!(slider.host().commands().is_empty());
}

#[test]
fn test_drag_pauses_autoplay() {
    let mut slider = slider(4);
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(1),
            position: 500.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    assert!(!slider.state().autoplay_active());
    assert_eq!(slider.host().live_timers(), 0);

    assert_eq!(slider.advance_clock(INTERVAL * 4).unwrap(), 0);
    assert_eq!(slider.index(), 0);

    slider.dispatch(SliderCommand::PointerUp).unwrap();
    assert!(slider.state().autoplay_active());
    assert_eq!(slider.host().live_timers(), 1);
    assert_consistent(&slider);
}

#[test]
fn test_navigation_during_drag_keeps_autoplay_stopped() {
    let mut slider = slider(5);
    slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(1),
            position: 500.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    slider.dispatch(SliderCommand::DragTo { position: 450.0 }).unwrap();

    slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.host().live_timers(), 0);
    assert!(!slider.state().autoplay_active());

    slider.dispatch(SliderCommand::GoTo(3)).unwrap();
    slider.dispatch(SliderCommand::Advance).unwrap();
    slider.dispatch(SliderCommand::FocusChanged(false)).unwrap();
    slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
    assert_eq!(slider.index(), 4);
    assert_eq!(slider.host().live_timers(), 0);
    assert_eq!(slider.advance_clock(INTERVAL * 3).unwrap(), 0);

    slider.dispatch(SliderCommand::PointerUp).unwrap();
    assert_eq!(slider.host().live_timers(), 1);
    assert!(slider.state().autoplay_active());
    assert_consistent(&slider);
}

// =========================================================================
// Autoplay
// =========================================================================

#[test]
fn test_autoplay_advances_each_interval() {
    let mut slider = slider(3);
    assert_eq!(slider.advance_clock(INTERVAL - Duration::from_millis(1)).unwrap(), 0);
    assert_eq!(slider.advance_clock(Duration::from_millis(1)).unwrap(), 1);
    assert_eq!(slider.index(), 1);

    assert_eq!(slider.advance_clock(INTERVAL * 2).unwrap(), 2);
    assert_eq!(slider.index(), 0);
    assert_eq!(
        slider.host().announcements(),
        vec![
            "Slide 2 slide 2 of 3",
            "Slide 3 slide 3 of 3",
            "Slide 1 slide 1 of 3"
        ]
    );
    assert_eq!(slider.host().schedule_count(), 0);
}

#[test]
fn test_interaction_restarts_interval() {
    let mut slider = slider(4);
    slider.advance_clock(Duration::from_millis(4000)).unwrap();
    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(slider.index(), 1);

    assert_eq!(slider.advance_clock(Duration::from_millis(4000)).unwrap(), 0);
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.advance_clock(Duration::from_millis(1200)).unwrap(), 1);
    assert_eq!(slider.index(), 2);
}

#[test]
fn test_stale_tick_is_ignored() {
    let mut slider = slider(4);
    let stale = slider.autoplay().handle().unwrap();
    slider.dispatch(SliderCommand::Advance).unwrap();

    slider.dispatch(SliderCommand::TimerFired(stale)).unwrap();
    assert_eq!(slider.index(), 1);
}

#[test]
fn test_at_most_one_timer_under_mixed_input() {
    let mut slider = slider(6);
    let mut seed: u32 = 0x9e37_79b9;
    for _ in 0..400 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let command = match (seed >> 24) % 9 {
            0 => SliderCommand::Advance,
            1 => SliderCommand::Retreat,
            2 => SliderCommand::GoTo(((seed >> 8) % 6) as usize),
            3 => SliderCommand::PointerDown {
                pointer: PointerId(1),
                position: ((seed >> 4) % 1000) as f32,
                viewport_width: WIDTH,
            },
            4 => SliderCommand::DragTo {
                position: ((seed >> 6) % 1000) as f32,
            },
            5 => SliderCommand::PointerUp,
            6 => SliderCommand::FocusChanged((seed >> 3) % 2 == 0),
            7 => SliderCommand::KeyPress(if (seed >> 5) % 2 == 0 {
                Key::ArrowLeft
            } else {
                Key::ArrowRight
            }),
            _ => {
                slider
                    .advance_clock(Duration::from_millis(u64::from((seed >> 4) % 12_000)))
                    .unwrap();
                assert_consistent(&slider);
                continue;
            }
        };
        slider.dispatch(command).unwrap();
        assert_consistent(&slider);
    }
}

#[test]
fn test_autoplay_disabled_by_config() {
    init_tracing();
    let config = SliderConfig::from_toml_str("autoplay = false\n").unwrap();
    let mut slider =
        SliderController::new(SlideSet::untitled(3), config, HeadlessSurface::new()).unwrap();

    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(slider.advance_clock(INTERVAL * 3).unwrap(), 0);
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.host().schedule_count(), 0);
    assert!(!slider.state().autoplay_active());
}

#[test]
fn test_config_from_toml() {
    init_tracing();
    let config = SliderConfig::from_toml_str(
        r#"
        autoplay_interval_ms = 1000
        commit_threshold = 0.5
        initial_index = 2
        "#,
    )
    .unwrap();
    let mut slider =
        SliderController::new(SlideSet::untitled(4), config, HeadlessSurface::new()).unwrap();
    assert_eq!(slider.index(), 2);

    drag(&mut slider, 800.0, 400.0);
    assert_eq!(slider.index(), 2);

    assert_eq!(slider.advance_clock(Duration::from_millis(1000)).unwrap(), 1);
    assert_eq!(slider.index(), 3);
}

#[test]
fn test_huge_initial_index_wraps_in_range() {
    init_tracing();
    let config = SliderConfig::default()
        .with_initial_index(usize::MAX)
        .with_announce_initial(false);
    let slider =
        SliderController::new(SlideSet::untitled(7), config, HeadlessSurface::new()).unwrap();

    assert_eq!(slider.index(), usize::MAX % 7);
    assert_eq!(slider.index(), 1);
    assert_consistent(&slider);
}

// =========================================================================
// Degenerate slide counts
// =========================================================================

#[test]
fn test_single_slide() {
    let mut slider = slider(1);
    assert_eq!(slider.host().live_timers(), 0);

    slider.dispatch(SliderCommand::Advance).unwrap();
    drag(&mut slider, 800.0, 100.0);
    assert_eq!(slider.index(), 0);
    assert_eq!(
        slider.host().announcements(),
        vec!["Slide 1 slide 1 of 1", "Slide 1 slide 1 of 1"]
    );
    assert_eq!(slider.host().schedule_count(), 0);
    assert_consistent(&slider);
}

#[test]
fn test_empty_slider_is_disabled() {
    init_tracing();
    let mut slider =
        SliderController::new(SlideSet::default(), SliderConfig::default(), HeadlessSurface::new())
            .unwrap();
    assert!(!slider.is_enabled());
    assert!(slider.host().commands().is_empty());

    slider.dispatch(SliderCommand::Advance).unwrap();
    slider.dispatch(SliderCommand::FocusChanged(true)).unwrap();
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowRight)).unwrap();
    drag(&mut slider, 800.0, 100.0);
    assert!(slider.host().commands().is_empty());

    assert!(matches!(slider.set_index(0, true), Err(SliderError::NoSlides)));
}

// =========================================================================
// Host failures and teardown
// =========================================================================

#[test]
fn test_failed_cancel_keeps_single_timer() {
    let mut slider = slider(3);
    slider.host_mut().fail_operation(HostOperation::Cancel);

    let err = slider.dispatch(SliderCommand::Advance).unwrap_err();
    assert!(err.is_host_failure());
    assert_eq!(slider.index(), 1);
    assert_eq!(slider.host().live_timers(), 1);
    assert!(slider.state().autoplay_active());

    slider.host_mut().restore_operation(HostOperation::Cancel);
    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(slider.host().live_timers(), 1);
    assert_consistent(&slider);
}

#[test]
fn test_failed_schedule_leaves_autoplay_stopped() {
    let mut slider = slider(3);
    slider.host_mut().fail_operation(HostOperation::ScheduleRecurring);

    assert!(slider.dispatch(SliderCommand::Advance).is_err());
    assert_eq!(slider.host().live_timers(), 0);
    assert!(!slider.state().autoplay_active());

    slider.host_mut().restore_operation(HostOperation::ScheduleRecurring);
    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(slider.index(), 2);
    assert!(slider.state().autoplay_active());
}

#[test]
fn test_failed_release_still_settles() {
    let mut slider = slider(3);
    slider.host_mut().fail_operation(HostOperation::ReleasePointer);

    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(2),
            position: 900.0,
            viewport_width: WIDTH,
        })
        .unwrap();
    slider.dispatch(SliderCommand::DragTo { position: 100.0 }).unwrap();
    assert!(slider.dispatch(SliderCommand::PointerUp).is_err());

    assert_eq!(slider.index(), 1);
    assert!(!slider.state().is_dragging());
    assert!(slider.state().autoplay_active());
}

#[test]
fn test_dispose_releases_everything() {
    let mut slider = slider(3);
    slider.dispatch(SliderCommand::Advance).unwrap();
    slider
        .dispatch(SliderCommand::PointerDown {
            pointer: PointerId(4),
            position: 500.0,
            viewport_width: WIDTH,
        })
        .unwrap();

    slider.dispose().unwrap();
    assert!(slider.is_disposed());
    assert_eq!(slider.host().captured_pointer(), None);
    assert_eq!(slider.host().live_timers(), 0);
    assert!(!slider.state().is_dragging());

    assert!(matches!(
        slider.dispatch(SliderCommand::PointerUp),
        Err(SliderError::Disposed)
    ));
    assert_eq!(slider.advance_clock(INTERVAL).unwrap(), 0);
}

#[test]
fn test_dispose_cancels_idle_timer() {
    let mut slider = slider(3);
    let handle = slider.autoplay().handle().unwrap();
    slider.dispose().unwrap();
    assert!(!slider.host().is_timer_live(handle));
}

// =========================================================================
// Signals
// =========================================================================

#[test]
fn test_signals_report_transitions() {
    let mut slider = slider(4);
    let announced = Arc::new(Mutex::new(Vec::new()));
    let changes = Arc::new(Mutex::new(Vec::new()));
    let drags = Arc::new(Mutex::new(Vec::new()));

    let announced_clone = announced.clone();
    slider
        .announced
        .connect(move |text| announced_clone.lock().push(text.clone()));
    let changes_clone = changes.clone();
    slider
        .index_changed
        .connect(move |index| changes_clone.lock().push(*index));
    let drags_clone = drags.clone();
    slider
        .drag_finished
        .connect(move |outcome| drags_clone.lock().push(*outcome));
    let started = Arc::new(Mutex::new(0));
    let started_clone = started.clone();
    slider.drag_started.connect(move |_| *started_clone.lock() += 1);

    slider.dispatch(SliderCommand::Advance).unwrap();
    drag(&mut slider, 500.0, 450.0);
    drag(&mut slider, 500.0, 900.0);

    assert_eq!(*announced.lock(), vec!["Slide 2 slide 2 of 4", "Slide 1 slide 1 of 4"]);
    assert_eq!(*changes.lock(), vec![1, 0]);
    assert_eq!(
        *drags.lock(),
        vec![GestureOutcome::Cancel, GestureOutcome::Commit(Step::Backward)]
    );
    assert_eq!(*started.lock(), 2);
}

#[test]
fn test_zone_labels_in_announcements() {
    init_tracing();
    let slides: SlideSet = vec![
        Slide::new("Welcome"),
        Slide::new("Racing").with_zone("Racing Simulators"),
        Slide::new("Party").with_zone(""),
    ]
    .into_iter()
    .collect();
    let mut slider =
        SliderController::new(slides, SliderConfig::default(), HeadlessSurface::new()).unwrap();
    slider.host_mut().clear_commands();

    slider.dispatch(SliderCommand::Advance).unwrap();
    slider.dispatch(SliderCommand::Advance).unwrap();
    assert_eq!(
        slider.host().announcements(),
        vec!["Racing Simulators slide 2 of 3", "Slide 3 slide 3 of 3"]
    );
}
