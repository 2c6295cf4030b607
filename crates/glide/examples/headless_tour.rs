//! Drive a slider through a headless host and print what a screen reader
//! would hear.
//!
//! Run with `RUST_LOG=glide=debug` to see the controller's trace.

use std::time::Duration;

use glide::{
    HeadlessSurface, Key, PointerId, Slide, SlideSet, SliderCommand, SliderConfig, SliderController,
};
use tracing_subscriber::EnvFilter;

fn main() -> glide::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let slides: SlideSet = [
        Slide::new("Welcome"),
        Slide::new("Racing").with_zone("Racing Simulators"),
        Slide::new("Arena").with_zone("VR Arena"),
        Slide::new("Parties"),
    ]
    .into_iter()
    .collect();

    let mut slider =
        SliderController::new(slides, SliderConfig::default(), HeadlessSurface::new())?;
    slider.announced.connect(|text| println!("announce: {text}"));

    // Two autoplay ticks.
    slider.advance_clock(Duration::from_millis(5200 * 2))?;

    // Keyboard back to the start.
    slider.dispatch(SliderCommand::FocusChanged(true))?;
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowLeft))?;
    slider.dispatch(SliderCommand::KeyPress(Key::ArrowLeft))?;

    // A short drag snaps back, a long one moves on.
    for target in [420.0, 150.0] {
        slider.dispatch(SliderCommand::PointerDown {
            pointer: PointerId(1),
            position: 500.0,
            viewport_width: 1000.0,
        })?;
        slider.dispatch(SliderCommand::DragTo { position: target })?;
        println!("preview offset: {:.1}%", slider.state().visible_offset());
        slider.dispatch(SliderCommand::PointerUp)?;
    }

    // Jump via pagination.
    slider.dispatch(SliderCommand::GoTo(3))?;

    println!(
        "settled on slide {} of {}, transform {:.0}%",
        slider.index() + 1,
        slider.slides().len(),
        slider.host().transform()
    );

    slider.dispose()
}
