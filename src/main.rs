//! Headless preview: replays a scripted scroll and customize session
//! against the recording runtime and logs the camera along the way.

use std::{path::Path, time::Duration};

use vitrine::{
    error::VitrineError,
    input::{InputEvent, MouseButton},
    options::Options,
    runtime::{setup_viewer, HeadlessPage, HeadlessRuntime, ViewerSession},
    scroll::PageLayout,
    util::frame_timing::FrameTiming,
};

const VIEWPORT_HEIGHT: f32 = 900.0;
const FRAME: Duration = Duration::from_millis(16);

/// Three full-height sections stacked from the top of the page.
fn preview_layout() -> PageLayout {
    PageLayout::new(VIEWPORT_HEIGHT)
        .with_section(".first", 0.0, VIEWPORT_HEIGHT)
        .with_section(".second", VIEWPORT_HEIGHT, VIEWPORT_HEIGHT)
        .with_section(".third", 2.0 * VIEWPORT_HEIGHT, VIEWPORT_HEIGHT)
}

fn run_frames(
    session: &mut ViewerSession<HeadlessRuntime, HeadlessPage>,
    duration: Duration,
) {
    let mut elapsed = Duration::ZERO;
    while elapsed < duration {
        session.frame(FRAME);
        elapsed += FRAME;
    }
    let pose = session.controller().pose();
    log::info!(
        "{:?}: position {:.2} target {:.2}",
        session.controller().mode(),
        pose.position,
        pose.target
    );
}

/// Scroll through the page, open customize mode, orbit a little, leave.
fn preview(
    session: &mut ViewerSession<HeadlessRuntime, HeadlessPage>,
    options: &Options,
) {
    let mut timing = FrameTiming::default();
    let page_end = 2.0 * VIEWPORT_HEIGHT;
    for step in 0..=8u8 {
        session.on_scroll(page_end * f32::from(step) / 8.0);
        session.frame(timing.tick());
        log::info!(
            "scroll {:.3}: position {:.2}",
            session.controller().scroll_progress(),
            session.controller().pose().position
        );
    }

    session.click(&options.dom.customize_button);
    run_frames(session, options.transitions.enter_duration() + FRAME);

    session.pointer(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
    session.pointer(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: true,
    });
    for x in 1..=10u8 {
        session.pointer(InputEvent::CursorMoved {
            x: f32::from(x) * 12.0,
            y: 0.0,
        });
        session.frame(FRAME);
    }
    session.pointer(InputEvent::MouseButton {
        button: MouseButton::Left,
        pressed: false,
    });
    session.pointer(InputEvent::Wheel { delta: 2.0 });
    run_frames(session, FRAME);

    session.click(&options.dom.exit_button);
    run_frames(session, options.transitions.exit_duration() + FRAME);

    log::info!(
        "{} camera updates, {} shadow resets, {:.0} fps",
        session.runtime().camera_updates(),
        session.runtime().shadow_resets(),
        timing.fps()
    );
}

fn run() -> Result<(), VitrineError> {
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(Path::new(&path))?,
        None => Options::default(),
    };

    let mut session = pollster::block_on(setup_viewer(
        HeadlessRuntime::new(),
        HeadlessPage::default(),
        &options,
        preview_layout(),
    ))?;
    preview(&mut session, &options);
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
