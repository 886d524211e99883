//! Touch Ripple demo
//!
//! Headless run of the ripple engine: scripted taps on a 300x300 surface,
//! driven by a fixed 60 Hz frame clock, with each frame's draw list logged.
//! Pass a JSON style file as the first argument to override the defaults.
//!
//! Run with `RUST_LOG=debug` to also see ripple attach/detach.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::Duration;

    use touch_ripple::consts::FRAME_DT_MS;
    use touch_ripple::{GestureEvent, Point, Rect, RippleStyle, TouchRipple, render};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Touch Ripple demo starting...");

    let style = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => match RippleStyle::from_json(&json) {
                Ok(style) => style,
                Err(e) => {
                    log::error!("{}: {}", path, e);
                    std::process::exit(1);
                }
            },
            Err(e) => {
                log::error!("Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => RippleStyle::default(),
    };

    log::info!(
        "Ripple lifetime {:?}, blur {:?}",
        style.timing.lifetime(),
        style.effective_blur_radius(true)
    );

    let mut ripples = match TouchRipple::new(style) {
        Ok(ripples) => ripples
            .on_tap_start(|| log::info!("tap start"))
            .on_tap_end(|| log::info!("tap end"))
            .on_tap(|| log::info!("tap")),
        Err(e) => {
            log::error!("Invalid ripple style: {}", e);
            std::process::exit(1);
        }
    };

    let bounds = Rect::from_size(300.0, 300.0);
    // (time ms, event)
    let script = [
        (0, GestureEvent::Down(Point::new(10.0, 10.0))),
        (48, GestureEvent::Up(Point::new(10.0, 10.0))),
        (48, GestureEvent::Tap(Point::new(10.0, 10.0))),
        (160, GestureEvent::Tap(Point::new(200.0, 200.0))),
    ];

    let mut next_event = 0;
    let mut now_ms = 0u64;
    loop {
        let now = Duration::from_millis(now_ms);
        while next_event < script.len() && script[next_event].0 <= now_ms {
            if let Some(id) = ripples.handle(script[next_event].1, now) {
                log::info!("t={}ms spawned {:?}", now_ms, id);
            }
            next_event += 1;
        }

        let completed = ripples.advance(now);
        for id in &completed {
            log::info!("t={}ms completed {:?}", now_ms, id);
        }

        let frame = ripples.frame(&bounds);
        let packed = render::instances(&frame);
        for circle in &frame {
            log::info!(
                "t={:>4}ms center=({:.0},{:.0}) radius={:>6.1} alpha={:.3}",
                now_ms,
                circle.center.x,
                circle.center.y,
                circle.radius,
                circle.alpha
            );
        }
        log::debug!("{} bytes of instance data", render::instance_bytes(&packed).len());

        if next_event == script.len() && ripples.is_idle() {
            break;
        }
        now_ms += FRAME_DT_MS;
    }

    log::info!("All ripples finished at t={}ms", now_ms);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page on wasm
}
