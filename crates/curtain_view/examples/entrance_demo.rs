//! Entrance Transition Demo
//!
//! Drives a transition view headlessly with a fixed frame delta and
//! prints the render props a host renderer would apply each frame:
//! - slide-from-right entrance resolved from a TOML config
//! - mid-flight reconfiguration to scale-and-fade
//!
//! Run with: cargo run -p curtain_view --example entrance_demo

use anyhow::Result;
use curtain_animation::AnimationDriver;
use curtain_core::Viewport;
use curtain_view::{transition, TransitionKind, TransitionSpec, TransitionsConfig};

const FRAME_MS: f32 = 50.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = TransitionsConfig::from_toml_str(
        r#"
        [default]
        kind = "fade"

        [screens.settings]
        kind = "slideFromRight"
        duration_ms = 400
        "#,
    )?;

    let driver = AnimationDriver::new();
    let viewport = Viewport::new(1280.0, 720.0);

    let mut view = transition("settings screen")
        .spec(config.spec_for("settings"))
        .mount(driver.handle(), viewport);

    println!("entrance for {:?}:", view.child());
    play(&driver, |frame| {
        let props = view.render_props();
        println!(
            "  frame {frame:>2}: opacity {:.3}, transform {:?}",
            props.opacity, props.transform
        );
    });

    println!("reconfigured to scale-and-fade:");
    view.reconfigure(TransitionSpec::new(TransitionKind::ScaleAndFade, 300));
    play(&driver, |frame| {
        let props = view.render_props();
        println!(
            "  frame {frame:>2}: opacity {:.3}, transform {:?}",
            props.opacity, props.transform
        );
    });

    Ok(())
}

/// Step the driver at a fixed delta until every graph settles
fn play(driver: &AnimationDriver, mut on_frame: impl FnMut(u32)) {
    let mut frame = 0;
    loop {
        on_frame(frame);
        frame += 1;
        if !driver.advance_ms(FRAME_MS) {
            on_frame(frame);
            break;
        }
    }
}
