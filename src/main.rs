//! Edgecam - pointer-driven edge-zone camera rig
//!
//! Headless demo driver: runs a scripted pointer path through the rig at a
//! fixed 60 Hz timestep and logs the resulting camera poses. A real host
//! would feed the same [`FrameInput`] from its window and event loop.

mod settings;
mod state;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use edgecam_core::FrameClock;
use edgecam_rig::{CameraRig, FrameInput};

use settings::AppSettings;
use state::AppState;

const DEMO_FRAMES: u64 = 600;
const FRAME_DT: f32 = 1.0 / 60.0;

/// Demo application state
struct DemoApp {
    rig: CameraRig,
    state: AppState,
    clock: FrameClock,
    viewport: Vec2,
}

impl DemoApp {
    fn new(settings: &AppSettings) -> Self {
        let viewport = Vec2::new(
            settings.viewport.width as f32,
            settings.viewport.height as f32,
        );
        // Eye height on Y; pitch/yaw/roll start level.
        let rig = CameraRig::with_pose(
            settings.rig.clone(),
            Vec3::new(0.0, 1.6, 0.0),
            Vec3::ZERO,
        );
        Self {
            rig,
            state: AppState::default(),
            clock: FrameClock::default(),
            viewport,
        }
    }

    fn step(&mut self, raw_delta: f32, pointer: Vec2) {
        self.clock.update(raw_delta);
        let dt = self.clock.delta_time;
        self.state.update(dt);
        let input = FrameInput {
            dt,
            pointer,
            viewport: self.viewport,
            suspend: self.state.suspends_input(),
        };
        self.rig.update(&input);
    }
}

/// Scripted pointer path: right zone, center, top zone, center, left zone
fn scripted_pointer(frame: u64, viewport: Vec2) -> Vec2 {
    let t = frame as f32 * FRAME_DT;
    if t < 2.0 {
        Vec2::new(viewport.x, viewport.y * 0.5)
    } else if t < 3.0 {
        viewport * 0.5
    } else if t < 5.0 {
        Vec2::new(viewport.x * 0.5, viewport.y)
    } else if t < 8.0 {
        viewport * 0.5
    } else {
        Vec2::new(0.0, viewport.y * 0.5)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Edgecam demo starting");

    let settings = AppSettings::load();
    let mut app = DemoApp::new(&settings);
    info!(
        "Axis limits: [{:.2}, {:.2}] along {:?}",
        app.rig.limits().min,
        app.rig.limits().max,
        app.rig.config.movement_axis,
    );

    for frame in 0..DEMO_FRAMES {
        let pointer = scripted_pointer(frame, app.viewport);

        // Scripted orchestration events
        match frame {
            300 => {
                app.state.begin_auto_move(1.0)?;
                info!("Auto camera move started; rig suspended");
            }
            390 => {
                app.state.open_results()?;
                info!("Results overlay opened; rig suspended");
            }
            450 => {
                app.state.close_results();
                info!("Results overlay closed");
            }
            456 => {
                app.rig.set_controllable(false);
                info!("Rig control disabled; state frozen");
            }
            474 => {
                app.rig.set_controllable(true);
                info!("Rig control re-enabled");
            }
            _ => {}
        }

        app.step(FRAME_DT, pointer);

        if frame % 60 == 0 {
            let snapshot = app.rig.debug_snapshot();
            info!(
                "t={:4.1}s zone={:<5} pos=({:6.3}, {:6.3}, {:6.3}) pitch={:6.2} speed={:.3}",
                app.clock.total_time,
                snapshot
                    .hovered_zone
                    .map(|z| z.label())
                    .unwrap_or("None"),
                snapshot.rendered_position.x,
                snapshot.rendered_position.y,
                snapshot.rendered_position.z,
                snapshot.pitch_deg,
                snapshot.velocity.length(),
            );
        }
    }

    let final_snapshot = app.rig.debug_snapshot();
    info!(
        "Demo finished at base position ({:.3}, {:.3}, {:.3}), pitch {:.2}",
        final_snapshot.base_position.x,
        final_snapshot.base_position.y,
        final_snapshot.base_position.z,
        final_snapshot.pitch_deg,
    );

    app.rig.reset();
    info!(
        "Rig reset to ({:.1}, {:.1}, {:.1})",
        app.rig.position().x,
        app.rig.position().y,
        app.rig.position().z,
    );

    settings.save().context("Failed to save settings")?;
    Ok(())
}
