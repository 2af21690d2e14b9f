//! Movement Simulator - Headless wall-run demo
//!
//! Run with: `cargo run --bin movement_sim [config.json]`
//!
//! Scripted run through the controller on a flat floor next to a wall:
//! - Sprint forward along the wall
//! - Jump and drift into the wall, starting a wall run
//! - Turn to face away from the wall, triggering the push-off
//! - Fall back to the floor
//!
//! Set `RUST_LOG=debug` to see every state transition, `trace` for forces.

use std::path::Path;

use glam::Vec3;
use wallrun_engine::input::{FrameInput, LookAccumulator, MovementKeys};
use wallrun_engine::physics::{PointMassBody, RigidBody};
use wallrun_engine::player::{ConfigError, MovementConfig, MovementState, PlayerController};
use wallrun_engine::sim::{SimulatedScene, SurfacePlane};

const FRAME_DT: f32 = 1.0 / 60.0;
const BODY_MASS: f32 = 60.0;
const WALL_X: f32 = -3.0;
/// Raw motion reports per frame, like a mouse polling faster than the display.
const LOOK_REPORTS_PER_FRAME: usize = 4;

/// One scripted segment: hold these inputs for this many frames.
/// `look_dx` is the total horizontal motion reported per frame.
struct Segment {
    name: &'static str,
    frames: usize,
    keys: MovementKeys,
    look_dx: f32,
}

fn script() -> Vec<Segment> {
    let forward = MovementKeys {
        forward: true,
        ..Default::default()
    };
    vec![
        Segment {
            name: "run",
            frames: 60,
            keys: forward,
            look_dx: 0.0,
        },
        Segment {
            name: "jump toward wall",
            frames: 20,
            keys: MovementKeys {
                forward: true,
                left: true,
                jump: true,
                ..Default::default()
            },
            look_dx: 0.0,
        },
        Segment {
            name: "wall run",
            frames: 45,
            keys: forward,
            look_dx: 0.0,
        },
        Segment {
            name: "look away",
            frames: 10,
            keys: forward,
            look_dx: 6.0,
        },
        Segment {
            name: "push off and fall",
            frames: 90,
            keys: forward,
            look_dx: 0.0,
        },
    ]
}

fn log_changes(time: f64, before: MovementState, after: MovementState) {
    if before == after {
        return;
    }
    log::info!(
        "t={time:.3}s grounded={} wall_running={} cancelling={} ready_to_jump={} ready_to_wall_run={}",
        after.grounded,
        after.wall_running,
        after.wall_run_cancelling,
        after.ready_to_jump,
        after.ready_to_wall_run
    );
}

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => MovementConfig::load(Path::new(&path))?,
        None => MovementConfig::default(),
    };
    log::info!("Config:\n{}", config.to_json_pretty()?);

    let ground_layer = config.ground_layer;
    let controller = PlayerController::new(config);
    let body = PointMassBody::new(Vec3::new(0.0, 0.5, 0.0), BODY_MASS);
    let mut scene = SimulatedScene::new(controller, body)
        .with_surface(SurfacePlane::floor(0.0, ground_layer))
        .with_surface(SurfacePlane::new(Vec3::new(WALL_X, 0.0, 0.0), Vec3::X, ground_layer));

    let mut look = LookAccumulator::new();
    let mut wall_runs = 0usize;
    let mut max_height = 0.0f32;

    for segment in script() {
        log::info!("--- {} ---", segment.name);
        scene.set_jump_held(segment.keys.jump);
        scene.set_crouch_held(segment.keys.crouch);

        for _ in 0..segment.frames {
            let before = scene.controller().state();
            for _ in 0..LOOK_REPORTS_PER_FRAME {
                look.accumulate(segment.look_dx / LOOK_REPORTS_PER_FRAME as f32, 0.0);
            }
            let input = FrameInput::sample(&segment.keys, &mut look);
            scene.frame(FRAME_DT, &input);
            let after = scene.controller().state();

            if after.wall_running && !before.wall_running {
                wall_runs += 1;
            }
            max_height = max_height.max(scene.body().position().y);
            log_changes(scene.time(), before, after);
        }
    }

    let body = scene.body();
    log::info!(
        "Done: position={:?} velocity={:?} wall_runs={} max_height={:.2}",
        body.position(),
        body.velocity(),
        wall_runs,
        max_height
    );
    Ok(())
}
