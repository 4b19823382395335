//! flick-replay: scripted input replay for the telekin interaction engine.
//!
//! Usage:
//!   flick-replay run pull.json --config tuning.json --snapshot
//!   flick-replay run pull.json --jitter 0.25 --seed 7
//!   flick-replay demo

use std::path::{Path, PathBuf};
use std::process;

use glam::{Quat, Vec3};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use telekin_ballistics::solver;
use telekin_core::config::SessionConfig;
use telekin_core::constants::{FRAME_DT, PHYSICS_DT};
use telekin_core::enums::Hand;
use telekin_core::events::InteractionEvent;
use telekin_core::inputs::InputEvent;
use telekin_session::SessionEngine;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "flick-replay: telekin interaction replay tool\n\
         \n\
         Commands:\n\
         \n\
         run       Replay a recorded input script through the session engine\n\
         \n\
           <script.json>      Script file (see format below)\n\
           --config <path>    Session config override (JSON, partial fields fine)\n\
           --frames <N>       Frame count override (default: script value)\n\
           --jitter <sigma>   Uniform tracking noise on velocity samples (m/s)\n\
           --seed <N>         Noise seed (default: 0)\n\
           --snapshot         Print the final session snapshot as JSON\n\
         \n\
         demo      Run a built-in script: aim sweep, grip lock, flick, flight\n\
         \n\
         Script format (JSON):\n\
         \n\
           {{\n\
             \"config\": {{ \"flick_policy\": \"Median\" }},\n\
             \"candidates\": [ {{ \"position\": [0.0, 0.8, -3.2] }} ],\n\
             \"frames\": 270,\n\
             \"steps\": [\n\
               {{ \"frame\": 0, \"input\": {{ \"type\": \"HandPose\", \"hand\": \"Right\",\n\
                 \"position\": [0.0, 1.2, 0.0], \"rotation\": [0.0, 0.0, 0.0, 1.0] }} }},\n\
               {{ \"frame\": 50, \"input\": {{ \"type\": \"GripChanged\", \"hand\": \"Right\",\n\
                 \"pressed\": true }} }}\n\
             ]\n\
           }}\n\
         \n\
         Interaction events print to stdout as one JSON line per event;\n\
         progress and the unguided-arc dump print to stderr.\n"
    );
}

// --- Argument helpers ---

fn parse_path(args: &[String], flag: &str) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_f32(args: &[String], flag: &str) -> Option<f32> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn parse_u64(args: &[String], flag: &str) -> Option<u64> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

// --- Script format ---

/// A recorded input script: spawn layout plus per-frame host inputs.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    /// Session config for the whole run (`--config` wins over this).
    config: Option<SessionConfig>,
    /// Candidates spawned before the first frame, ids assigned in order.
    #[serde(default)]
    candidates: Vec<CandidateSpawn>,
    /// Frame ticks to run; physics ticks interleave at the fixed rate.
    frames: u64,
    /// Host inputs, queued at the start of their frame.
    #[serde(default)]
    steps: Vec<ScriptStep>,
}

#[derive(Debug, Deserialize)]
struct CandidateSpawn {
    position: Vec3,
}

#[derive(Debug, Deserialize)]
struct ScriptStep {
    frame: u64,
    input: InputEvent,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("reading {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| anyhow::anyhow!("parsing {}: {e}", path.display()))
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let Some(script_path) = args.first().filter(|arg| !arg.starts_with("--")) else {
        eprintln!("Error: run needs a script path");
        print_usage();
        process::exit(1);
    };

    let script: ReplayScript = match load_json(Path::new(script_path)) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let config = match parse_path(args, "--config") {
        Some(path) => match load_json(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => script.config.clone().unwrap_or_default(),
    };

    let frames = parse_u64(args, "--frames").unwrap_or(script.frames);
    let jitter = match parse_f32(args, "--jitter") {
        Some(sigma) if sigma > 0.0 => {
            let seed = parse_u64(args, "--seed").unwrap_or(0);
            Some(Jitter {
                sigma,
                rng: ChaCha8Rng::seed_from_u64(seed),
            })
        }
        _ => None,
    };

    let mut engine = SessionEngine::new(config);
    for spawn in &script.candidates {
        engine.spawn_candidate(spawn.position);
    }

    eprintln!(
        "Replaying {} frame(s), {} step(s), {} candidate(s)...",
        frames,
        script.steps.len(),
        script.candidates.len()
    );

    let report = replay(&mut engine, &script.steps, frames, jitter);

    eprintln!(
        "Done: {} frame tick(s), {} physics tick(s), {} event(s), final phase {:?}",
        report.frames,
        report.physics_ticks,
        report.events,
        engine.phase()
    );

    if has_flag(args, "--snapshot") {
        match serde_json::to_string_pretty(&engine.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing snapshot: {e}");
                process::exit(1);
            }
        }
    }
}

// --- Replay loop ---

/// Seeded tracking noise applied to velocity samples on the way in.
struct Jitter {
    sigma: f32,
    rng: ChaCha8Rng,
}

struct ReplayReport {
    frames: u64,
    physics_ticks: u64,
    events: usize,
}

/// Drive the engine for `frames` frame ticks, interleaving physics ticks
/// through a fixed-step accumulator, queuing script steps at the start of
/// their frame and printing every interaction event as one JSON line.
fn replay(
    engine: &mut SessionEngine,
    steps: &[ScriptStep],
    frames: u64,
    mut jitter: Option<Jitter>,
) -> ReplayReport {
    // Scripts may list steps out of order; deliver them sorted by frame.
    let mut order: Vec<usize> = (0..steps.len()).collect();
    order.sort_by_key(|&i| steps[i].frame);

    let mut next = 0;
    let mut accumulator = 0.0_f32;
    let mut physics_ticks = 0_u64;
    let mut events = 0_usize;

    for frame in 0..frames {
        while next < order.len() && steps[order[next]].frame <= frame {
            let input = steps[order[next]].input.clone();
            engine.queue_input(perturb(input, &mut jitter));
            next += 1;
        }

        let produced = engine.frame_tick();
        events += emit(engine, "frame", frame, &produced);

        accumulator += FRAME_DT;
        while accumulator >= PHYSICS_DT {
            accumulator -= PHYSICS_DT;
            let produced = engine.physics_tick();
            events += emit(engine, "tick", physics_ticks, &produced);
            physics_ticks += 1;
        }
    }

    ReplayReport {
        frames,
        physics_ticks,
        events,
    }
}

/// Apply tracking noise to velocity samples; other inputs pass through.
fn perturb(input: InputEvent, jitter: &mut Option<Jitter>) -> InputEvent {
    let Some(jitter) = jitter.as_mut() else {
        return input;
    };
    match input {
        InputEvent::VelocitySample { hand, velocity } => {
            let noise = Vec3::new(
                jitter.rng.gen_range(-jitter.sigma..jitter.sigma),
                jitter.rng.gen_range(-jitter.sigma..jitter.sigma),
                jitter.rng.gen_range(-jitter.sigma..jitter.sigma),
            );
            InputEvent::VelocitySample {
                hand,
                velocity: velocity + noise,
            }
        }
        other => other,
    }
}

/// Print one JSON line per event, tagged with its clock, and dump the
/// predicted arc whenever a launch commits.
fn emit(engine: &SessionEngine, clock: &str, tick: u64, events: &[InteractionEvent]) -> usize {
    for event in events {
        match serde_json::to_string(event) {
            Ok(json) => println!("{clock:>5} {tick:>6}  {json}"),
            Err(e) => eprintln!("Error serializing event: {e}"),
        }
        if let InteractionEvent::Launched { id, .. } = event {
            dump_arc(engine, *id);
        }
    }
    events.len()
}

/// Short table of where the just-launched candidate would fly with no
/// correction, from the closed-form arc.
fn dump_arc(engine: &SessionEngine, id: u32) {
    let (Some(position), Some(velocity)) =
        (engine.candidate_position(id), engine.candidate_velocity(id))
    else {
        return;
    };
    let gravity_y = engine.config().gravity_y;
    eprintln!("  unguided arc for candidate {id}:");
    for i in 1..=5 {
        let t = i as f32 * 0.2;
        let p = solver::point_at(position, velocity, gravity_y, t);
        eprintln!("    t={t:.1}s  ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    }
}

// --- Demo command ---

/// Built-in script: three candidates ahead of the hand, an aim sweep that
/// acquires the left one and hands focus to the middle one, a grip lock,
/// a flick, and the full flight back to the catch point.
fn cmd_demo() {
    let script = demo_script();
    let mut engine = SessionEngine::new(script.config.clone().unwrap_or_default());
    for spawn in &script.candidates {
        engine.spawn_candidate(spawn.position);
    }

    eprintln!("Demo: sweep across three candidates, lock the middle one, flick it home.");
    let report = replay(&mut engine, &script.steps, script.frames, None);
    eprintln!(
        "Done: {} frame tick(s), {} physics tick(s), {} event(s), final phase {:?}",
        report.frames,
        report.physics_ticks,
        report.events,
        engine.phase()
    );
}

fn demo_script() -> ReplayScript {
    let hand = Vec3::new(0.0, 1.2, 0.0);
    let mut steps = vec![ScriptStep {
        frame: 0,
        input: InputEvent::HandPose {
            hand: Hand::Right,
            position: hand,
            rotation: Quat::from_rotation_y(25_f32.to_radians()),
        },
    }];

    // Sweep the aim from the left candidate onto the middle one.
    for i in 0..40u64 {
        let yaw = 25.0 - 25.0 * (i + 1) as f32 / 40.0;
        steps.push(ScriptStep {
            frame: 5 + i,
            input: InputEvent::HandPose {
                hand: Hand::Right,
                position: hand,
                rotation: Quat::from_rotation_y(yaw.to_radians()),
            },
        });
    }

    // Lock the hold, then flick up-and-forward on a single fast frame.
    steps.push(ScriptStep {
        frame: 50,
        input: InputEvent::GripChanged {
            hand: Hand::Right,
            pressed: true,
        },
    });
    steps.push(ScriptStep {
        frame: 57,
        input: InputEvent::VelocitySample {
            hand: Hand::Right,
            velocity: Vec3::new(0.0, 1.2, -3.4),
        },
    });
    steps.push(ScriptStep {
        frame: 58,
        input: InputEvent::VelocitySample {
            hand: Hand::Right,
            velocity: Vec3::ZERO,
        },
    });
    steps.push(ScriptStep {
        frame: 70,
        input: InputEvent::GripChanged {
            hand: Hand::Right,
            pressed: false,
        },
    });

    ReplayScript {
        config: None,
        candidates: vec![
            CandidateSpawn {
                position: Vec3::new(-1.2, 0.9, -2.8),
            },
            CandidateSpawn {
                position: Vec3::new(0.0, 0.8, -3.2),
            },
            CandidateSpawn {
                position: Vec3::new(1.4, 1.0, -2.6),
            },
        ],
        frames: 270,
        steps,
    }
}
