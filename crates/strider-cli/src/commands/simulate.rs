//! Headless scripted simulation command

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use strider_scene::load_scene;
use strider_sim::{MoveIntent, Simulation, StepOutput};

pub struct SimulateArgs {
    pub scene: String,
    pub steps: u32,
    pub delta: f32,
    pub script: Option<String>,
    pub trace_every: u32,
}

/// Input script: a sequence of phases, each holding a set of actions for a
/// number of steps.
#[derive(Debug, Deserialize)]
struct ScriptFile {
    #[serde(default, rename = "phase")]
    phases: Vec<PhaseDef>,
}

#[derive(Debug, Deserialize)]
struct PhaseDef {
    steps: u32,
    /// Held actions: forward, back, left, right, jump
    #[serde(default)]
    actions: Vec<String>,
    /// Yaw delta applied every step of the phase, radians
    #[serde(default)]
    turn: f32,
    /// Pitch delta applied every step of the phase, radians
    #[serde(default)]
    look: f32,
}

impl PhaseDef {
    fn intent(&self) -> MoveIntent {
        let held = |name: &str| self.actions.iter().any(|a| a == name);
        MoveIntent {
            forward: held("forward"),
            back: held("back"),
            left: held("left"),
            right: held("right"),
            jump: held("jump"),
            yaw_delta: self.turn,
            pitch_delta: self.look,
        }
    }
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let loaded = load_scene(&args.scene).context("Failed to load scene")?;
    // Same per-step bound a windowed host applies to wall-clock deltas
    let delta = args.delta.min(strider_runtime::MAX_DELTA);
    let phases = match &args.script {
        Some(path) => {
            let content = fs::read_to_string(path).context("Failed to read input script")?;
            let script: ScriptFile =
                toml::from_str(&content).context("Failed to parse input script")?;
            script.phases
        }
        // No script: walk forward for the whole run
        None => vec![PhaseDef {
            steps: args.steps,
            actions: vec!["forward".into()],
            turn: 0.0,
            look: 0.0,
        }],
    };

    println!(
        "Loaded scene '{}' ({} meshes, {} triangles)",
        loaded.name,
        loaded.collision.mesh_count(),
        loaded.collision.triangle_count()
    );

    let mut sim = Simulation::new(loaded.config.clone(), &loaded.collision);
    let spawn = sim.spawn_point();
    println!(
        "Spawn point: [{:.2}, {:.2}, {:.2}]",
        spawn.x, spawn.y, spawn.z
    );

    let mut step_index = 0u32;
    let mut last = None;
    for (phase_index, phase) in phases.iter().enumerate() {
        println!(
            "Phase {}: {} steps, actions {:?}",
            phase_index, phase.steps, phase.actions
        );
        let intent = phase.intent();
        for _ in 0..phase.steps {
            let out = sim.step(&intent, &loaded.collision, delta);
            if args.trace_every > 0 && step_index % args.trace_every == 0 {
                print_trace(step_index, &out);
            }
            step_index += 1;
            last = Some(out);
        }
    }

    if let Some(out) = last {
        println!("Final state after {} steps:", step_index);
        print_trace(step_index, &out);
        println!(
            "  grounded: {}, locomotion: {}",
            sim.character.grounded, out.locomotion_playing
        );
    }
    Ok(())
}

fn print_trace(step: u32, out: &StepOutput) {
    let p = out.transform.position;
    let c = out.camera.position;
    println!(
        "  step {:>5}  pos [{:>7.2}, {:>7.2}, {:>7.2}]  yaw {:>6.2}  cam [{:>7.2}, {:>7.2}, {:>7.2}]",
        step, p.x, p.y, p.z, out.transform.yaw, c.x, c.y, c.z
    );
}
