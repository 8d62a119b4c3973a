//! Simulation facade and pacing boundary
//!
//! `Simulation` bundles the world, the fixed chemistry, and the seeded RNG
//! behind the boundary the external shell consumes: initialize, advance one
//! tick, inspect a slot, render. `TickDriver` wraps a simulation in a
//! single mutual-exclusion boundary so that a renderer on another schedule
//! never observes a torn mid-tick state; a tick always runs to completion
//! once started.

use crate::chemistry::Chemistry;
use crate::core::config::SimulationConfig;
use crate::core::error::{Result, SimError};
use crate::core::types::{CellType, Tick};
use crate::render::{render, RenderSurface};
use crate::simulation::tick::{run_simulation_tick, SimulationEvent};
use crate::world::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

/// Rows of the fixed seed structure, top to bottom: mnemonic and state
///
/// An activated chain head (e8) followed by a short strand of raw links.
const SEED_STRIP: [(CellType, u16); 5] = [
    (CellType::E, 8),
    (CellType::A, 1),
    (CellType::B, 1),
    (CellType::C, 1),
    (CellType::F, 1),
];

pub struct Simulation {
    world: World,
    chemistry: Chemistry,
    rng: ChaCha8Rng,
    config: SimulationConfig,
}

impl Simulation {
    /// Build a world with the fixed seed structure plus randomly scattered
    /// raw material, and the default chemistry
    ///
    /// Fails only on dimensions that cannot hold the seed structure.
    /// Construction-time faults are fatal and propagate to the caller.
    pub fn initialize(width: usize, height: usize, seed: u64) -> Result<Self> {
        let config = SimulationConfig::default();
        Self::initialize_with(width, height, seed, config)
    }

    pub fn initialize_with(
        width: usize,
        height: usize,
        seed: u64,
        config: SimulationConfig,
    ) -> Result<Self> {
        config.validate().map_err(SimError::InvalidConfig)?;

        let strip_top = height / 2;
        if width <= config.seed_column || strip_top + SEED_STRIP.len() > height {
            return Err(SimError::InvalidDimensions { width, height });
        }

        let mut world = World::new(width, height)?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        // fixed seed structure: a vertical strip at the seed column
        for (row, (kind, state)) in SEED_STRIP.iter().enumerate() {
            world.spawn_cell(config.seed_column, strip_top + row, *kind, *state)?;
        }

        // scatter raw material; attempts on occupied slots are skipped
        for _ in 0..config.scatter_count {
            let px = rng.gen_range(0..width);
            let py = rng.gen_range(0..height);
            if world.slot_is_empty(px, py) {
                world.spawn_cell(px, py, CellType::random(&mut rng), 0)?;
            }
        }

        tracing::info!(
            width,
            height,
            seed,
            cells = world.cell_count(),
            "initialized world"
        );

        Ok(Self {
            world,
            chemistry: Chemistry::with_default_rules()?,
            rng,
            config,
        })
    }

    /// Advance the simulation by one step; never fails
    pub fn tick(&mut self) -> Vec<SimulationEvent> {
        run_simulation_tick(&mut self.world, &self.chemistry, &mut self.rng)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn current_tick(&self) -> Tick {
        self.world.current_tick
    }

    /// Inspector overlay: short label for a slot, empty if vacant or
    /// out of bounds
    pub fn contents_at(&self, x: usize, y: usize) -> String {
        self.world.contents_at(x, y)
    }

    /// Pure read of cell positions/types/states onto a render surface
    pub fn render<S: RenderSurface>(&self, surface: &mut S, scale: f32) {
        render(&self.world, surface, scale, self.config.label_min_scale);
    }

    pub fn last_error(&self) -> Option<&str> {
        self.world.last_error()
    }

    pub fn error_occurred(&self) -> bool {
        self.world.error_occurred()
    }
}

/// Mutual-exclusion boundary around "one full tick"
///
/// The tick driver and the render driver run on independent schedules; both
/// go through this lock, so a frame is only ever drawn from a completed
/// generation. Pausing skips `tick()` but still allows rendering; tick and
/// render frequency throttle independently.
pub struct TickDriver {
    sim: Mutex<Simulation>,
    paused: AtomicBool,
    draw_every: AtomicU64,
    delay_ms: AtomicU64,
}

impl TickDriver {
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim: Mutex::new(sim),
            paused: AtomicBool::new(false),
            draw_every: AtomicU64::new(1),
            delay_ms: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Simulation> {
        // a poisoned lock means a panic mid-tick; the state is still the
        // last completed generation, so recover and keep serving
        self.sim.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn toggle_paused(&self) {
        self.paused.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Render throttle: draw only every n-th tick
    pub fn set_draw_every(&self, every: u64) {
        self.draw_every.store(every.max(1), Ordering::SeqCst);
    }

    /// Tick pacing hint in milliseconds, for the external scheduler
    pub fn set_delay_ms(&self, delay: u64) {
        self.delay_ms.store(delay, Ordering::SeqCst);
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms.load(Ordering::SeqCst)
    }

    /// Advance one tick unless paused; paused steps return no events
    pub fn step(&self) -> Vec<SimulationEvent> {
        if self.is_paused() {
            return Vec::new();
        }
        self.lock().tick()
    }

    /// Whether the current generation should be drawn, per the throttle
    pub fn should_draw(&self) -> bool {
        let every = self.draw_every.load(Ordering::SeqCst);
        self.lock().current_tick() % every == 0
    }

    /// Read-only access under the tick lock, for rendering and inspection
    pub fn with_simulation<R>(&self, f: impl FnOnce(&Simulation) -> R) -> R {
        f(&self.lock())
    }
}
