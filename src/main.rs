//! Protocell - Entry Point
//!
//! A headless shell standing in for the excluded GUI: it owns the schedule,
//! driving ticks and ASCII renders through the `TickDriver` boundary the
//! same way a windowing shell would.

use clap::Parser;
use protocell::core::error::Result;
use protocell::render::TextSurface;
use protocell::simulation::{Simulation, SimulationEvent, TickDriver};

#[derive(Parser, Debug)]
#[command(name = "protocell", about = "Artificial chemistry simulation")]
struct Args {
    /// Grid width in slots
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Grid height in slots
    #[arg(long, default_value_t = 50)]
    height: usize,

    /// Random seed for world generation and movement
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of ticks to run
    #[arg(long, default_value_t = 500)]
    ticks: u64,

    /// Draw the grid only every n-th tick
    #[arg(long, default_value_t = 100)]
    draw_every: u64,

    /// Delay between ticks in milliseconds
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("protocell=info")
        .init();

    let args = Args::parse();
    tracing::info!("Protocell starting...");

    let sim = Simulation::initialize(args.width, args.height, args.seed)?;
    let driver = TickDriver::new(sim);
    driver.set_draw_every(args.draw_every);
    driver.set_delay_ms(args.delay_ms);

    for _ in 0..args.ticks {
        for event in driver.step() {
            log_event(&event);
        }

        if driver.should_draw() {
            let frame = driver.with_simulation(|sim| {
                let mut surface = TextSurface::new(sim.world().width(), sim.world().height());
                sim.render(&mut surface, 1.0);
                (sim.current_tick(), surface.to_text())
            });
            println!("--- tick {} ---\n{}", frame.0, frame.1);
        }

        if driver.delay_ms() > 0 {
            std::thread::sleep(std::time::Duration::from_millis(driver.delay_ms()));
        }
    }

    driver.with_simulation(|sim| {
        if sim.error_occurred() {
            tracing::warn!(last_error = ?sim.last_error(), "simulation finished with faults");
        }
        tracing::info!(
            ticks = sim.current_tick(),
            cells = sim.world().cell_count(),
            "simulation finished"
        );
    });

    Ok(())
}

fn log_event(event: &SimulationEvent) {
    match event {
        SimulationEvent::BondMade { us, them, tick } => {
            tracing::info!(tick, "bond made between types {}/{}", us.mnemonic(), them.mnemonic());
        }
        SimulationEvent::BondBroken { us, them, tick } => {
            tracing::info!(tick, "bond broken between types {}/{}", us.mnemonic(), them.mnemonic());
        }
        SimulationEvent::Reacted { us, them, tick } => {
            tracing::debug!(tick, "reaction between types {}/{}", us.mnemonic(), them.mnemonic());
        }
        SimulationEvent::Fault { message, tick } => {
            tracing::warn!(tick, "recoverable fault: {message}");
        }
    }
}
