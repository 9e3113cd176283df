//! Ember - headless particle engine demo
//!
//! Runs a configured particle system at a fixed tick rate, logging buffer
//! statistics, then soft-stops and drains before exiting. Buffer upload is
//! out of scope here; the vertex data stays on the CPU.

use ember::config::AppConfig;
use ember::SystemState;

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let mut system = match config.build_system() {
        Ok(system) => system,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    for line in system.describe().lines() {
        log::info!("{}", line);
    }

    let tick_rate = config.demo.tick_rate.max(1.0);
    let dt = 1.0 / tick_rate;
    let ticks = (config.demo.duration_seconds.max(0.0) * tick_rate) as u64;
    let report_every = tick_rate as u64;

    system.start();
    log::info!(
        "Running {} ticks at {} Hz (pool capacity {})",
        ticks,
        tick_rate,
        system.pool().capacity()
    );

    for tick in 0..ticks {
        system.update(dt);
        if tick % report_every == 0 {
            log::info!(
                "t={:5.1}s  alive={:4}  vertices={}",
                tick as f32 * dt,
                system.alive_count(),
                system.renderer().vertex_count()
            );
        }
    }

    system.soft_stop();
    // Drain bound: every particle dies within its lifespan, so a couple of
    // lifespans of extra ticks is plenty.
    let drain_limit = ticks.max(16) * 4;
    let mut drained = 0;
    while system.state() != SystemState::Stopped && drained < drain_limit {
        system.update(dt);
        drained += 1;
    }

    log::info!(
        "Drained in {} ticks, {} alive at exit",
        drained,
        system.alive_count()
    );
}
