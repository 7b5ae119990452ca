use clap::Parser;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

use copresence::config::PresenceConfig;
use copresence::entity::{LocalPlayer, PeerId, PlayerRegistry};
use copresence::events::Outbox;
use copresence::simulation;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of simulated remote peers
    #[arg(long, default_value = "3")]
    peers: usize,

    /// Number of simulation ticks to run
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Tick duration in milliseconds
    #[arg(long, default_value = "16")]
    tick_ms: f32,

    /// RNG seed for the scripted peer movement
    #[arg(long, default_value = "7")]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = PresenceConfig::load()?;

    log::info!(
        "Starting copresence demo: {} peers, {} ticks at {} ms",
        args.peers,
        args.ticks,
        args.tick_ms
    );

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut registry = PlayerRegistry::new();
    let mut outbox = Outbox::new();

    // Local player sits in Room1 with live media. The id sorts above the
    // scripted peer ids so the tie-break lets this side initiate.
    let mut local = LocalPlayer::new(PeerId::new("z-local"), Vec2::new(100.0, 100.0));
    local.ready_to_connect = true;
    local.media_connected = true;

    for i in 0..args.peers {
        let x = rng.gen_range(50.0..350.0);
        let y = rng.gen_range(50.0..350.0);
        let id = PeerId::new(format!("peer-{i:03}"));
        registry.create(id.clone(), format!("guest-{i}"), x, y)?;
        registry.apply_update(&id, "readyToConnect", &json!(true))?;
        registry.apply_update(&id, "videoConnected", &json!(true))?;
    }

    let mut now_ms = 0.0_f64;
    for tick in 0..args.ticks {
        now_ms += args.tick_ms as f64;

        // Every quarter second each peer wanders a little, the way
        // sparse network updates would move its authoritative position.
        if tick % 16 == 0 {
            let ids: Vec<PeerId> = registry.players().map(|p| p.id.clone()).collect();
            for id in ids {
                let target = registry.get(&id).map(|p| p.target_position).unwrap_or_default();
                let jitter_x = rng.gen_range(-40.0..40.0_f32);
                let jitter_y = rng.gen_range(-40.0..40.0_f32);
                registry.apply_update(&id, "x", &json!(target.x + jitter_x))?;
                registry.apply_update(&id, "y", &json!(target.y + jitter_y))?;
            }
        }

        simulation::tick(
            &mut registry,
            &local,
            &cfg,
            args.tick_ms,
            now_ms,
            &mut outbox,
        );

        for event in outbox.drain() {
            log::info!("[t={:.0}ms] signal: {:?}", now_ms, event);
        }
    }

    let ids: Vec<PeerId> = registry.players().map(|p| p.id.clone()).collect();
    for id in ids {
        registry.destroy(&id, &mut outbox)?;
    }
    for event in outbox.drain() {
        log::info!("[teardown] signal: {:?}", event);
    }

    log::info!("Demo finished after {} ticks", args.ticks);
    Ok(())
}
