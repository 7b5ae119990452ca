use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use serde_json::json;

use copresence::config::PresenceConfig;
use copresence::entity::{LocalPlayer, PeerId, PlayerRegistry};
use copresence::events::Outbox;
use copresence::simulation;

fn bench_tick(c: &mut Criterion) {
    let cfg = PresenceConfig::default();
    let mut local = LocalPlayer::new(PeerId::new("zzz"), Vec2::new(100.0, 100.0));
    local.ready_to_connect = true;
    local.media_connected = true;
    local.contact.touching = true;

    let mut registry = PlayerRegistry::new();
    for i in 0..100 {
        let id = PeerId::new(format!("peer-{i:03}"));
        registry
            .create(id.clone(), format!("guest-{i}"), (i * 7 % 800) as f32, (i * 13 % 800) as f32)
            .unwrap();
        registry.apply_update(&id, "readyToConnect", &json!(true)).unwrap();
        registry
            .apply_update(&id, "x", &json!((i * 31 % 800) as f32))
            .unwrap();
    }

    let mut outbox = Outbox::new();
    let mut now_ms = 0.0_f64;

    c.bench_function("tick_100_peers", |b| {
        b.iter(|| {
            now_ms += 16.0;
            simulation::tick(
                black_box(&mut registry),
                black_box(&local),
                &cfg,
                16.0,
                now_ms,
                &mut outbox,
            );
            outbox.drain().count()
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
