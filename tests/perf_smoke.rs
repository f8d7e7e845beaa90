use greenhouse_engine::Simulation;

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::with_seed(1280, 720, 9);
    sim.enable_perf_metrics(true);
    for i in 0..300u32 {
        sim.spawn_id((i % 3) as u8).unwrap();
    }
    sim.advance_frame();
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.particles_processed(), 300);
    assert_eq!(stats.particle_count(), 300);
    assert_eq!(stats.drawables(), 300);
}
