use animata_engine::Stage;

#[test]
fn perf_smoke_step() {
    let mut stage = Stage::new();
    assert!(stage.set_surface(640.0, 480.0));
    stage.enable_perf_metrics(true);
    for i in 0..200 {
        let json = format!(
            r#"{{"x": {}, "y": {}, "width": 12, "height": 12, "speed": 3, "direction": {}}}"#,
            (i * 7) % 620,
            (i * 13) % 460,
            (i * 29) % 360
        );
        let id = stage.add_actor(&json).unwrap();
        if i % 4 == 0 {
            assert!(stage.watch_collisions(id));
        }
    }
    stage.tick();
    let stats = stage.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.actor_count(), 200);
    assert_eq!(stats.collision_sources(), 50);
    assert_eq!(stats.collisions_dispatched(), stats.collisions_detected());
}
