use rand::SeedableRng;
use rand::rngs::StdRng;
use vertexlab_graph::DegreeRange;
use vertexlab_layout::{
    DeintersectStrategy, ForceConfig, ForceLayout, Headless, LayoutSession, SessionPhase,
    SessionSettings, generate_random_drawing,
};

fn session(seed: u64, settings: SessionSettings) -> LayoutSession {
    let config = ForceConfig::default();
    let mut rng = StdRng::seed_from_u64(seed);
    let drawing =
        generate_random_drawing(10, DegreeRange { min: 2, max: 4 }, &config, Headless, &mut rng)
            .unwrap();
    LayoutSession::new(drawing, ForceLayout::new(config).unwrap(), settings)
}

#[test]
fn default_settings() {
    let s = SessionSettings::default();
    assert_eq!(s.iterations_before_deintersect, 1000);
    assert_eq!(s.iterations_after_deintersect, 50);
    assert_eq!(s.strategy, DeintersectStrategy::ByIntersectionsCount);
}

#[test]
fn phases_follow_the_configured_iteration_counts() {
    let settings = SessionSettings {
        iterations_before_deintersect: 3,
        iterations_after_deintersect: 2,
        strategy: DeintersectStrategy::ByLength,
    };
    let mut s = session(3, settings);

    assert_eq!(s.step().unwrap(), SessionPhase::Relaxing { iteration: 1 });
    assert_eq!(s.step().unwrap(), SessionPhase::Relaxing { iteration: 2 });
    assert_eq!(s.step().unwrap(), SessionPhase::Relaxing { iteration: 3 });
    assert!(s.removed_edges().is_none());

    let SessionPhase::Deintersected { removed } = s.step().unwrap() else {
        panic!("expected the de-intersection pass");
    };
    assert_eq!(s.removed_edges(), Some(removed));

    assert_eq!(s.step().unwrap(), SessionPhase::Settling { iteration: 1 });
    assert!(!s.is_finished());
    assert_eq!(s.step().unwrap(), SessionPhase::Settling { iteration: 2 });
    assert!(s.is_finished());
    assert_eq!(s.step().unwrap(), SessionPhase::Finished);
    assert_eq!(s.step().unwrap(), SessionPhase::Finished);
}

#[test]
fn full_run_leaves_a_connected_drawing() {
    for seed in 0..4 {
        let settings = SessionSettings {
            iterations_before_deintersect: 200,
            ..Default::default()
        };
        let mut s = session(seed, settings);
        s.run_to_end().unwrap();
        let d = s.into_drawing();
        assert!(d.graph().is_connected_graph());
        assert_eq!(d.edge_count(), d.graph().edge_count());
        assert!(d.bounds().is_some());
    }
}

#[test]
fn settings_read_partial_json() {
    let s: SessionSettings =
        serde_json::from_str(r#"{"iterationsBeforeDeintersect": 10, "strategy": "byLength"}"#)
            .unwrap();
    assert_eq!(s.iterations_before_deintersect, 10);
    assert_eq!(s.iterations_after_deintersect, 50);
    assert_eq!(s.strategy, DeintersectStrategy::ByLength);
}

#[test]
fn generation_errors_surface_as_graph_errors() {
    let mut rng = StdRng::seed_from_u64(0);
    let err = generate_random_drawing(
        0,
        DegreeRange { min: 1, max: 2 },
        &ForceConfig::default(),
        Headless,
        &mut rng,
    );
    assert!(matches!(err, Err(vertexlab_layout::Error::Graph(_))));
}
