use rand::SeedableRng;
use rand::rngs::StdRng;
use vertexlab_graph::{DegreeRange, UndirectedGraph};
use vertexlab_layout::geom::point;
use vertexlab_layout::{
    Drawing, Error, Force, ForceConfig, ForceLayout, Headless, generate_random_drawing,
};

fn layout() -> ForceLayout {
    ForceLayout::new(ForceConfig::default()).unwrap()
}

#[test]
fn rejects_an_area_smaller_than_its_paddings() {
    let config = ForceConfig {
        area_width: 0.5,
        ..Default::default()
    };
    assert!(matches!(
        ForceLayout::new(config),
        Err(Error::InvalidConfig { .. })
    ));

    let config = ForceConfig {
        multiplier_of_repulsion: f64::NAN,
        ..Default::default()
    };
    assert!(ForceLayout::new(config).is_err());
}

#[test]
fn nodes_stay_inside_the_padded_area() {
    let config = ForceConfig::default();
    let layout = ForceLayout::new(config).unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut d =
        generate_random_drawing(15, DegreeRange { min: 2, max: 4 }, &config, Headless, &mut rng)
            .unwrap();

    layout.run(&mut d, 200);

    for n in d.nodes() {
        let p = n.position();
        assert!(p.x >= config.paddings && p.x <= config.area_width - config.paddings);
        assert!(p.y >= config.paddings && p.y <= config.area_height - config.paddings);
    }
}

#[test]
fn node_repulsion_pushes_a_pair_apart_symmetrically() {
    let g = UndirectedGraph::from_edges(2, []).unwrap();
    let mut d = Drawing::from_graph(g, Headless, |id| {
        if id == 0 {
            point(15.0, 10.0)
        } else {
            point(25.0, 10.0)
        }
    });

    layout().iterate_with(&mut d, &[Force::NodeRepulsion]);

    let a = d.position(0).unwrap();
    let b = d.position(1).unwrap();
    assert!((a.x - 14.99).abs() < 1e-12);
    assert!((b.x - 25.01).abs() < 1e-12);
    assert_eq!(a.y, 10.0);
    assert_eq!(b.y, 10.0);
}

#[test]
fn walls_push_away_from_a_close_border() {
    let g = UndirectedGraph::from_edges(1, []).unwrap();
    let mut d = Drawing::from_graph(g, Headless, |_| point(1.0, 10.0));
    layout().iterate_with(&mut d, &[Force::Walls]);
    assert!(d.position(0).unwrap().x > 1.5);
}

#[test]
fn no_forces_only_clamps() {
    let g = UndirectedGraph::from_edges(2, [(0, 1)]).unwrap();
    let mut d = Drawing::from_graph(g, Headless, |id| {
        if id == 0 {
            point(5.0, 5.0)
        } else {
            point(-3.0, 50.0)
        }
    });
    layout().iterate_with(&mut d, &[]);
    assert_eq!(d.position(0), Some(point(5.0, 5.0)));
    assert_eq!(d.position(1), Some(point(0.3, 19.7)));
}

#[test]
fn every_force_composition_keeps_positions_finite() {
    let mut rng = StdRng::seed_from_u64(5);
    let config = ForceConfig::default();
    let mut d =
        generate_random_drawing(8, DegreeRange { min: 1, max: 3 }, &config, Headless, &mut rng)
            .unwrap();
    // Stack two nodes to exercise the degenerate paths.
    let p = d.position(0).unwrap();
    d.set_position(1, p).unwrap();

    let all = [
        Force::Walls,
        Force::NodeRepulsion,
        Force::EdgeSprings,
        Force::EdgeRepulsion,
        Force::HardEdgeRepulsion,
    ];
    for _ in 0..50 {
        layout().iterate_with(&mut d, &all);
    }
    for n in d.nodes() {
        assert!(n.position().x.is_finite() && n.position().y.is_finite());
    }
}

#[test]
fn force_config_reads_partial_json() {
    let config: ForceConfig =
        serde_json::from_str(r#"{"areaWidth": 60, "multiplierOfConnection": 0.01}"#).unwrap();
    assert_eq!(config.area_width, 60.0);
    assert_eq!(config.area_height, 20.0);
    assert_eq!(config.multiplier_of_connection, 0.01);

    let text = serde_json::to_string(&config).unwrap();
    let back: ForceConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(back, config);
}
