use rand::SeedableRng;
use rand::rngs::StdRng;
use vertexlab_graph::{
    DegreeRange, Error, generate_connected_graph, generate_connected_graph_with_attempts,
};

#[test]
fn accepted_graphs_are_connected_and_respect_degree_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let range = DegreeRange::new(2, 4).unwrap();
    for _ in 0..100 {
        let g = generate_connected_graph(10, range, &mut rng).unwrap();
        assert_eq!(g.vertex_count(), 10);
        assert!(g.is_connected_graph());
        for v in g.vertices() {
            assert!(range.contains(v.degree()), "vertex {} has degree {}", v.id(), v.degree());
            for &n in v.neighbors() {
                assert!(g.vertex(n).unwrap().neighbors().contains(&v.id()));
            }
        }
    }
}

#[test]
fn same_seed_generates_same_graph() {
    let range = DegreeRange::new(1, 3).unwrap();
    let a = generate_connected_graph(8, range, &mut StdRng::seed_from_u64(11)).unwrap();
    let b = generate_connected_graph(8, range, &mut StdRng::seed_from_u64(11)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unsatisfiable_configuration_reports_generation_failure() {
    let mut rng = StdRng::seed_from_u64(1);
    let range = DegreeRange::new(0, 0).unwrap();
    let err = generate_connected_graph_with_attempts(3, range, 5, &mut rng).unwrap_err();
    assert_eq!(err, Error::GenerationFailed { attempts: 5 });
}
