//! Incremental maintenance under add/remove sequences.
//!
//! Expected values are exact statistics of the resulting shapes; every
//! sequence ends with a consistency audit so a delta-rule bug cannot hide
//! behind a coincidentally right headline number.

use super::fixtures::*;

// ============================================================================
// add_edge
// ============================================================================

#[test]
fn adding_an_edge_updates_adjacency() {
    let mut g = triangle_plus_leaf();
    assert!(g.add_edge("1", "4").unwrap());
    assert!(g.vertex("1").unwrap().has_neighbor("4"));
    assert!(g.vertex("4").unwrap().has_neighbor("1"));
    assert!(!g.vertex("2").unwrap().has_neighbor("4"));
}

#[test]
fn adding_an_edge_updates_the_edge_collection() {
    let mut g = star_five_leaves();
    g.add_edge("3", "4").unwrap();
    assert!(g.has_edge("3", "4"));
    assert!(g.has_edge("1", "3"));
    assert!(!g.has_edge("2", "3"));
    assert_eq!(g.number_of_edges(), 6);
    assert_eq!(g.edges().count(), 6);
}

#[test]
fn adding_an_edge_updates_min_fi() {
    let mut g = triangle_plus_leaf();
    g.add_edge("1", "4").unwrap();
    assert_close(g.min_fi(), 7.0 / 9.0);

    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    assert_close(g.min_fi(), 0.76);
    g.add_edge("4", "1").unwrap();
    assert_close(g.min_fi(), 0.76);
    g.add_edge("6", "4").unwrap();
    assert_close(g.min_fi(), 0.8);
    g.add_edge("7", "1").unwrap();
    assert_close(g.min_fi(), 0.84);
    g.check_consistency().unwrap();
}

#[test]
fn adding_an_edge_updates_max_fi() {
    let mut g = triangle_plus_leaf();
    g.add_edge("1", "4").unwrap();
    assert_close(g.max_fi(), 1.5);

    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    assert_close(g.max_fi(), 3.0);
    g.add_edge("4", "1").unwrap();
    assert_close(g.max_fi(), 1.25);
    g.add_edge("6", "4").unwrap();
    assert_close(g.max_fi(), 1.25);
    g.add_edge("7", "1").unwrap();
    assert_close(g.max_fi(), 1.5);
    g.check_consistency().unwrap();
}

#[test]
fn adding_an_edge_updates_classification_counts() {
    let mut g = triangle_plus_leaf();
    g.add_edge("4", "2").unwrap();
    assert_eq!(g.count_happy(), 2);
    assert_eq!(g.count_sad(), 2);
    assert_eq!(g.count_neutral(), 0);
    // Completing K4 turns everyone neutral.
    g.add_edge("4", "1").unwrap();
    assert_eq!(g.count_happy(), 0);
    assert_eq!(g.count_sad(), 0);
    assert_eq!(g.count_neutral(), 4);

    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    assert_eq!(g.count_happy(), 2);
    assert_eq!(g.count_sad(), 6);
    assert_eq!(g.count_neutral(), 1);
    g.add_edge("4", "1").unwrap();
    assert_eq!(g.count_happy(), 1);
    assert_eq!(g.count_sad(), 6);
    assert_eq!(g.count_neutral(), 2);
    g.add_edge("6", "4").unwrap();
    assert_eq!(g.count_happy(), 2);
    assert_eq!(g.count_sad(), 7);
    assert_eq!(g.count_neutral(), 0);
    g.add_edge("7", "1").unwrap();
    assert_eq!(g.count_happy(), 3);
    assert_eq!(g.count_sad(), 6);
    assert_eq!(g.count_neutral(), 0);
    g.check_consistency().unwrap();
}

#[test]
fn adding_an_edge_to_a_new_vertex_updates_statistics() {
    let mut g = star_five_leaves();
    g.add_edge("7", "3").unwrap();
    assert_close(g.min_fi(), 0.24);
    assert_close(g.max_fi(), 5.0);
    assert_eq!(g.count_sad(), 6);
    assert_eq!(g.count_happy(), 1);
    assert_eq!(g.count_neutral(), 0);

    let mut g = path_four();
    g.add_edge("4", "5").unwrap();
    assert_close(g.min_fi(), 0.75);
    assert_close(g.max_fi(), 2.0);
    assert_eq!(g.count_sad(), 2);
    assert_eq!(g.count_happy(), 2);
    assert_eq!(g.count_neutral(), 1);
}

#[test]
fn adding_an_edge_updates_fi_of_involved_vertices() {
    let mut g = star_five_leaves();
    g.add_edge("3", "4").unwrap();
    assert_close(g.vertex("1").unwrap().fi(), 0.28);
    assert_close(g.vertex("2").unwrap().fi(), 5.0);
    assert_close(g.vertex("5").unwrap().fi(), 5.0);
    assert_close(g.vertex("6").unwrap().fi(), 5.0);
    assert_close(g.vertex("3").unwrap().fi(), 1.75);
    assert_close(g.vertex("4").unwrap().fi(), 1.75);
}

#[test]
fn adding_an_edge_updates_afi() {
    let mut g = two_orphans();
    g.add_edge("1", "2").unwrap();
    assert_close(g.afi(), 1.0);

    let mut g = single_edge_plus_orphan();
    g.add_edge("2", "3").unwrap();
    assert_close(g.afi(), 1.5);

    let mut g = star_five_leaves();
    g.add_edge("3", "4").unwrap();
    assert_close(g.afi(), 3.13);

    let mut g = path_four();
    g.add_edge("2", "4").unwrap();
    assert_close(g.afi(), 1.513_888_888_888_888_8);

    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    assert_close(g.afi(), 1.322_098_765_432_098_8);
    g.add_edge("6", "4").unwrap();
    assert_close(g.afi(), 1.215);
}

#[test]
fn adding_an_edge_updates_assortativity() {
    let mut g = two_orphans();
    g.add_edge("1", "2").unwrap();
    assert_close(g.assortativity(), 1.0);

    let mut g = single_edge_plus_orphan();
    g.add_edge("2", "3").unwrap();
    assert_close(g.assortativity(), -1.0);

    let mut g = star_five_leaves();
    g.add_edge("3", "4").unwrap();
    assert_close(g.assortativity(), -5.0 / 6.0);

    let mut g = path_four();
    g.add_edge("2", "4").unwrap();
    assert_close(g.assortativity(), -5.0 / 7.0);

    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    assert_close(g.assortativity(), 62.0 / 111.0);
    g.add_edge("6", "4").unwrap();
    assert_close(g.assortativity(), 116.0 / 281.0);
}

// ============================================================================
// remove_edge
// ============================================================================

#[test]
fn removing_an_edge_updates_adjacency() {
    let mut g = complete_four();
    assert!(g.remove_edge("1", "2"));
    assert!(!g.vertex("1").unwrap().has_neighbor("2"));
    assert!(!g.vertex("2").unwrap().has_neighbor("1"));
    assert!(g.vertex("1").unwrap().has_neighbor("3"));
    assert!(g.vertex("2").unwrap().has_neighbor("4"));
}

#[test]
fn removing_an_edge_updates_the_edge_collection() {
    let mut g = complete_four();
    g.remove_edge("3", "2");
    assert!(!g.has_edge("2", "3"));
    assert!(g.has_edge("1", "3"));
    assert!(g.has_edge("2", "4"));
    assert!(g.has_edge("3", "4"));
    assert_eq!(g.number_of_edges(), 5);
}

#[test]
fn removing_an_edge_updates_fi_of_involved_vertices() {
    let mut g = complete_four();
    g.remove_edge("1", "2");
    assert_close(g.vertex("1").unwrap().fi(), 1.5);
    assert_close(g.vertex("2").unwrap().fi(), 1.5);
    assert_close(g.vertex("3").unwrap().fi(), 7.0 / 9.0);
    assert_close(g.vertex("4").unwrap().fi(), 7.0 / 9.0);
}

#[test]
fn removing_an_edge_updates_min_fi() {
    let mut g = triangle_plus_leaf();
    g.remove_edge("2", "3");
    assert_close(g.min_fi(), 0.75);

    let mut g = triangle();
    g.remove_edge("2", "3");
    assert_close(g.min_fi(), 0.5);
    g.remove_edge("1", "3");
    assert_close(g.min_fi(), 1.0);

    let mut g = path_four();
    g.remove_edge("3", "4");
    assert_close(g.min_fi(), 0.5);
}

#[test]
fn removing_an_edge_updates_max_fi() {
    let mut g = triangle();
    g.remove_edge("2", "3");
    assert_close(g.max_fi(), 2.0);

    let mut g = triangle_plus_leaf();
    g.remove_edge("1", "3");
    assert_close(g.max_fi(), 2.0);
    g.remove_edge("2", "3");
    assert_close(g.max_fi(), 1.0);
    g.check_consistency().unwrap();
}

#[test]
fn removing_an_edge_updates_classification_counts() {
    let mut g = bow_tie();
    g.remove_edge("4", "6");
    assert_eq!(g.count_happy(), 2);
    assert_eq!(g.count_sad(), 4);
    assert_eq!(g.count_neutral(), 0);
    g.remove_edge("5", "6");
    assert_eq!(g.count_happy(), 1);
    assert_eq!(g.count_sad(), 3);
    assert_eq!(g.count_neutral(), 1);

    let mut g = triangle();
    g.remove_edge("2", "3");
    assert_eq!(g.count_sad(), 2);
    assert_eq!(g.count_neutral(), 0);
}

#[test]
fn removing_an_edge_updates_afi() {
    let mut g = triangle();
    g.remove_edge("1", "3");
    assert_close(g.afi(), 1.5);

    let mut g = complete_four();
    g.remove_edge("1", "4");
    assert_close(g.afi(), 41.0 / 36.0);
    g.remove_edge("1", "3");
    assert_close(g.afi(), 1.513_888_888_888_888_8);

    let mut g = path_plus_clique();
    g.remove_edge("6", "9");
    g.remove_edge("2", "3");
    assert_close(g.afi(), 1.032_407_407_407_407);
    g.check_consistency().unwrap();
}

#[test]
fn removing_an_edge_updates_assortativity() {
    let mut g = triangle();
    g.remove_edge("1", "3");
    assert_close(g.assortativity(), -1.0);

    let mut g = complete_four();
    g.remove_edge("1", "4");
    assert_close(g.assortativity(), -2.0 / 3.0);
    g.remove_edge("1", "3");
    assert_close(g.assortativity(), -5.0 / 7.0);

    let mut g = path_plus_clique();
    g.remove_edge("6", "9");
    g.remove_edge("2", "3");
    assert_close(g.assortativity(), 0.78);
}

// ============================================================================
// Mixed sequences
// ============================================================================

#[test]
fn interleaved_adds_and_removes_update_afi() {
    let mut g = path_plus_clique();
    g.add_edge("1", "5").unwrap();
    assert!(g.remove_edge("7", "5"));
    assert!(g.remove_edge("7", "9"));
    g.add_edge("8", "1").unwrap();
    // Already present: must be a no-op inside the sequence.
    assert!(!g.add_edge("5", "1").unwrap());
    g.add_edge("6", "3").unwrap();

    assert_close(g.afi(), 1.447_407_407_407_407);
    g.check_consistency().unwrap();
}

#[test]
fn interleaved_adds_and_removes_update_assortativity() {
    let mut g = path_plus_clique();
    g.add_edge("1", "5").unwrap();
    g.remove_edge("7", "5");
    g.remove_edge("7", "9");
    g.add_edge("8", "1").unwrap();
    assert!(!g.add_edge("5", "1").unwrap());
    g.add_edge("6", "3").unwrap();

    assert_close(g.assortativity(), -25.0 / 283.0);
    g.check_consistency().unwrap();
}

#[test]
fn add_then_remove_round_trips_every_statistic() {
    let mut g = star_five_leaves();
    let afi = g.afi();
    let assortativity = g.assortativity();
    let min_fi = g.min_fi();
    let max_fi = g.max_fi();
    let counts = (g.count_happy(), g.count_sad(), g.count_neutral());

    g.add_edge("3", "4").unwrap();
    assert!(g.remove_edge("3", "4"));

    assert_close(g.afi(), afi);
    assert_close(g.assortativity(), assortativity);
    assert_close(g.min_fi(), min_fi);
    assert_close(g.max_fi(), max_fi);
    assert_eq!(
        (g.count_happy(), g.count_sad(), g.count_neutral()),
        counts
    );
    g.check_consistency().unwrap();
}

#[test]
fn degree_symmetry_holds_through_arbitrary_sequences() {
    let mut g = path_plus_clique();
    g.add_edge("3", "5").unwrap();
    g.remove_edge("6", "7");
    g.add_edge("4", "9").unwrap();
    g.remove_edge("1", "2");
    g.swap_edges("2", "3", "8", "6", "8", "3").unwrap();

    for v in g.vertices() {
        for n in v.neighbors() {
            assert!(g.vertex(n).unwrap().has_neighbor(v.id()));
        }
        assert_eq!(v.degree(), v.neighbors().count());
    }
    g.check_consistency().unwrap();
}
