//! End-to-end search tests on open, blocked and random worlds.

mod common;

use common::{bfs_distance, coords, random_world};
use pathik::{
    AgentSearch, GridCoord, GridWorld, MapGenerator, RobotInterface, SearchConfig, TieBreak,
    find_path, is_contiguous, is_simple,
};

const TIE_BREAKS: [TieBreak; 3] = [TieBreak::Newest, TieBreak::Oldest, TieBreak::Lexicographic];

// ============================================================================
// Open and Fully Blocked Worlds
// ============================================================================

#[test]
fn test_open_grids_take_manhattan_steps() {
    for n in 1..=8 {
        let mut world = GridWorld::open(n).unwrap();
        let result = find_path(&mut world).unwrap();

        assert!(result.success, "open {}x{} should be solvable", n, n);
        assert_eq!(result.cost as usize, 2 * (n - 1));
        assert_eq!(result.length_cells(), 2 * n - 1);
        assert!(world.check_path(&result.path));
    }
}

#[test]
fn test_open_4x4_path_has_seven_cells() {
    let mut world = GridWorld::open(4).unwrap();
    let result = find_path(&mut world).unwrap();

    assert_eq!(result.length_cells(), 7);
    assert_eq!(result.path.first(), Some(&GridCoord::ORIGIN));
    assert_eq!(result.path.last(), Some(&GridCoord::new(3, 3)));
}

#[test]
fn test_fully_blocked_worlds_have_no_path() {
    for n in 2..=6 {
        let mut world = MapGenerator::generate(n, 1.0, 3).unwrap();
        assert_eq!(world.blocked_count(), n * n - 2);

        let result = find_path(&mut world).unwrap();
        assert!(!result.success);
        assert!(result.path.is_empty());
        // Only the origin is ever expanded
        assert_eq!(result.stats.nodes_expanded, 1);
        assert_eq!(result.stats.steps_taken, 0);
    }
}

// ============================================================================
// Random Worlds
// ============================================================================

#[test]
fn test_random_worlds_match_bfs() {
    for seed in 0..60 {
        for &(size, density) in &[(6, 0.2), (10, 0.3), (15, 0.35)] {
            let mut world = random_world(size, density, seed);
            let expected = bfs_distance(&world);
            let result = find_path(&mut world).unwrap();

            match expected {
                Some(distance) => {
                    assert!(result.success, "seed {} size {}: path exists", seed, size);
                    assert_eq!(result.cost, distance, "seed {} size {}", seed, size);
                    assert_eq!(result.length_cells(), distance as usize + 1);
                    assert_eq!(result.path.first(), Some(&GridCoord::ORIGIN));
                    assert_eq!(result.path.last(), Some(&world.goal()));
                    assert!(is_contiguous(&result.path));
                    assert!(is_simple(&result.path));
                    assert!(world.check_path(&result.path));
                    assert!(world.is_at_goal());
                }
                None => {
                    assert!(!result.success, "seed {} size {}: no path exists", seed, size);
                    assert!(result.path.is_empty());
                }
            }
            assert_eq!(result.stats.failed_renavigations, 0);
        }
    }
}

#[test]
fn test_expanded_costs_never_change() {
    for seed in 0..30 {
        let mut world = random_world(12, 0.3, seed);
        let mut search = AgentSearch::with_defaults(&mut world);
        let result = search.run().unwrap();

        for expansion in &result.expansions {
            assert_eq!(
                search.context().cost_from_start(expansion.cell),
                Some(expansion.cost_from_start),
                "seed {}: g of {} changed after expansion",
                seed,
                expansion.cell
            );
        }
    }
}

#[test]
fn test_robot_only_walks_free_cells() {
    // Every expanded cell was stood on, so it must be free in the real map
    for seed in 0..20 {
        let mut world = random_world(10, 0.3, seed);
        let result = find_path(&mut world).unwrap();
        for expansion in &result.expansions {
            assert!(world.is_free(expansion.cell));
        }
    }
}

#[test]
fn test_same_seed_same_result() {
    let mut first = random_world(14, 0.3, 99);
    let mut second = random_world(14, 0.3, 99);

    let a = find_path(&mut first).unwrap();
    let b = find_path(&mut second).unwrap();

    assert_eq!(a.success, b.success);
    assert_eq!(a.path, b.path);
    assert_eq!(a.stats, b.stats);
    assert_eq!(a.expansions, b.expansions);
}

// ============================================================================
// Tie-breaking and Re-navigation
// ============================================================================

#[test]
fn test_all_tie_breaks_find_optimal_cost() {
    for seed in 0..25 {
        let reference = random_world(10, 0.25, seed);
        let expected = bfs_distance(&reference);

        for tie_break in TIE_BREAKS {
            let mut world = random_world(10, 0.25, seed);
            let result = AgentSearch::new(&mut world, SearchConfig::with_tie_break(tie_break))
                .run()
                .unwrap();

            assert_eq!(
                result.success.then_some(result.cost),
                expected,
                "seed {} {:?}",
                seed,
                tie_break
            );
        }
    }
}

#[test]
fn test_oldest_first_forces_renavigation() {
    // South is queued before east, so after expanding (1, 0) the oldest
    // entry is (0, 1), two steps away.
    let mut world = GridWorld::open(4).unwrap();
    let config = SearchConfig::with_tie_break(TieBreak::Oldest);
    let result = AgentSearch::new(&mut world, config).run().unwrap();

    assert!(result.success);
    assert_eq!(result.length_cells(), 7);
    assert!(result.stats.renavigations > 0);
    assert!(result.stats.renavigation_steps >= 2 * result.stats.renavigations);
    assert!(result.stats.steps_taken > result.stats.renavigation_steps);
}

#[test]
fn test_staircase_corridor() {
    let mut world = GridWorld::from_rows(&[
        "..###",
        "#..##",
        "##..#",
        "###..",
        "####.",
    ])
    .unwrap();
    let result = find_path(&mut world).unwrap();

    assert!(result.success);
    assert_eq!(
        result.path,
        coords(&[
            (0, 0),
            (0, 1),
            (1, 1),
            (1, 2),
            (2, 2),
            (2, 3),
            (3, 3),
            (3, 4),
            (4, 4),
        ])
    );
    // A single corridor never needs re-navigation
    assert_eq!(result.stats.renavigations, 0);
    assert_eq!(result.stats.steps_taken, 8);
}

#[test]
fn test_dead_end_branches_are_backtracked() {
    // The east branch along the top row is a dead end; the goal is reached
    // down the left column.
    let mut world = GridWorld::from_rows(&[
        ".....",
        ".####",
        ".....",
        "####.",
        ".....",
    ])
    .unwrap();
    let expected = bfs_distance(&world);
    let result = find_path(&mut world).unwrap();

    assert!(result.success);
    assert_eq!(Some(result.cost), expected);
    assert!(world.check_path(&result.path));
    assert!(is_simple(&result.path));
    // Walking includes the detours into the dead end and back
    assert!(result.stats.steps_taken > result.cost as usize);
}
