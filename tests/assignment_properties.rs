// Integration tests for the single-stop assignment engine
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_harvest::models::{Profit, SolverConfig};
use route_harvest::{Assignment, AssignmentSolver, Collector, Depot};

fn random_matrix(rng: &mut StdRng, collectors: usize, depots: usize) -> Vec<Vec<Profit>> {
    (0..collectors)
        .map(|_| (0..depots).map(|_| rng.gen_range(0..100)).collect())
        .collect()
}

fn check_one_to_one(assignment: &Assignment) {
    let mut depots_seen = std::collections::HashSet::new();
    for depot in assignment.pairs.values() {
        assert!(depots_seen.insert(*depot), "depot assigned twice");
    }
}

#[test]
fn test_greedy_never_beats_exact() {
    let solver = AssignmentSolver::new();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let collectors = rng.gen_range(1..=5);
        let depots = rng.gen_range(1..=5);
        let matrix = random_matrix(&mut rng, collectors, depots);

        let exact = solver.exact_assignment(&matrix);
        let greedy = solver.greedy_assignment(&matrix);

        assert!(greedy.total_profit <= exact.total_profit);
        check_one_to_one(&exact);
        check_one_to_one(&greedy);
    }
}

#[test]
fn test_reported_profit_matches_matrix_on_random_instances() {
    let solver = AssignmentSolver::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let collectors = rng.gen_range(1..=4);
        let depots = rng.gen_range(1..=4);
        let matrix = random_matrix(&mut rng, collectors, depots);

        let assignment = solver.assign_matrix(&matrix);
        assert_eq!(assignment.profit_against(&matrix), assignment.total_profit);
    }
}

#[test]
fn test_exact_and_greedy_agree_on_a_dominant_diagonal() {
    // Each collector's own depot dominates every alternative, so the
    // greedy pick order cannot block the optimum
    let matrix = vec![
        vec![90, 2, 1],
        vec![3, 80, 2],
        vec![1, 4, 70],
    ];
    let solver = AssignmentSolver::new();

    let exact = solver.exact_assignment(&matrix);
    let greedy = solver.greedy_assignment(&matrix);

    assert_eq!(exact.total_profit, 240);
    assert_eq!(greedy.total_profit, 240);
    assert_eq!(exact.pairs, greedy.pairs);
}

#[test]
fn test_circular_route_uses_the_short_way_around() {
    // Route of length 30: collector 28 and depot 2 are 4 apart, not 26
    let config = SolverConfig::with_route_length(30);
    let solver = AssignmentSolver::with_config(config);

    let collectors = vec![Collector::new(0, 28)];
    let depots = vec![Depot::new(0, 2, 10)];

    let assignment = solver.assign(&collectors, &depots);
    assert_eq!(assignment.total_profit, 6);
    assert_eq!(assignment.depot_for(0), Some(0));
}

#[test]
fn test_unprofitable_collectors_stay_unassigned() {
    let config = SolverConfig::with_route_length(200);
    let solver = AssignmentSolver::with_config(config);

    // Only the first collector can reach the depot at a profit
    let collectors = vec![
        Collector::new(0, 48),
        Collector::new(1, 150),
        Collector::new(2, 190),
    ];
    let depots = vec![Depot::new(0, 50, 5)];

    let assignment = solver.assign(&collectors, &depots);
    assert_eq!(assignment.len(), 1);
    assert_eq!(assignment.depot_for(0), Some(0));
    assert_eq!(assignment.total_profit, 3);
}

#[test]
fn test_large_instance_falls_back_to_greedy() {
    // Both sides above the exact limit: the solver must still return a
    // valid one-to-one pairing with the matrix-consistent total
    let config = SolverConfig {
        exact_assignment_limit: 3,
        ..SolverConfig::default()
    };
    let solver = AssignmentSolver::with_config(config);
    let mut rng = StdRng::seed_from_u64(99);

    let matrix = random_matrix(&mut rng, 8, 8);
    let assignment = solver.assign_matrix(&matrix);

    check_one_to_one(&assignment);
    assert_eq!(assignment.profit_against(&matrix), assignment.total_profit);
    assert_eq!(assignment.total_profit, solver.greedy_assignment(&matrix).total_profit);
}

#[test]
fn test_extreme_rewards_absorbed_without_panic() {
    // Garbage-sized rewards flow through matrix construction and both
    // search paths; totals saturate instead of overflowing
    let solver = AssignmentSolver::new();

    let collectors = vec![Collector::new(0, 0), Collector::new(1, 50)];
    let depots = vec![
        Depot::new(0, 10, i64::MAX),
        Depot::new(1, 60, i64::MAX - 5),
    ];

    let assignment = solver.assign(&collectors, &depots);
    assert_eq!(assignment.len(), 2);
    assert_eq!(assignment.total_profit, i64::MAX);
    assert!(assignment.total_profit >= 0);
}

#[test]
fn test_lopsided_instances_finish_quickly() {
    // 9 collectors against 30 depots: exhaustive search over the larger
    // side would be astronomically large, so this must dispatch to greedy
    // and return at once
    let solver = AssignmentSolver::new();
    let mut rng = StdRng::seed_from_u64(17);

    let matrix = random_matrix(&mut rng, 9, 30);
    let assignment = solver.assign_matrix(&matrix);

    check_one_to_one(&assignment);
    assert_eq!(assignment.profit_against(&matrix), assignment.total_profit);
    assert_eq!(
        assignment.total_profit,
        solver.greedy_assignment(&matrix).total_profit
    );
}

#[test]
fn test_assignment_skips_zero_profit_pairs() {
    // A pair at exactly break-even is not worth the trip
    let matrix = vec![vec![0, 0], vec![0, 5]];
    let solver = AssignmentSolver::new();

    let assignment = solver.assign_matrix(&matrix);
    assert_eq!(assignment.len(), 1);
    assert_eq!(assignment.depot_for(1), Some(1));
    assert_eq!(assignment.total_profit, 5);
}
