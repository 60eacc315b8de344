use route_harvest::models::{DayEvent, SolverConfig};
use route_harvest::utils::events_io::{load_contest_days, write_daily_profits};
use route_harvest::{AssignmentSolver, Collector, ContestSolver, Depot};

fn main() {
    let days_path = "data/contest_days.txt";
    let report_path = "daily_profits.json";

    // Load the contest event sequence, falling back to a built-in sample
    let days = match load_contest_days(days_path) {
        Ok(days) => {
            println!("Loaded {} event rows from {}", days.len(), days_path);
            days
        }
        Err(e) => {
            println!("Could not read {} ({}), using the built-in sample", days_path, e);
            vec![
                vec![5],
                vec![1, 20],
                vec![2, 30, 40],
                vec![1, 40],
                vec![2, 15, 20],
                vec![2, 50, 5],
            ]
        }
    };

    let solver = ContestSolver::new();
    let results = match solver.solve(&days) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Contest run aborted: {}", e);
            eprintln!("Reduce the depot count or raise max_tour_depots in the configuration");
            return;
        }
    };

    println!("\nContest results ({} days):", results.len());
    println!("------------------------------------------");
    for (day, profit) in results.iter().enumerate() {
        let event = days
            .get(day + 1)
            .and_then(|row| DayEvent::parse(row));
        let description = match event {
            Some(DayEvent::AddCollector { position }) => {
                format!("collector arrives at {}", position)
            }
            Some(DayEvent::AddDepot { position, reward }) => {
                format!("depot opens at {} with reward {}", position, reward)
            }
            None => "no usable event".to_string(),
        };
        println!("Day {}: {} -> best profit {}", day + 1, description, profit);
    }

    match write_daily_profits(report_path, &results) {
        Ok(_) => println!("\nPer-day results written to {}", report_path),
        Err(e) => println!("\nFailed to write {}: {}", report_path, e),
    }

    // Single-stop round: the same population, one depot per collector at most
    let mut collectors = Vec::new();
    let mut depots = Vec::new();
    for row in days.iter().skip(1) {
        match DayEvent::parse(row) {
            Some(DayEvent::AddCollector { position }) => {
                collectors.push(Collector::new(collectors.len() as u32, position));
            }
            Some(DayEvent::AddDepot { position, reward }) => {
                depots.push(Depot::new(depots.len() as u32, position, reward));
            }
            None => {}
        }
    }

    let config = SolverConfig::default();
    let assignment_solver = AssignmentSolver::with_config(config);
    let assignment = assignment_solver.assign(&collectors, &depots);

    println!("\nSingle-stop assignment ({} collectors, {} depots):", collectors.len(), depots.len());
    println!("------------------------------------------");
    if assignment.is_empty() {
        println!("No profitable pairing exists; nobody moves.");
    } else {
        let mut pairs: Vec<(usize, usize)> = assignment
            .pairs
            .iter()
            .map(|(&c, &d)| (c, d))
            .collect();
        pairs.sort();

        for (c, d) in pairs {
            println!(
                "Collector {} (at {}) -> depot {} (at {}, reward {})",
                collectors[c].id,
                collectors[c].current_position(),
                depots[d].id,
                depots[d].position,
                depots[d].reward
            );
        }
        println!("Total assignment profit: {}", assignment.total_profit);
    }
}
