// Integration test comparing exact and greedy assignment quality as the
// instance grows, with a chart of the results
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_harvest::models::Profit;
use route_harvest::AssignmentSolver;
use std::error::Error;

const INSTANCES_PER_SIZE: usize = 30;

#[test]
fn test_exact_vs_greedy_scaling() -> Result<(), Box<dyn Error>> {
    let sizes = [2, 3, 4, 5, 6];
    let output_path = "assignment_quality_comparison.png";

    let solver = AssignmentSolver::new();
    let mut rng = StdRng::seed_from_u64(2024);

    println!("=== Comparing Exact vs. Greedy Assignment Quality ===");

    let mut average_ratios = Vec::new();

    for &size in &sizes {
        let mut exact_total: i64 = 0;
        let mut greedy_total: i64 = 0;
        let mut worst_ratio = 1.0f64;

        for _ in 0..INSTANCES_PER_SIZE {
            let matrix: Vec<Vec<Profit>> = (0..size)
                .map(|_| (0..size).map(|_| rng.gen_range(0..100)).collect())
                .collect();

            let exact = solver.exact_assignment(&matrix);
            let greedy = solver.greedy_assignment(&matrix);

            assert!(greedy.total_profit <= exact.total_profit);
            exact_total += exact.total_profit;
            greedy_total += greedy.total_profit;

            if exact.total_profit > 0 {
                let ratio = greedy.total_profit as f64 / exact.total_profit as f64;
                if ratio < worst_ratio {
                    worst_ratio = ratio;
                }
            }
        }

        let average_ratio = greedy_total as f64 / exact_total as f64;
        average_ratios.push((size, average_ratio));

        println!(
            "Size {}x{}: exact total = {}, greedy total = {}, avg ratio = {:.3}, worst ratio = {:.3}",
            size, size, exact_total, greedy_total, average_ratio, worst_ratio
        );

        // The greedy heuristic for maximum-weight matching is 1/2-approximate
        assert!(worst_ratio >= 0.5);
    }

    draw_quality_chart(output_path, &average_ratios)?;
    println!("Chart written to {}", output_path);

    Ok(())
}

fn draw_quality_chart(
    output_path: &str,
    average_ratios: &[(usize, f64)],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_size = average_ratios
        .iter()
        .map(|&(size, _)| size)
        .max()
        .unwrap_or(2);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Greedy / Exact Assignment Profit Ratio",
            ("sans-serif", 30).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(1usize..(max_size + 1), 0.0f64..1.05f64)?;

    chart
        .configure_mesh()
        .x_desc("Instance size (n x n)")
        .y_desc("Average profit ratio")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            average_ratios.iter().map(|&(size, ratio)| (size, ratio)),
            &BLUE,
        ))?
        .label("greedy / exact")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart.draw_series(
        average_ratios
            .iter()
            .map(|&(size, ratio)| Circle::new((size, ratio), 4, BLUE.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
