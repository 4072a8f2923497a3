//! Hallway localization demo.
//!
//! Runs the reference four-position scenario with narration enabled and
//! renders each step's predicted and corrected beliefs as text bar
//! charts, highlighting the most probable position. Finishes by dumping
//! the full history as JSON.
//!
//! Run with: RUST_LOG=info cargo run --example hallway

use beliefgrid::reporter::ConsoleReporter;
use beliefgrid::scenario::HallwayScenario;
use beliefgrid::StepRecord;
use nalgebra::DVector;

const BAR_WIDTH: usize = 40;

fn render_bars(title: &str, labels: &[String], belief: &DVector<f64>) {
    println!("{}", title);
    let best = beliefgrid::common::utils::argmax(belief);
    for (i, p) in belief.iter().enumerate() {
        let width = (p * BAR_WIDTH as f64).round() as usize;
        let marker = if i == best { '*' } else { ' ' };
        println!(
            "  {} {} {:<width$} {:.4}",
            labels[i],
            marker,
            "#".repeat(width),
            p,
            width = BAR_WIDTH
        );
    }
}

fn render_record(record: &StepRecord, labels: &[String]) {
    if let Some(predicted) = &record.predicted {
        render_bars(
            &format!("bel_bar(x{})", record.timestep),
            labels,
            predicted,
        );
    }
    render_bars(&format!("bel(x{})", record.timestep), labels, &record.belief);
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let scenario = HallwayScenario::default();
    let labels = scenario.position_labels();

    let mut filter = scenario.build_filter()?;
    let mut reporter = ConsoleReporter::new();
    let history = filter.run_with_reporter(&scenario.readings(), &mut reporter)?;

    for record in history.records() {
        render_record(record, &labels);
    }

    println!("{}", serde_json::to_string_pretty(history)?);
    Ok(())
}
