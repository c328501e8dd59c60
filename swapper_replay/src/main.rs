use std::fs;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod scenario;
mod store;

use cli::Args;
use scenario::{replay, ReplayReport, Scenario};
use store::JsonConfigStore;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::init();

    let scenario = Scenario::from_json_file(&args.scenario)?;
    let store = Arc::new(JsonConfigStore::from_json_file(args.store.as_deref())?);
    let report = replay(scenario, store.clone())
        .with_context(|| format!("replaying {}", args.scenario.display()))?;

    print_report(&report, args.verbose);

    if let Some(path) = args.report_json.as_ref() {
        let json = serde_json::to_string_pretty(&report)
            .context("failed to serialize replay report")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write replay report: {}", path.display()))?;
        println!("Replay report written to {}", path.display());
    }

    store.save()?;
    Ok(())
}

fn print_report(report: &ReplayReport, verbose: bool) {
    println!(
        "{} step(s), {} swap(s), {} item cache reset(s)",
        report.steps.len(),
        report.total_swaps,
        report.cache_resets
    );
    if verbose {
        for step in &report.steps {
            let mut line = format!("  #{:<3} {:<14}", step.step, step.event);
            if let Some(outcome) = &step.outcome {
                line.push_str(&format!(" {outcome}"));
            }
            if let Some(change) = &step.change {
                line.push_str(&format!(" ({change})"));
            }
            println!("{line}");
            for (position, entry) in step.menu.iter().enumerate() {
                println!("        {position:>2}. {} {}", entry.option, entry.target);
            }
        }
    }
    for (key, index) in &report.overrides {
        println!("override {key} = {index}");
    }
    if verbose {
        for (item, option) in &report.shift_click {
            println!("shift-click {item}: {option}");
        }
    }
}
