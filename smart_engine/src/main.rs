#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** smart_engine **
//! Loads a SmartAI data directory and reports what survived validation.

use smart_engine::data_paths::{config_path, data_path};
use smart_engine::{LoadReport, SMART_ENGINE_VERSION, SmartData, load_config, load_smart_data};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::fs;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading SmartAI data...");
    let config = load_config(&config_path());
    let data = load_smart_data(&config).context("while loading SmartAI data")?;
    info!("SmartAI data loaded successfully.");

    print_summary(&data);

    if let Some(report_file) = &config.report_file {
        let path = data_path(report_file);
        let json = serde_json::to_string_pretty(&data.report).context("while serializing load report")?;
        fs::write(&path, json).with_context(|| format!("writing load report to '{}'", path.display()))?;
        println!("report written to {}", path.display().to_string().underline());
    }
    Ok(())
}

fn print_summary(data: &SmartData) {
    println!(
        "{} {}",
        "SMART ENGINE".bright_yellow().underline(),
        SMART_ENGINE_VERSION.dimmed()
    );
    println!(
        "{:>10} paths, {} points, {} gaps",
        data.waypoint_report.paths.to_string().bold(),
        data.waypoint_report.points,
        gap_count(data)
    );
    print_rules(&data.report);
}

fn gap_count(data: &SmartData) -> String {
    let gaps = data.waypoint_report.gaps.len();
    if gaps == 0 {
        gaps.to_string().green().to_string()
    } else {
        gaps.to_string().yellow().to_string()
    }
}

fn print_rules(report: &LoadReport) {
    println!(
        "{:>10} entities, {} rules",
        report.entities.to_string().bold(),
        report.rules
    );
    if report.rejected.is_empty() {
        println!("{:>10}", "no rows rejected".green());
    } else {
        println!("{:>10} rows rejected", report.rejected.len().to_string().bright_red());
        for diag in &report.rejected {
            println!("  {} {diag}", "x".red());
        }
    }
    if !report.warnings.is_empty() {
        println!("{:>10} warnings", report.warnings.len().to_string().yellow());
        for diag in &report.warnings {
            println!("  {} {diag}", "!".yellow());
        }
    }
}
