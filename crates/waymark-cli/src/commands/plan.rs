//! Plan command implementation
//!
//! Prints the exact per-station allocation without drawing anything.

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;
use waymark_backend_metadata::{plan_allocation, AllocationPlan};
use waymark_spec::{validate_config, CollectionConfig, MemberKind};

use super::reporting;
use super::EXIT_CONFIG_ERROR;
use crate::input::load_config;

/// One station row of the plan output.
#[derive(Debug, Serialize)]
pub struct PlanRow {
    pub station: u32,
    pub name: String,
    pub hybrid: u32,
    pub human: u32,
    pub creature: u32,
    pub total: u32,
}

/// Plan output for `--json`.
#[derive(Debug, Serialize)]
pub struct PlanOutput {
    pub collection: String,
    pub total: u32,
    pub stations: Vec<PlanRow>,
}

impl PlanOutput {
    /// Builds the output from a plan and its configuration.
    pub fn new(config: &CollectionConfig, plan: &AllocationPlan) -> Self {
        let stations = plan
            .stations
            .iter()
            .map(|s| PlanRow {
                station: s.station,
                name: config
                    .station(s.station)
                    .map(|st| st.name.clone())
                    .unwrap_or_default(),
                hybrid: s.count(MemberKind::Hybrid),
                human: s.count(MemberKind::Human),
                creature: s.count(MemberKind::Creature),
                total: s.total(),
            })
            .collect();
        Self {
            collection: config.collection.name.clone(),
            total: plan.total(),
            stations,
        }
    }
}

/// Run the plan command
///
/// # Returns
/// Exit code: 0 on success, 1 if the configuration is invalid
pub fn run(config_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let label = config_path.unwrap_or("builtin");
    let loaded = load_config(config_path.map(Path::new))
        .with_context(|| format!("Failed to load config: {}", label))?;

    let result = validate_config(&loaded.config);
    if !result.is_ok() {
        if json_output {
            let messages: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
            println!("{}", serde_json::to_string_pretty(&messages)?);
        } else {
            reporting::print_validation_results(&result);
        }
        return Ok(ExitCode::from(EXIT_CONFIG_ERROR));
    }

    let config = &loaded.config;
    let plan = plan_allocation(&config.allocation, config.collection.size, &config.stations)?;
    let output = PlanOutput::new(config, &plan);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_table(&output);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_table(output: &PlanOutput) {
    println!("{} {}", "Allocation:".cyan().bold(), output.collection);
    println!(
        "  {:>3}  {:<28} {:>6} {:>6} {:>8} {:>6}",
        "id", "station", "hybrid", "human", "creature", "total"
    );
    for row in &output.stations {
        println!(
            "  {:>3}  {:<28} {:>6} {:>6} {:>8} {:>6}",
            row.station, row.name, row.hybrid, row.human, row.creature, row.total
        );
    }
    println!("\n{} {} members", "Total:".bold(), output.total);
}
