//! Scale command implementation
//!
//! Prints the fixed month to note mapping.

use anyhow::Result;
use colored::Colorize;
use gedtone_spec::Month;
use std::process::ExitCode;

use super::json_output::{to_pretty, MonthCountJson, ScaleOutput};

/// Run the scale command
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = ScaleOutput {
            months: Month::ALL.iter().map(|&m| MonthCountJson::new(m, 0)).collect(),
        };
        println!("{}", to_pretty(&output));
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Month to note mapping:".bold());
    for month in Month::ALL {
        println!(
            "  {} {}  {}",
            month.abbrev().cyan(),
            format!("{:<3}", month.note_name()).green(),
            format!("{:>7.2} Hz", month.frequency()).dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}
