//! Stats command implementation
//!
//! Reports month extraction statistics without synthesizing audio.

use anyhow::{Context, Result};
use colored::Colorize;
use gedtone_spec::{extract::decode_lossy, extract_with_stats, ExtractStats, MonthCounts};
use std::path::Path;
use std::process::ExitCode;

use super::display;
use super::json_output::{
    counts_to_json, input_error_to_json, to_pretty, LineStatsJson, StatsOutput, StatsResult,
};
use crate::input::{load_input, LoadedInput};

/// Extraction results for one file.
#[derive(Debug)]
pub struct FileStats {
    /// Per-month counts
    pub counts: MonthCounts,
    /// Line diagnostics
    pub lines: ExtractStats,
}

/// Extracts months from a loaded file.
pub fn collect(input: &LoadedInput) -> FileStats {
    let (months, lines) = extract_with_stats(&decode_lossy(&input.bytes));
    FileStats {
        counts: months.counts(),
        lines,
    }
}

/// Run the stats command
///
/// # Returns
/// Exit code: 0 on success, 1 if the file cannot be read
pub fn run(input_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        return run_json(input_path);
    }

    println!("{} {}", "Scanning:".cyan().bold(), input_path);

    let input = load_input(Path::new(input_path))
        .with_context(|| format!("Failed to load input file: {}", input_path))?;
    let stats = collect(&input);

    println!(
        "{} {} line(s), {} DATE line(s), {} without a month",
        "Lines:".dimmed(),
        stats.lines.lines,
        stats.lines.date_lines,
        stats.lines.unmatched_date_lines
    );

    if stats.counts.total() == 0 {
        println!(
            "\n{} No recognizable dates found in the file.",
            "WARNING".yellow().bold()
        );
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "\n{} Found {} date(s) in total.",
        "SUCCESS".green().bold(),
        stats.counts.total()
    );
    display::print_chart(&stats.counts);

    Ok(ExitCode::SUCCESS)
}

fn run_json(input_path: &str) -> Result<ExitCode> {
    let input = match load_input(Path::new(input_path)) {
        Ok(input) => input,
        Err(e) => {
            let output = StatsOutput::failure(vec![input_error_to_json(&e)]);
            println!("{}", to_pretty(&output));
            return Ok(ExitCode::from(1));
        }
    };

    let stats = collect(&input);
    let output = StatsOutput::success(StatsResult {
        input: input_path.to_string(),
        source_hash: input.source_hash,
        total: stats.counts.total(),
        counts: counts_to_json(&stats.counts),
        lines: LineStatsJson::from(&stats.lines),
    });
    println!("{}", to_pretty(&output));
    Ok(ExitCode::SUCCESS)
}
