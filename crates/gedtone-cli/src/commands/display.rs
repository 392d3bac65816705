//! Shared human-readable output: the month bar chart and the legend.

use colored::Colorize;
use gedtone_spec::MonthCounts;

/// Widest bar, in characters.
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '#';

/// Bar length for `count`, scaled so `peak` fills [`BAR_WIDTH`].
///
/// Nonzero counts always get at least one character.
pub fn bar_len(count: usize, peak: usize) -> usize {
    if count == 0 || peak == 0 {
        return 0;
    }
    ((count * BAR_WIDTH + peak / 2) / peak).clamp(1, BAR_WIDTH)
}

/// Renders one uncoloured chart row per month, in calendar order.
pub fn chart_rows(counts: &MonthCounts) -> Vec<String> {
    let peak = counts.peak();
    counts
        .iter()
        .map(|(month, count)| {
            let bar: String = std::iter::repeat(BAR_CHAR)
                .take(bar_len(count, peak))
                .collect();
            format!(
                "{} {:<3} {:>5}  {}",
                month.abbrev(),
                month.note_name(),
                count,
                bar
            )
        })
        .collect()
}

/// Prints the month bar chart.
pub fn print_chart(counts: &MonthCounts) {
    println!("\n{}", "Dates per month:".bold());
    for row in chart_rows(counts) {
        println!("  {}", row.cyan());
    }
}

/// Prints the legend explaining how the audio encodes the data.
pub fn print_legend() {
    println!("\n{}", "Legend:".bold());
    println!(
        "  {}",
        "Low notes are early in the year (January = C), high notes late (December = G)."
            .dimmed()
    );
    println!(
        "  {}",
        "The longer a note plays, the more events fall in that month.".dimmed()
    );
}
