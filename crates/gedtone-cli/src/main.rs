//! gedtone CLI - turn the dates in a genealogy file into music
//!
//! This binary provides commands for rendering GEDCOM files to WAV audio,
//! inspecting extraction statistics, and listing the month to note scale.

use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use gedtone_cli::commands;
use gedtone_cli::commands::render::RenderOptions;
use gedtone_cli::logging;

/// gedtone - Genealogy Date Sonification
#[derive(Parser)]
#[command(name = "gedtone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase diagnostic output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the dates in a genealogy file to a WAV file
    Render {
        /// Path to the genealogy file (.ged)
        #[arg(short, long)]
        input: String,

        /// Output WAV path (default: <input>.wav)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a JSON file with synthesis parameters
        #[arg(short, long)]
        config: Option<String>,

        /// Note duration in seconds (recommended 0.05-0.5)
        #[arg(long)]
        note_duration: Option<f64>,

        /// Amplitude before normalization (recommended 0.1-1.0)
        #[arg(long)]
        amplitude: Option<f64>,

        /// Play order
        #[arg(long, default_value = "chronological", value_parser = ["chronological", "shuffled"])]
        policy: String,

        /// Seed for shuffled order (default: random, reported in the output)
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Show month extraction statistics without rendering audio
    Stats {
        /// Path to the genealogy file (.ged)
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the month to note mapping
    Scale {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            config,
            note_duration,
            amplitude,
            policy,
            seed,
            json,
        } => commands::render::run(
            &RenderOptions {
                input: &input,
                output: output.as_deref(),
                config: config.as_deref(),
                note_duration,
                amplitude,
                policy: &policy,
                seed,
            },
            json,
        ),
        Commands::Stats { input, json } => commands::stats::run(&input, json),
        Commands::Scale { json } => commands::scale::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from([
            "gedtone",
            "render",
            "--input",
            "tree.ged",
            "--policy",
            "shuffled",
            "--seed",
            "42",
            "--note-duration",
            "0.2",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                input,
                output,
                policy,
                seed,
                note_duration,
                amplitude,
                json,
                ..
            } => {
                assert_eq!(input, "tree.ged");
                assert_eq!(output, None);
                assert_eq!(policy, "shuffled");
                assert_eq!(seed, Some(42));
                assert_eq!(note_duration, Some(0.2));
                assert_eq!(amplitude, None);
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_render_defaults_to_chronological() {
        let cli = Cli::try_parse_from(["gedtone", "render", "-i", "tree.ged"]).unwrap();
        match cli.command {
            Commands::Render { policy, .. } => assert_eq!(policy, "chronological"),
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        let result =
            Cli::try_parse_from(["gedtone", "render", "-i", "tree.ged", "--policy", "random"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_counts_verbosity() {
        let cli = Cli::try_parse_from(["gedtone", "-vv", "scale"]).unwrap();
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["gedtone", "stats", "-i", "a.ged", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_cli_parses_scale_json() {
        let cli = Cli::try_parse_from(["gedtone", "scale", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Scale { json: true }));
    }
}
