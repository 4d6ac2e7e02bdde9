//! Football video analysis CLI
//!
//! Batch front end: analyze an exported detections file, print raw
//! per-frame counts, or ask a keyword question about a finished run.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fv_core::{answer_query, render_summary};

#[derive(Parser)]
#[command(name = "fv_cli")]
#[command(about = "Tactical event analysis over football detection streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis and print the summary
    Analyze {
        /// Detections JSON file (array of frames)
        #[arg(long)]
        input: PathBuf,

        /// Threshold configuration JSON (defaults when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Emit the summary as JSON instead of text
        #[arg(long, default_value = "false")]
        json: bool,

        /// Stop after this many frames (partial summary)
        #[arg(long)]
        max_frames: Option<u64>,
    },

    /// Print raw per-frame detection counts
    Counts {
        /// Detections JSON file (array of frames)
        #[arg(long)]
        input: PathBuf,
    },

    /// Run the analysis and answer one keyword question
    Ask {
        /// Detections JSON file (array of frames)
        #[arg(long)]
        input: PathBuf,

        /// Question text (keywords: players, pass, shot)
        question: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { input, config, json, max_frames } => {
            let config = fv_cli::load_config(config.as_deref())?;
            let summary = fv_cli::analyze_file(&input, &config, max_frames)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", render_summary(&summary));
            }
        }

        Commands::Counts { input } => {
            for (index, count) in fv_cli::frame_counts(&input)? {
                println!("Frame {index}: detected {count} objects");
            }
        }

        Commands::Ask { input, question } => {
            let config = fv_cli::load_config(None)?;
            let summary = fv_cli::analyze_file(&input, &config, None)?;
            println!("{}", answer_query(&summary, &question));
        }
    }

    Ok(())
}
