// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! varnote CLI
//!
//! Command-line interface for classifying curator-authored alteration notation.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use varnote::cli::{output_classification, output_genes, process_input_line, OutputFormat};
use varnote::{classify, fusion_genes, suggest_range_code};

#[derive(Parser)]
#[command(name = "varnote")]
#[command(author, version, about = "Genomic alteration notation classifier")]
#[command(
    long_about = "Classify curator-authored alteration notation into typed consequences.

Examples:
  varnote classify 'V600E'
  varnote classify 'E746_A750del' 'BCR::ABL1' 'Amplification'
  varnote classify -i alterations.txt
  echo 'Truncating mutations' | varnote classify -i -
  varnote classify -f json 'V600{excluding V600E}'
  varnote genes 'EML4-ALK fusion'"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify alteration notation
    Classify {
        /// Alteration strings (e.g. V600E)
        alterations: Vec<String>,

        /// Input file, one alteration per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Extract gene symbols from fusion notation
    Genes {
        /// Alteration strings (e.g. BCR::ABL1)
        alterations: Vec<String>,

        /// Input file, one alteration per line (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            alterations,
            input,
            format,
        } => run_classify(&alterations, input.as_deref(), &format),
        Commands::Genes {
            alterations,
            input,
            format,
        } => run_genes(&alterations, input.as_deref(), &format),
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

/// Collect input lines from positional arguments, a file, or stdin.
fn collect_inputs(alterations: &[String], input: Option<&Path>) -> io::Result<Vec<String>> {
    if !alterations.is_empty() {
        return Ok(alterations.to_vec());
    }

    let reader: Box<dyn BufRead> = match input {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(BufReader::new(io::stdin())),
    };

    let mut inputs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(cleaned) = process_input_line(&line, idx == 0) {
            inputs.push(cleaned.to_string());
        }
    }
    Ok(inputs)
}

fn run_classify(
    alterations: &[String],
    input: Option<&Path>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = format.parse()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for text in collect_inputs(alterations, input)? {
        let alt = classify(&text);
        output_classification(&mut handle, &alt, format)?;

        if alt.consequence.term() == "UNKNOWN" {
            if let Some(suggestion) = suggest_range_code(&text) {
                eprintln!("WARNING: {} - did you mean {}?", text, suggestion);
            }
        }
    }
    handle.flush()?;
    Ok(())
}

fn run_genes(
    alterations: &[String],
    input: Option<&Path>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let format: OutputFormat = format.parse()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for text in collect_inputs(alterations, input)? {
        let genes = fusion_genes(&text);
        output_genes(&mut handle, &text, &genes, format)?;
    }
    handle.flush()?;
    Ok(())
}
