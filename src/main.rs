mod input;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use rayon::prelude::*;

use parser::ParsedChart;

#[derive(Parser)]
#[command(name = "chart_parser", about = "Extract structured fields from chart text-layer dumps")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full report per chart: fields, sections, annotated transcript
    Report {
        /// Chart dump files (JSON, one document each)
        files: Vec<PathBuf>,
        /// Reference date for the age computation (YYYY-MM-DD, default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Bold-boundary sections of one chart
    Sections { file: PathBuf },
    /// Annotated sentence transcript of one chart
    Transcript { file: PathBuf },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { files, today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let parsed: Vec<Result<ParsedChart>> = files
                .par_iter()
                .map(|file| input::load(file).map(|doc| parser::process_document(&doc)))
                .collect();
            for (file, outcome) in files.iter().zip(parsed) {
                let chart = outcome?;
                println!("\nParsing {}...", file.display());
                print_report(&chart, today);
            }
            Ok(())
        }
        Commands::Sections { file } => {
            let doc = input::load(&file)?;
            print_sections(&parser::process_document(&doc));
            Ok(())
        }
        Commands::Transcript { file } => {
            let doc = input::load(&file)?;
            print_transcript(&parser::process_document(&doc));
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn print_report(parsed: &ParsedChart, today: NaiveDate) {
    let chart = &parsed.chart;
    println!("Name: {}", chart.name.as_deref().unwrap_or("-"));
    println!(
        "DOB:  {}",
        chart
            .date_of_birth
            .map(|d| d.format("%m/%d/%Y").to_string())
            .unwrap_or_else(|| "-".into())
    );
    match chart.age_on(today) {
        Ok(age) => println!("Age:  {}", age),
        Err(e) => println!("Age:  unavailable ({})", e),
    }
    println!("EKG valid: {}", chart.has_valid_ekg);
    println!("----------------------------");
    print_sections(parsed);
    println!("----------------------------");
    print_transcript(parsed);
}

fn print_sections(parsed: &ParsedChart) {
    for (i, section) in parsed.sections.iter().enumerate() {
        println!("{}: {}", i + 1, section.text());
    }
}

fn print_transcript(parsed: &ParsedChart) {
    for line in &parsed.transcript {
        match line.section_number {
            Some(n) => println!("{}. {}", n, line.text),
            None => println!("{}", line.text),
        }
    }
}
