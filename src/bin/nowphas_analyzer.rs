//! nowphas-analyzer - wave frequency distribution report for a directory of
//! NOWPHAS wave data files.

use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use nowphas::report::FILE_NAME;
use nowphas::ReportConfig;

#[derive(Parser)]
#[command(
    name = "nowphas-analyzer",
    version,
    about = "NOWPHAS wave frequency distribution report"
)]
struct Cli {
    /// Path of the directory containing NOWPHAS data files
    dirpath: PathBuf,

    /// Output workbook path
    #[arg(short, long, default_value = FILE_NAME)]
    output: PathBuf,

    /// Also print the computed tables as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Local::now();
    println!("start: {}", start.format("%Y-%m-%d %H:%M:%S"));

    let config = ReportConfig {
        output: cli.output,
        ..ReportConfig::default()
    };
    let report = nowphas::nowphas_analyzer(&cli.dirpath, &config)?;

    if cli.json {
        println!("{}", report.to_json()?);
    }

    let end = Local::now();
    println!("end: {}", end.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "elapsed: {:.3} s",
        (end - start).num_milliseconds() as f64 / 1000.0
    );
    Ok(())
}
