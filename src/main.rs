//! CLI for generating a sales prediction report from a CSV table

use clap::Parser;
use forecast_sales::data::DataLoader;
use forecast_sales::pipeline::run_forecast;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "forecast-sales",
    version,
    about = "Forecast sales one step ahead per category and assemble an HTML report"
)]
struct Args {
    /// Path to the input CSV table (needs a numeric sales column and an
    /// item-type column)
    input: PathBuf,

    /// Where to write the report artifact
    #[arg(short, long, default_value = "sales_report.html")]
    output: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let table = match DataLoader::from_csv(&args.input) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match run_forecast(&table, &args.output) {
        Ok(summary) => {
            for index in &summary.skipped_panels {
                eprintln!("warning: panel {} was skipped", index);
            }
            println!("{}", summary.artifact.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
