use forecast_sales::data::SalesTable;
use forecast_sales::pipeline::run_forecast;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Sales: Basic Report Example");
    println!("====================================\n");

    // Build a small sales table in memory
    println!("Creating sample data...");
    let table = SalesTable::from_records(
        vec![
            "Snacks", "Dairy", "Baking", "Snacks", "Dairy", "Soda", "Baking", "Soda",
        ],
        vec![120.0, 80.5, 60.25, 130.0, 85.0, 42.0, 58.5, 47.25],
    )?;
    println!("Sample data created: {} records\n", table.len());

    // Run the full pipeline
    println!("Forecasting and assembling the report...");
    let summary = run_forecast(&table, "demo_sales_report.html")?;

    println!(
        "Report written to {} ({} forecast point(s), {} panel(s))",
        summary.artifact.display(),
        summary.forecast_points,
        summary.rendered_panels
    );

    if !summary.skipped_panels.is_empty() {
        println!("Skipped panels: {:?}", summary.skipped_panels);
    }

    println!("\nOpen the file in a browser to view the gallery.");
    Ok(())
}
