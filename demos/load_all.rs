use climate_data::{insights, ClimateDataError, ClimateDataLoader};
use std::env;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClimateDataError> {
    // Set RUST_LOG=info to see which datasets were downloaded and which were simulated
    env_logger::init();
    configure_polars_display();

    let loader = ClimateDataLoader::default();
    let data = loader.load_all().await;

    println!(
        "Temperature ({}):\n{}",
        data.provenance.temperature,
        data.temperature.to_dataframe()?.tail(Some(5))
    );
    println!(
        "CO2 ({}):\n{}",
        data.provenance.co2,
        data.co2.to_dataframe()?.tail(Some(5))
    );
    println!(
        "Extreme events ({}):\n{}",
        data.provenance.extreme_events,
        data.extreme_events.to_dataframe()?.tail(Some(5))
    );

    let warming = insights::total_warming(&data.temperature)?;
    println!(
        "Total warming: {:.2}°C (latest anomaly {:.2}°C)",
        warming.change, warming.latest
    );
    if let Some(recent) = insights::warming_since(&data.temperature, 2000) {
        println!("Warming since 2000: {:.2}°C", recent.change);
    }
    let co2 = insights::co2_increase(&data.co2)?;
    println!("CO2: {:.1} ppm (+{:.1} ppm)", co2.latest, co2.change);

    match insights::temperature_co2_correlation(&data.temperature, &data.co2) {
        Ok(r) => println!("Temperature/CO2 correlation: {:.3}", r),
        Err(e) => println!("Correlation unavailable: {}", e),
    }

    Ok(())
}

fn configure_polars_display() {
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
