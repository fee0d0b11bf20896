use climate_data::insights::{summarize_co2, summarize_extreme_events, summarize_temperature};
use climate_data::{ClimateDataLoader, ClimateFrameFilterExt, ClimateDataError};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ClimateDataError> {
    env_logger::init();

    // no network: every table comes from the seeded synthesizers
    let data = ClimateDataLoader::builder().offline(true).build().load_all().await;

    if let Some(summary) = summarize_temperature(&data.temperature) {
        println!("Temperature anomaly: {:?}", summary);
    }
    if let Some(summary) = summarize_co2(&data.co2) {
        println!("CO2 ppm: {:?}", summary);
    }
    if let Some((events, losses)) = summarize_extreme_events(&data.extreme_events) {
        println!("Extreme events: {:?}", events);
        println!("Economic loss (billions): {:?}", losses);
    }

    let nineties = data.extreme_events.to_lazy()?.filter_years(1990, 1999).collect()?;
    println!("Extreme events in the 1990s:\n{}", nineties);

    Ok(())
}
