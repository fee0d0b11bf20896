//! Column names of the DataFrame views, as consumed by the dashboard.

pub const YEAR: &str = "Year";
pub const TEMPERATURE_ANOMALY: &str = "Temperature_Anomaly";
pub const CO2_PPM: &str = "CO2_ppm";
pub const EXTREME_EVENTS: &str = "Extreme_Events";
pub const ECONOMIC_LOSS_BILLIONS: &str = "Economic_Loss_Billions";
