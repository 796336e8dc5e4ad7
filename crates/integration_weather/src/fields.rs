//! Fixed Open-Meteo field sets requested by the dashboard

use domain::FieldGroup;

/// Forecast `current` block
pub const FORECAST_CURRENT: FieldGroup = FieldGroup::new(&[
    "temperature_2m",
    "relative_humidity_2m",
    "apparent_temperature",
    "wind_speed_10m",
    "is_day",
    "weather_code",
]);

/// Forecast `hourly` block
pub const FORECAST_HOURLY: FieldGroup = FieldGroup::new(&[
    "temperature_2m",
    "apparent_temperature",
    "precipitation",
    "rain",
    "snowfall",
    "cloud_cover",
    "wind_speed_10m",
    "weather_code",
]);

/// Forecast `daily` block
pub const FORECAST_DAILY: FieldGroup = FieldGroup::new(&[
    "temperature_2m_max",
    "temperature_2m_min",
    "sunrise",
    "sunset",
    "uv_index_max",
    "precipitation_sum",
    "weather_code",
]);

/// Air quality `hourly` block
pub const AIR_QUALITY_HOURLY: FieldGroup = FieldGroup::new(&[
    "pm10",
    "pm2_5",
    "carbon_monoxide",
    "nitrogen_dioxide",
    "sulphur_dioxide",
    "ozone",
    "uv_index",
]);
