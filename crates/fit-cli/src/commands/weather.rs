use anyhow::Result;
use fit_config::Config;
use fit_weather::WeatherClient;

pub async fn handle(coordinates: Option<(f64, f64)>, config: &Config) -> Result<()> {
    let (latitude, longitude) = coordinates.unwrap_or((
        config.weather.default_latitude,
        config.weather.default_longitude,
    ));

    let client = WeatherClient::new(&config.weather.api_url)?;
    let reading = client.fetch_weather(latitude, longitude).await;

    println!("{}", reading.headline());
    if let Some(name) = &reading.location_name {
        println!("  Location: {}", name);
    }
    println!("  Humidity: {}%", reading.humidity);
    println!("  Wind: {} km/h", reading.wind_speed);
    println!("  {}", if reading.is_day { "Daytime" } else { "Night" });

    Ok(())
}
