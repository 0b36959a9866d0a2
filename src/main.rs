mod cli;
mod render;

use anyhow::Result;
use clap::Parser;
use skydash_core::{AppError, Config, ConfigError, UiConfig};
use skydash_weather::{aqi_label, Location, WeatherError, WeatherProvider};

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    skydash_core::init(level)?;

    if let Err(err) = run(cli).await {
        if let Some(app_err) = err.downcast_ref::<AppError>() {
            eprintln!("{}", app_err.user_message());
        }
        return Err(err);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Show {
            at,
            lat,
            lon,
            city,
            json,
        } => show(at.as_deref(), lat, lon, city, json).await?,
        Commands::Search { query } => search(&query).await?,
        Commands::Aqi { code } => aqi(code)?,
    }

    Ok(())
}

/// Where `show` gets its weather from
#[derive(Debug, PartialEq)]
enum Target {
    Coordinates(Location),
    City(String),
}

/// Pick the location source: coordinates, then `--city`, then the configured
/// default city. Blank city names are skipped.
fn choose_target(
    at: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    ui: &UiConfig,
) -> Result<Target, AppError> {
    if let Some(at) = at {
        let location = Location::parse(at).map_err(WeatherError::from)?;
        return Ok(Target::Coordinates(location));
    }

    if let (Some(lat), Some(lon)) = (lat, lon) {
        let location = Location::new(lat, lon).map_err(WeatherError::from)?;
        return Ok(Target::Coordinates(location));
    }

    let named = |name: Option<String>| {
        name.map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
    };

    named(city)
        .or_else(|| named(ui.default_city.clone()))
        .map(Target::City)
        .ok_or_else(|| {
            ConfigError::MissingSetting(
                "location: pass --at, --lat/--lon or --city, or set ui.default_city".to_string(),
            )
            .into()
        })
}

fn load_config() -> Result<Config, AppError> {
    let (config, _) = Config::load_validated()
        .map_err(|e| ConfigError::Invalid(format!("{:#}", e)))?;
    Ok(config)
}

async fn show(
    at: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    json: bool,
) -> Result<(), AppError> {
    let config = load_config()?;
    let target = choose_target(at, lat, lon, city, &config.ui)?;
    let provider = WeatherProvider::new(&config.weather)?;

    let location = match target {
        Target::Coordinates(location) => location,
        Target::City(city) => provider.resolve_city(&city).await?,
    };

    tracing::info!("Updating weather for {}, {}", location.latitude, location.longitude);
    let dashboard = provider.fetch_dashboard(&location).await?;

    if json {
        let out = serde_json::to_string_pretty(&dashboard).map_err(anyhow::Error::from)?;
        println!("{}", out);
    } else {
        print!("{}", render::dashboard(&dashboard));
    }

    Ok(())
}

async fn search(query: &str) -> Result<(), AppError> {
    let config = load_config()?;
    let provider = WeatherProvider::new(&config.weather)?;
    let places = provider.search(query).await?;
    print!("{}", render::places(&places));
    Ok(())
}

fn aqi(code: i64) -> Result<(), AppError> {
    let label = aqi_label(code).map_err(WeatherError::from)?;
    println!("{} ({})", label.level, code);
    println!("{}", label.message);
    Ok(())
}
