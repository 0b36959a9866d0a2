use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "skydash")]
#[command(about = "Current conditions, air quality and forecasts in your terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the weather dashboard for a location
    Show {
        #[arg(
            long,
            value_name = "LAT,LON",
            allow_hyphen_values = true,
            conflicts_with_all = ["lat", "lon", "city"],
            help = "Coordinates as \"lat,lon\", e.g. 22.57,88.36"
        )]
        at: Option<String>,

        #[arg(long, allow_hyphen_values = true, requires = "lon", help = "Latitude in degrees")]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true, requires = "lat", help = "Longitude in degrees")]
        lon: Option<f64>,

        #[arg(short, long, conflicts_with = "lat", help = "City to search for, e.g. \"New Delhi\"")]
        city: Option<String>,

        #[arg(long, help = "Print the dashboard as JSON")]
        json: bool,
    },

    /// Search for places by name
    Search {
        /// Place name, e.g. "Kolkata"
        query: String,
    },

    /// Describe an air quality index code (1-5)
    Aqi {
        #[arg(allow_hyphen_values = true)]
        code: i64,
    },
}
