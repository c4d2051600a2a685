use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sidera_core::{Sign, TableEphemeris};
use sidera_report::Reporter;
use sidera_search::{AspectClass, ScanConfig};

#[derive(Parser)]
#[command(name = "sidera", about = "Transiting-sky astrology reports")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Current sign and retrograde state of every tracked body
    Positions {
        /// UTC calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the ephemeris table (JSON)
        #[arg(long)]
        table: PathBuf,
    },
    /// Upcoming sign ingresses and retrograde stations
    Transits {
        /// UTC calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the ephemeris table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Scan horizon in days
        #[arg(long, default_value = "28")]
        max_days: u32,
    },
    /// Aspects formed between bodies
    Aspects {
        /// UTC calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the ephemeris table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Use the minor aspect table
        #[arg(long)]
        minor: bool,
    },
    /// Upcoming aspect formations and dissolutions
    AspectTransits {
        /// UTC calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Path to the ephemeris table (JSON)
        #[arg(long)]
        table: PathBuf,
        /// Use the minor aspect table
        #[arg(long)]
        minor: bool,
        /// Scan horizon in days
        #[arg(long, default_value = "28")]
        max_days: u32,
    },
    /// Zodiac sign containing a sidereal longitude
    Zodiac {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
}

fn require_date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_else(|e| {
        eprintln!("Invalid date {text:?}: {e}");
        std::process::exit(1);
    })
}

fn load_reporter(table: &Path) -> Reporter<TableEphemeris> {
    let provider = TableEphemeris::load(table).unwrap_or_else(|e| {
        eprintln!("Failed to load ephemeris table: {e}");
        std::process::exit(1);
    });
    Reporter::new(provider)
}

fn class_for(minor: bool) -> AspectClass {
    if minor {
        AspectClass::Minor
    } else {
        AspectClass::Major
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Positions { date, table } => {
            let reporter = load_reporter(&table);
            match reporter.positions(require_date(&date)) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Transits {
            date,
            table,
            max_days,
        } => {
            let reporter = load_reporter(&table);
            let scan = ScanConfig { max_days };
            match reporter.transits(require_date(&date), &scan) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Aspects { date, table, minor } => {
            let reporter = load_reporter(&table);
            match reporter.aspects(require_date(&date), class_for(minor)) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::AspectTransits {
            date,
            table,
            minor,
            max_days,
        } => {
            let reporter = load_reporter(&table);
            let scan = ScanConfig { max_days };
            match reporter.aspect_transits(require_date(&date), class_for(minor), &scan) {
                Ok(text) => print!("{text}"),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Zodiac { lon } => {
            println!("{}", Sign::from_longitude(lon).name());
        }
    }
}
