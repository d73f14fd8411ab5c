mod logging;

use std::fmt::Display;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use falak_base::{ALIGNMENT_TOLERANCE_DEG, BaseError};
use falak_rs::{
    CalendarDate, ClockTime, DEFAULT_COORDINATE, Falak, FalakConfig, FalakError,
    FamilyComposition, GeoCoordinate, QiblaBearing, UtcTime, deg_to_dms, format_clock,
    indonesian_timezone, is_aligned, parse_dms, sun_position_for_date,
};
use falak_time::{TimeError, wrap_hours};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "falak", about = "Prayer times, qibla, istiwa and Faraid calculator")]
struct Cli {
    /// TOML configuration (reference point, prayer parameters, cities)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where to compute: a named city or explicit coordinates.
#[derive(clap::Args, Debug, Clone)]
struct LocationArgs {
    /// City from the configured table (overrides --lat/--lon)
    #[arg(long)]
    city: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Elevation in meters
    #[arg(long, default_value = "0")]
    elevation: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Solar declination and equation of time for a date
    Sun {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: CalendarDate,
    },
    /// Daily prayer schedule
    Schedule {
        #[command(flatten)]
        location: LocationArgs,
        /// UTC offset in hours (default: city timezone, else Indonesian zone from longitude)
        #[arg(long, allow_hyphen_values = true)]
        tz: Option<f64>,
        /// Date (YYYY-MM-DD), default today at the location
        #[arg(long)]
        date: Option<CalendarDate>,
        /// Also report the next prayer after this local time (HH:MM)
        #[arg(long)]
        after: Option<ClockTime>,
    },
    /// Qibla bearing from a location
    Qibla {
        #[command(flatten)]
        location: LocationArgs,
        /// Compass heading to check against the bearing, in degrees
        #[arg(long)]
        heading: Option<f64>,
    },
    /// Istiwa (local apparent solar) time
    Istiwa {
        #[command(flatten)]
        location: LocationArgs,
        /// UTC instant (YYYY-MM-DDThh:mm:ssZ), default now
        #[arg(long)]
        time: Option<UtcTime>,
    },
    /// Faraid inheritance shares
    Waris {
        /// Net estate to divide
        #[arg(long)]
        estate: f64,
        /// Husband survives
        #[arg(long)]
        husband: bool,
        /// Wife survives
        #[arg(long)]
        wife: bool,
        /// Father survives
        #[arg(long)]
        father: bool,
        /// Mother survives
        #[arg(long)]
        mother: bool,
        /// Number of sons
        #[arg(long, default_value = "0")]
        sons: u32,
        /// Number of daughters
        #[arg(long, default_value = "0")]
        daughters: u32,
    },
    /// List the configured cities
    Cities,
    /// Convert decimal degrees to D°M'S" or back
    Dms {
        /// Decimal degrees (e.g. 295.146) or D°M'S" text
        #[arg(allow_hyphen_values = true)]
        angle: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Falak(#[from] FalakError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Base(#[from] BaseError),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Usage(String),
}

/// A resolved location with the timezone it implies.
struct Place {
    name: Option<String>,
    coord: GeoCoordinate,
    tz: f64,
}

fn resolve_place(falak: &Falak, args: &LocationArgs) -> Result<Place, CliError> {
    if let Some(name) = &args.city {
        let city = falak.city(name)?;
        return Ok(Place {
            name: Some(city.name.clone()),
            coord: city.coordinate(),
            tz: city.tz,
        });
    }
    let coord = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon, args.elevation),
        (None, None) => {
            tracing::info!("no location given, using default coordinate");
            DEFAULT_COORDINATE
        }
        _ => {
            return Err(CliError::Usage(
                "--lat and --lon must be given together".to_string(),
            ));
        }
    };
    Ok(Place {
        name: None,
        coord,
        tz: indonesian_timezone(coord.longitude_deg),
    })
}

/// Qibla bearing with the optional compass check.
#[derive(Debug, Serialize)]
struct QiblaReport {
    bearing_deg: f64,
    dms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    heading_deg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    aligned: Option<bool>,
}

impl QiblaReport {
    fn new(bearing: QiblaBearing, heading_deg: Option<f64>) -> Self {
        Self {
            bearing_deg: bearing.degrees,
            dms: bearing.to_string(),
            heading_deg,
            aligned: heading_deg
                .map(|h| is_aligned(h, bearing.degrees, ALIGNMENT_TOLERANCE_DEG)),
        }
    }
}

impl Display for QiblaReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dms)?;
        if let (Some(h), Some(aligned)) = (self.heading_deg, self.aligned) {
            let verdict = if aligned { "facing qibla" } else { "not aligned" };
            write!(f, "\nHeading {h:.1}°: {verdict}")?;
        }
        Ok(())
    }
}

/// Current local date and clock time at a UTC offset.
fn local_now(tz_hours: f64) -> Result<(CalendarDate, Option<ClockTime>), CliError> {
    let now = UtcTime::now()?;
    let date = CalendarDate::from_jd(now.to_jd() + tz_hours / 24.0);
    let clock = ClockTime::from_decimal_hours(wrap_hours(now.decimal_hours() + tz_hours));
    Ok((date, clock))
}

fn emit<T: Serialize + Display>(json: bool, value: &T) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CliError> {
    let falak = match &cli.config {
        Some(path) => Falak::from_toml_file(path)?,
        None => Falak::new(FalakConfig::default()),
    };
    let json = cli.json;

    match cli.command {
        Commands::Sun { date } => {
            let sun = sun_position_for_date(date);
            if json {
                println!("{}", serde_json::to_string_pretty(&sun)?);
            } else {
                println!("Date:               {date}");
                println!("Julian Day:         {:.1}", date.to_jd());
                println!("Declination:        {:.4}°", sun.declination_deg);
                println!("Right ascension:    {:.4}°", sun.right_ascension_deg);
                println!("Equation of time:   {:+.2} min", sun.equation_of_time_minutes());
            }
        }

        Commands::Schedule {
            location,
            tz,
            date,
            after,
        } => {
            let place = resolve_place(&falak, &location)?;
            let tz = tz.unwrap_or(place.tz);
            let (date, now) = match date {
                Some(d) => (d, after),
                None => {
                    let (d, clock) = local_now(tz)?;
                    (d, after.or(clock))
                }
            };
            let schedule = falak.prayer_schedule(&place.coord, tz, date)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                let label = place.name.unwrap_or_else(|| {
                    format!("{:.4}, {:.4}", place.coord.latitude_deg, place.coord.longitude_deg)
                });
                println!("{label}  {date}  UTC{tz:+}");
                println!("{schedule}");
                if let Some(next) = now.and_then(|t| schedule.next_prayer(t)) {
                    println!("Next: {} at {}", next, format_clock(schedule.get(next)));
                }
            }
        }

        Commands::Qibla { location, heading } => {
            let place = resolve_place(&falak, &location)?;
            let bearing = falak.qibla_bearing(&place.coord)?;
            emit(json, &QiblaReport::new(bearing, heading))?;
        }

        Commands::Istiwa { location, time } => {
            let place = resolve_place(&falak, &location)?;
            let utc = match time {
                Some(t) => t,
                None => UtcTime::now()?,
            };
            let solar = falak.solar_time(&utc, &place.coord)?;
            emit(json, &solar)?;
        }

        Commands::Waris {
            estate,
            husband,
            wife,
            father,
            mother,
            sons,
            daughters,
        } => {
            let family = FamilyComposition {
                estate,
                husband_alive: husband,
                wife_alive: wife,
                father_alive: father,
                mother_alive: mother,
                sons,
                daughters,
            };
            let distribution = falak.inheritance(&family)?;
            emit(json, &distribution)?;
            if distribution.is_oversubscribed() && !json {
                println!(
                    "Warning: fixed shares total {:.4} of the estate; 'Awl is not applied",
                    distribution.fard_total
                );
            }
        }

        Commands::Cities => {
            if json {
                println!("{}", serde_json::to_string_pretty(falak.cities())?);
            } else {
                for city in falak.cities() {
                    println!(
                        "{:<16} {:>8.2} {:>8.2}  UTC{:+}  {}",
                        city.name,
                        city.lat,
                        city.lon,
                        city.tz,
                        city.qibla.as_deref().unwrap_or("")
                    );
                }
            }
        }

        Commands::Dms { angle } => match angle.trim().parse::<f64>() {
            Ok(deg) => {
                let sign = if deg < 0.0 { "-" } else { "" };
                println!("{sign}{}", deg_to_dms(deg));
            }
            Err(_) => println!("{:.6}", parse_dms(&angle)?),
        },
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
