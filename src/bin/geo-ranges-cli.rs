use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use geo_ranges::logging::init_logging;
use geo_ranges::{
    decode_geohash, distance_meters, encode_geohash, plan_query, GeoPoint, GeoRangesConfig,
};
use std::error::Error as StdError;
use tracing::Level;

type CliResult = Result<(), Box<dyn StdError>>;

/// Geohash range CLI
///
/// Computes the key ranges that cover a radius query, and encodes/decodes
/// individual geohashes.
fn main() {
    let matches = create_cli().get_matches();

    if let Err(e) = run_command(matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn coordinate_arg(name: &'static str, help: &'static str, index: usize) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(index)
        .allow_negative_numbers(true)
        .value_parser(value_parser!(f64))
}

fn create_cli() -> Command {
    Command::new("geo-ranges-cli")
        .about("Geohash key ranges for radius queries")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(Arg::new("config")
            .help("JSON configuration file")
            .long("config")
            .global(true))
        .arg(Arg::new("verbose")
            .help("Enable debug logging")
            .long("verbose")
            .short('v')
            .global(true)
            .action(ArgAction::SetTrue))
        .subcommand(
            Command::new("ranges")
                .about("Compute the key ranges covering a circle")
                .arg(coordinate_arg("lat", "Center latitude", 1))
                .arg(coordinate_arg("lon", "Center longitude", 2))
                .arg(coordinate_arg("radius", "Radius in meters", 3))
                .arg(Arg::new("format")
                    .help("Output format")
                    .long("format")
                    .value_parser(["text", "json"])
                    .default_value("text"))
                .arg(Arg::new("plan")
                    .help("Include bits, precision and sample points")
                    .long("plan")
                    .action(ArgAction::SetTrue))
        )
        .subcommand(
            Command::new("encode")
                .about("Encode a coordinate as a geohash")
                .arg(coordinate_arg("lat", "Latitude", 1))
                .arg(coordinate_arg("lon", "Longitude", 2))
                .arg(Arg::new("precision")
                    .help("Geohash length (defaults to the configured key precision)")
                    .long("precision")
                    .value_parser(value_parser!(usize)))
        )
        .subcommand(
            Command::new("decode")
                .about("Show the cell covered by a geohash")
                .arg(Arg::new("geohash")
                    .help("Geohash to decode")
                    .required(true)
                    .index(1))
        )
        .subcommand(
            Command::new("distance")
                .about("Great-circle distance between two points in meters")
                .arg(coordinate_arg("lat1", "First latitude", 1))
                .arg(coordinate_arg("lon1", "First longitude", 2))
                .arg(coordinate_arg("lat2", "Second latitude", 3))
                .arg(coordinate_arg("lon2", "Second longitude", 4))
        )
}

fn load_config(matches: &ArgMatches) -> Result<GeoRangesConfig, Box<dyn StdError>> {
    let config = match matches.get_one::<String>("config") {
        Some(path) => GeoRangesConfig::from_file(path)?,
        None => GeoRangesConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn run_command(matches: ArgMatches) -> CliResult {
    let config = load_config(&matches)?;
    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        config.tracing_level()
    };
    init_logging(level, config.json_logs);

    match matches.subcommand() {
        Some(("ranges", sub_matches)) => cmd_ranges(sub_matches),
        Some(("encode", sub_matches)) => cmd_encode(sub_matches, &config),
        Some(("decode", sub_matches)) => cmd_decode(sub_matches),
        Some(("distance", sub_matches)) => cmd_distance(sub_matches),
        _ => Err("unknown command".into()),
    }
}

fn get_f64(matches: &ArgMatches, name: &str) -> Result<f64, Box<dyn StdError>> {
    matches
        .get_one::<f64>(name)
        .copied()
        .ok_or_else(|| format!("missing argument: {}", name).into())
}

fn cmd_ranges(matches: &ArgMatches) -> CliResult {
    let center = GeoPoint::new(get_f64(matches, "lat")?, get_f64(matches, "lon")?);
    let radius = get_f64(matches, "radius")?;
    let show_plan = matches.get_flag("plan");
    let format = matches.get_one::<String>("format").map(String::as_str).unwrap_or("text");

    let plan = plan_query(&center, radius)?;

    if format == "json" {
        let output = if show_plan {
            serde_json::to_string_pretty(&plan)?
        } else {
            serde_json::to_string_pretty(&plan.ranges)?
        };
        println!("{}", output);
        return Ok(());
    }

    if show_plan {
        println!("Center:    {}", plan.center);
        println!("Radius:    {} m", plan.radius);
        println!("Bits:      {}", plan.bits);
        println!("Precision: {} chars", plan.precision);
        println!("Samples:");
        for (sample, candidate) in plan.samples.iter().zip(&plan.candidates) {
            println!("  {:<40} {}", sample.to_string(), candidate);
        }
        println!("Ranges:");
    }
    for range in &plan.ranges {
        println!("{}\t{}", range.start, range.end);
    }
    Ok(())
}

fn cmd_encode(matches: &ArgMatches, config: &GeoRangesConfig) -> CliResult {
    let point = GeoPoint::new(get_f64(matches, "lat")?, get_f64(matches, "lon")?);
    let precision = matches
        .get_one::<usize>("precision")
        .copied()
        .unwrap_or(config.key_precision);

    println!("{}", encode_geohash(&point, precision)?);
    Ok(())
}

fn cmd_decode(matches: &ArgMatches) -> CliResult {
    let hash = matches
        .get_one::<String>("geohash")
        .ok_or("missing argument: geohash")?;
    let cell = decode_geohash(hash)?;

    println!("Center:    {}", cell.center());
    println!("Latitude:  {} .. {}", cell.min_lat, cell.max_lat);
    println!("Longitude: {} .. {}", cell.min_lon, cell.max_lon);
    Ok(())
}

fn cmd_distance(matches: &ArgMatches) -> CliResult {
    let a = GeoPoint::validated(get_f64(matches, "lat1")?, get_f64(matches, "lon1")?)?;
    let b = GeoPoint::validated(get_f64(matches, "lat2")?, get_f64(matches, "lon2")?)?;

    println!("{:.3}", distance_meters(&a, &b));
    Ok(())
}
