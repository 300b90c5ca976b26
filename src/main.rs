//! Visceral Fat Calculator (vfcalc)
//!
//! CLI front-end adapter: binds command-line flags to a measurement input,
//! invokes the engine, renders the report, and optionally stores the
//! completed record to the SQLite history database.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use vfcalc::build_info;
use vfcalc::db;
use vfcalc::engine::Gender;
use vfcalc::models::{MeasurementInput, MeasurementRecord, StoredMeasurement};
use vfcalc::report;

/// Parsed command-line options
#[derive(Debug, Clone)]
struct CliOptions {
    input: MeasurementInput,
    store: bool,
    json: bool,
    debug: bool,
    show_help: bool,
    show_version: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            input: MeasurementInput::default(),
            store: false,
            json: false,
            debug: false,
            show_help: false,
            show_version: false,
        }
    }
}

fn print_usage() {
    eprintln!("Usage: vfcalc [OPTIONS]");
    eprintln!();
    eprintln!("Computes BMI and estimated visceral fat area from imperial measurements.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -n, --name <str>        User name, one word (default: Tony)");
    eprintln!("  -m, --male              Use the male formula (default)");
    eprintln!("  -f, --female            Use the female formula");
    eprintln!("  -a, --age <int>         Age in years (default: 42)");
    eprintln!("  -wt, --weight <float>   Weight in lbs (default: 190.0)");
    eprintln!("  --height-ft <int>       Height, whole feet (default: 6)");
    eprintln!("  --height-in <float>     Height, remaining inches in [0, 12) (default: 1)");
    eprintln!("  -wc, --waist <float>    Waist circumference in inches (default: 36.0)");
    eprintln!("  -tc, --thigh <float>    Thigh circumference in inches (default: 24.5)");
    eprintln!("  --json                  Print the record as JSON");
    eprintln!("  -sd, --store            Store the record in the database");
    eprintln!("  -d, --debug             Enable debug logging");
    eprintln!("  --version               Print version and build info");
    eprintln!("  -h, --help              Show this help");
}

/// Take the value following a flag, or error
fn take_value<'a>(
    flag: &str,
    args: &'a [String],
    i: &mut usize,
) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

fn parse_f64(flag: &str, value: &str) -> Result<f64, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a number, got \"{}\"", flag, value))
}

fn parse_u32(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{} expects a whole number, got \"{}\"", flag, value))
}

/// Parse command-line arguments into options over the documented defaults
fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut male_set = false;
    let mut female_set = false;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-n" | "--name" => {
                opts.input.name = take_value(arg, args, &mut i)?.to_string();
            }
            "-m" | "--male" => {
                male_set = true;
                opts.input.gender = Gender::Male;
            }
            "-f" | "--female" => {
                female_set = true;
                opts.input.gender = Gender::Female;
            }
            "-a" | "--age" => {
                opts.input.age = parse_u32(arg, take_value(arg, args, &mut i)?)?;
            }
            "-wt" | "--weight" => {
                opts.input.weight_lbs = parse_f64(arg, take_value(arg, args, &mut i)?)?;
            }
            "--height-ft" => {
                opts.input.height_ft = parse_u32(arg, take_value(arg, args, &mut i)?)?;
            }
            "--height-in" => {
                opts.input.height_in = parse_f64(arg, take_value(arg, args, &mut i)?)?;
            }
            "-wc" | "--waist" => {
                opts.input.waist_in = parse_f64(arg, take_value(arg, args, &mut i)?)?;
            }
            "-tc" | "--thigh" => {
                opts.input.thigh_in = parse_f64(arg, take_value(arg, args, &mut i)?)?;
            }
            "--json" => opts.json = true,
            "-sd" | "--store" => opts.store = true,
            "-d" | "--debug" => opts.debug = true,
            "--version" => opts.show_version = true,
            "-h" | "--help" => opts.show_help = true,
            _ => return Err(format!("unknown argument \"{}\"", arg)),
        }
        i += 1;
    }

    if male_set && female_set {
        return Err("--male and --female are mutually exclusive".to_string());
    }

    Ok(opts)
}

/// Get the database path from environment or use the default file
fn get_database_path() -> PathBuf {
    std::env::var("VFCALC_DATABASE_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("vf_data.db"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("error: {}", msg);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if opts.show_help {
        print_usage();
        return Ok(());
    }
    if opts.show_version {
        build_info::print_version_banner();
        return Ok(());
    }

    // Log to stderr so report output on stdout stays clean
    let directive = if opts.debug { "vfcalc=debug" } else { "vfcalc=info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let record = match MeasurementRecord::compute(&opts.input) {
        Ok(record) => record,
        Err(e) => {
            tracing::debug!(field = e.field, "measurement rejected");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", report::render(&record));
    }

    if opts.store {
        let db_path = get_database_path();
        let database = db::Database::new(&db_path)?;
        database.with_conn(|conn| {
            db::migrations::run_migrations(conn)?;
            let stored = StoredMeasurement::create(conn, &record)?;
            println!("Stored measurement #{} in {}", stored.id, db_path.display());
            Ok(())
        })?;
    }

    Ok(())
}
