use anyhow::{bail, Context, Result};
use chrono::{Local, TimeZone};
use dateutil::config::Config;
use dateutil::constants::ERROR_INVALID_ARGS;
use dateutil::{logger, period, CalendarPeriod, Clock, DateUtil, SystemClock, ZoneSpec};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "--init-config") {
        let path = Config::get_default_config_path()?;
        return Config::generate_default_config(path);
    }

    let config = Config::load()?;
    logger::init(&config.logging)?;
    log::debug!("Configuration: {:?}", config);

    let zone = config.zone_spec()?;
    log::debug!("Using time zone {}", zone);

    let json = args.iter().any(|arg| arg == "--json");
    let dates: Vec<&str> = args
        .iter()
        .map(String::as_str)
        .filter(|arg| !arg.starts_with("--"))
        .collect();

    match dates.as_slice() {
        [] => match zone {
            ZoneSpec::Local => print_current(&DateUtil::new(Local, SystemClock)),
            ZoneSpec::Named(tz) => print_current(&DateUtil::new(tz, SystemClock)),
        },
        [first, second] => print_periods(first, second, json)?,
        _ => {
            eprintln!("Usage:");
            eprintln!("  dateutil                      print the current date and time encodings");
            eprintln!("  dateutil <date> <date> [--json]  print the periods between two dates");
            eprintln!("  dateutil --init-config        write the default configuration file");
            bail!(ERROR_INVALID_ARGS);
        }
    }

    Ok(())
}

fn print_current<Tz: TimeZone, C: Clock>(util: &DateUtil<Tz, C>) {
    println!("{}", util.current_day_as_integer());
    println!("{}", util.current_day_as_text());
    println!("{}", util.current_time_as_integer());
    println!("{}", util.current_time_as_text());
}

/// Dates are either both `yyyy-MM-dd` or both `yyyyMMdd`
fn print_periods(first: &str, second: &str, json: bool) -> Result<()> {
    let (between, until) = if first.contains('-') || second.contains('-') {
        (period::between_dates(first, second)?, period::until_dates(first, second)?)
    } else {
        let first: i32 = first.parse().with_context(|| format!("Invalid date '{first}'"))?;
        let second: i32 = second.parse().with_context(|| format!("Invalid date '{second}'"))?;
        (period::between_days(first, second)?, period::until_days(first, second)?)
    };
    log::debug!("between={} until={}", between, until);

    if json {
        let report = serde_json::json!({ "between": between, "until": until });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_period("between", &between);
        print_period("until", &until);
    }

    Ok(())
}

fn print_period(label: &str, period: &CalendarPeriod) {
    let iso = period.to_string();
    println!(
        "{label:<8} {iso:<12} ({} years, {} months, {} days)",
        period.years(),
        period.months(),
        period.days()
    );
}
