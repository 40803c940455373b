//! Economy balance CLI.
//!
//! Usage:
//!   econ-balance <report|solve|reprice> [OPTIONS]
//!
//! Examples:
//!   econ-balance report                              # Built-in catalog, levels 1-20
//!   econ-balance report --content content.json --levels 1-50 --json
//!   econ-balance solve --target Goblin:1:25 --target Orc:10:30
//!   econ-balance reprice --content content.json --write

use econ_balance::build_info;
use econ_balance::content::{self, ContentSnapshot};
use econ_balance::error::{RecordFailure, StoreError};
use econ_balance::rewards::PacingTarget;
use econ_balance::{build_economy_report, reprice_items, solve_and_apply_pacing, BalanceProfile};
use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Report,
    Solve,
    Reprice,
}

#[derive(Debug)]
struct CliConfig {
    command: Command,
    content: Option<PathBuf>,
    profile: Option<PathBuf>,
    levels: RangeInclusive<u32>,
    targets: Vec<PacingTarget>,
    json: bool,
    write: bool,
}

enum CliAction {
    Run(CliConfig),
    Help,
    Version,
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let config = match parse_args(&args) {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Help) => {
            print_help();
            std::process::exit(0);
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_string());
            std::process::exit(0);
        }
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!("Run 'econ-balance --help' for usage.");
            std::process::exit(1);
        }
    };

    let code = match run(&config) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "command failed");
            eprintln!("error: {}", err);
            1
        }
    };
    std::process::exit(code);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: &CliConfig) -> Result<i32, StoreError> {
    let profile = content::load_profile(config.profile.as_deref())?;
    let mut snapshot = match &config.content {
        Some(path) => content::load_snapshot(path)?,
        None => content::default_catalog(),
    };

    match config.command {
        Command::Report => run_report(config, &profile, &snapshot),
        Command::Solve => run_solve(config, &profile, &mut snapshot),
        Command::Reprice => run_reprice(config, &profile, &mut snapshot),
    }
}

fn run_report(
    config: &CliConfig,
    profile: &BalanceProfile,
    snapshot: &ContentSnapshot,
) -> Result<i32, StoreError> {
    let report = build_economy_report(
        profile,
        config.levels.clone(),
        &snapshot.races,
        &snapshot.dungeons,
        &snapshot.items,
    )?;
    println!("{}", report.to_text());

    if config.json {
        let filename = format!(
            "economy_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(if report.verification.passed { 0 } else { 1 })
}

fn run_solve(
    config: &CliConfig,
    profile: &BalanceProfile,
    snapshot: &mut ContentSnapshot,
) -> Result<i32, StoreError> {
    let outcome = solve_and_apply_pacing(profile, &mut snapshot.races, &config.targets);

    println!("── PACING ───────────────────────────────────────────────────────");
    println!("  Race           Base XP          Gold");
    for applied in &outcome.applied {
        println!(
            "  {:<14} {:>5} -> {:<5}  {:>5} -> {:<5}",
            applied.race,
            applied.previous.base_experience,
            applied.applied.base_experience,
            applied.previous.base_gold,
            applied.applied.base_gold
        );
    }
    print_failures(&outcome.failures);

    save_if_requested(config, snapshot)?;
    Ok(if outcome.failures.is_empty() { 0 } else { 1 })
}

fn run_reprice(
    config: &CliConfig,
    profile: &BalanceProfile,
    snapshot: &mut ContentSnapshot,
) -> Result<i32, StoreError> {
    let outcome = reprice_items(&profile.pricing, &mut snapshot.items);

    println!("── PRICING ──────────────────────────────────────────────────────");
    println!("  Item                    Old       New");
    for item in &outcome.repriced {
        let marker = if item.price != item.previous_price {
            "*"
        } else {
            " "
        };
        println!(
            "  {:<20} {:>7}   {:>7} {}",
            item.id, item.previous_price, item.price, marker
        );
    }
    print_failures(&outcome.failures);

    save_if_requested(config, snapshot)?;
    Ok(if outcome.failures.is_empty() { 0 } else { 1 })
}

fn print_failures(failures: &[RecordFailure]) {
    if failures.is_empty() {
        return;
    }
    println!();
    println!("  Skipped records:");
    for failure in failures {
        println!("    - {}", failure);
    }
}

fn save_if_requested(config: &CliConfig, snapshot: &ContentSnapshot) -> Result<(), StoreError> {
    if !config.write {
        return Ok(());
    }
    if let Some(path) = &config.content {
        content::save_snapshot(path, snapshot)?;
        println!();
        println!("Content saved to: {}", path.display());
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut command = None;
    let mut config = CliConfig {
        command: Command::Report,
        content: None,
        profile: None,
        levels: 1..=20,
        targets: Vec::new(),
        json: false,
        write: false,
    };

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "report" | "solve" | "reprice" if command.is_none() => {
                command = Some(match arg {
                    "solve" => Command::Solve,
                    "reprice" => Command::Reprice,
                    _ => Command::Report,
                });
            }
            "--content" | "-c" => {
                config.content = Some(PathBuf::from(value_for(args, i, arg)?));
                i += 1;
            }
            "--profile" | "-p" => {
                config.profile = Some(PathBuf::from(value_for(args, i, arg)?));
                i += 1;
            }
            "--levels" | "-l" => {
                config.levels = parse_levels(value_for(args, i, arg)?)?;
                i += 1;
            }
            "--target" | "-t" => {
                config.targets.push(parse_target(value_for(args, i, arg)?)?);
                i += 1;
            }
            "--json" => config.json = true,
            "--write" | "-w" => config.write = true,
            "--version" | "-V" => return Ok(CliAction::Version),
            "--help" | "-h" => return Ok(CliAction::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config.command = command.ok_or_else(|| "Missing command".to_string())?;
    if config.command == Command::Solve && config.targets.is_empty() {
        return Err("solve needs at least one --target RACE:LEVEL:KILLS".to_string());
    }
    if config.write && config.content.is_none() {
        return Err("--write needs --content FILE to write to".to_string());
    }
    Ok(CliAction::Run(config))
}

fn value_for<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// "A-B" for an explicit range, or "N" for 1-N.
fn parse_levels(value: &str) -> Result<RangeInclusive<u32>, String> {
    let bad = || format!("invalid level range '{}', expected A-B", value);
    match value.split_once('-') {
        Some((first, last)) => {
            let first: u32 = first.trim().parse().map_err(|_| bad())?;
            let last: u32 = last.trim().parse().map_err(|_| bad())?;
            Ok(first..=last)
        }
        None => {
            let last: u32 = value.trim().parse().map_err(|_| bad())?;
            Ok(1..=last)
        }
    }
}

/// "RACE:LEVEL:KILLS". The race name may itself contain ':'.
fn parse_target(value: &str) -> Result<PacingTarget, String> {
    let bad = || format!("invalid target '{}', expected RACE:LEVEL:KILLS", value);
    let mut parts = value.rsplitn(3, ':');
    let kills: i64 = parts
        .next()
        .and_then(|k| k.trim().parse().ok())
        .ok_or_else(bad)?;
    let level: u32 = parts
        .next()
        .and_then(|l| l.trim().parse().ok())
        .ok_or_else(bad)?;
    let race = parts.next().filter(|r| !r.is_empty()).ok_or_else(bad)?;
    Ok(PacingTarget::new(race, level, kills))
}

fn print_help() {
    println!("Economy Balance");
    println!();
    println!("USAGE:");
    println!("    econ-balance <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report              Print the economy report and verify it");
    println!("    solve               Solve base rewards from pacing targets");
    println!("    reprice             Recompute item sell prices");
    println!();
    println!("OPTIONS:");
    println!("    -c, --content <F>   Content snapshot JSON (default: built-in catalog)");
    println!("    -p, --profile <F>   Balance profile JSON (default: ~/.econ-balance/profile.json)");
    println!("    -l, --levels <A-B>  Level range for the report (default: 1-20)");
    println!("    -t, --target <T>    Pacing target RACE:LEVEL:KILLS (repeatable)");
    println!("    -w, --write         Write changed records back to --content");
    println!("    --json              Save the report as JSON");
    println!("    -V, --version       Show version information");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=debug for per-record logging.");
}
