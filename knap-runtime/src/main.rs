use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knap_algorithms::driver::solve_dataset;
use knap_challenges::knapsack::{Challenge, Solution, Track};
use knap_structs::config::{RunSettings, SolverKind};
use knap_utils::{compress_obj, jsonify, seed_from_str};
use log::{info, LevelFilter};
use std::{fs, io::Read, path::PathBuf};

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Solves, verifies or generates 0/1 knapsack instances")
        .arg_required_else_help(true)
        .arg(
            arg!(--"log-level" [LEVEL] "off, error, warn, info, debug or trace")
                .global(true)
                .default_value("info")
                .value_parser(clap::value_parser!(LevelFilter)),
        )
        .subcommand(
            Command::new("solve")
                .about("Runs the configured solvers and prints the best submission")
                .arg(
                    arg!(<INPUT> "Path to an instance file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--settings [SETTINGS] "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--solver [SOLVER] "Solver to run (greedy, dynamic, branch_and_bound). Repeatable, overrides settings")
                        .action(ArgAction::Append)
                        .value_parser(clap::value_parser!(SolverKind)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the run report will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress "If output file is set, the run report will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies a submission against an instance")
                .arg(
                    arg!(<INPUT> "Path to an instance file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<SUBMISSION> "Path to a submission file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Prints a random instance")
                .arg(
                    arg!(<SEED> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NUM_ITEMS> "Number of items").value_parser(clap::value_parser!(usize)))
                .arg(
                    arg!(--budget [BUDGET] "Capacity as a percentage of the total weight")
                        .default_value("50")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}

fn log_level(matches: &ArgMatches) -> LevelFilter {
    matches
        .get_one::<LevelFilter>("log-level")
        .copied()
        .unwrap_or(LevelFilter::Info)
}

fn main() {
    let matches = cli().get_matches();

    env_logger::Builder::new()
        .filter_level(log_level(&matches))
        .init();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("settings").cloned(),
            sub_m
                .get_many::<SolverKind>("solver")
                .map(|kinds| kinds.copied().collect()),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("SUBMISSION").unwrap().clone(),
        ),
        Some(("generate", sub_m)) => generate(
            sub_m.get_one::<String>("SEED").unwrap().clone(),
            *sub_m.get_one::<usize>("NUM_ITEMS").unwrap(),
            *sub_m.get_one::<u32>("budget").unwrap(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

pub fn solve(
    input_path: String,
    settings: Option<String>,
    solvers: Option<Vec<SolverKind>>,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let mut settings = match settings {
        Some(settings) => load_settings(&settings)?,
        None => RunSettings::default(),
    };
    if let Some(solvers) = solvers {
        settings.solvers = solvers;
    }
    info!("Settings: {:?}", settings);

    let challenge = load_challenge(&input_path)?;
    let report = solve_dataset(&challenge, &settings)?;

    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&report)?)?;
        } else {
            fs::write(&path, jsonify(&report)?)?;
        }
        info!("run report written to: {:?}", path);
    }
    println!("{}", report.submission());
    Ok(())
}

pub fn verify(input_path: String, submission_path: String) -> Result<()> {
    let challenge = load_challenge(&input_path)?;
    let submission = read_input(&submission_path)?;
    let solution = Solution::from_submission(&submission, challenge.num_items)?;
    let total_value = challenge
        .verify_solution(&solution)
        .context("Invalid submission")?;
    info!("Verified total value: {}", total_value);
    println!("Submission is valid");
    Ok(())
}

pub fn generate(seed: String, num_items: usize, budget: u32) -> Result<()> {
    let challenge =
        Challenge::generate_instance(&seed_from_str(&seed), &Track { num_items, budget })?;
    println!("{}", challenge);
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
    }
}

fn load_challenge(path: &str) -> Result<Challenge> {
    let input = read_input(path)?;
    input
        .parse::<Challenge>()
        .with_context(|| format!("Failed to parse instance: {}", path))
}

fn load_settings(settings: &str) -> Result<RunSettings> {
    let settings = if settings.ends_with(".json") {
        fs::read_to_string(settings)
            .with_context(|| format!("Failed to read settings file: {}", settings))?
    } else {
        settings.to_string()
    };
    settings
        .parse::<RunSettings>()
        .context("Failed to parse settings")
}
