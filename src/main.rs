use std::io::{self, BufWriter, Write};
use std::process;

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use uniprocessor::constants::INPUT_ERROR_CODE;
use uniprocessor::input::read_task_file;
use uniprocessor::report::{write_report, write_status_at};
use uniprocessor::{normalize, simulation, OutputFormat, Policy, SchedulingCode, SchedulingError, TimeStep};

/// Horizon given on the command line.
#[derive(Debug, PartialEq)]
enum HorizonRequest {
    Fixed(f64),
    /// `max offset + hyperperiod` of the task set.
    Hyperperiod,
}

fn parse_horizon(value: &str) -> Result<HorizonRequest, SchedulingError> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("hyperperiod") || value.eq_ignore_ascii_case("hp") {
        return Ok(HorizonRequest::Hyperperiod);
    }
    value
        .parse::<f64>()
        .map(HorizonRequest::Fixed)
        .map_err(|_| SchedulingError::InvalidHorizon(value.to_string()))
}

pub fn build_cli_command() -> Command {
    Command::new("uniprocessor")
    .version("0.1.0")
    .about("Simulates RM or EDF scheduling of a periodic task set on one processor")

    .arg(Arg::new("task_file")
        .required(true)
        .help("Path to the task set file (csv: offset, wcet, deadline, period; or .json)"))

    .arg(Arg::new("policy")
        .short('p')
        .long("policy")
        .required(true)
        .ignore_case(true)
        .value_parser(["rm", "edf"])
        .help("Scheduling policy: rm (Rate Monotonic) or edf (Earliest Deadline First)"))

    .arg(Arg::new("horizon")
        .short('t')
        .long("horizon")
        .default_value("50")
        .help("Number of simulated time units, or 'hyperperiod'"))

    .arg(Arg::new("format")
        .short('f')
        .long("format")
        .default_value("text")
        .value_parser(["text", "json", "csv"])
        .help("Output format"))

    .arg(Arg::new("at")
        .long("at")
        .value_parser(value_parser!(TimeStep))
        .help("Also print every task's status at this instant"))
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "uniprocessor=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn execute(matches: &ArgMatches) -> anyhow::Result<SchedulingCode> {
    let task_file = matches
        .get_one::<String>("task_file")
        .context("missing task file")?;
    let policy: Policy = matches
        .get_one::<String>("policy")
        .context("missing policy")?
        .parse()?;
    let format: OutputFormat = matches
        .get_one::<String>("format")
        .context("missing output format")?
        .parse()?;
    let horizon = parse_horizon(matches.get_one::<String>("horizon").context("missing horizon")?)?;

    let raw_tasks = read_task_file(task_file)
        .with_context(|| format!("reading task file '{}'", task_file))?;

    let (taskset, horizon) = match horizon {
        HorizonRequest::Fixed(requested) => normalize(&raw_tasks, Some(requested)),
        HorizonRequest::Hyperperiod => {
            let (taskset, _) = normalize(&raw_tasks, None);
            let horizon = taskset.feasibility_horizon();
            (taskset, horizon)
        }
    };
    info!(tasks = taskset.len(), horizon, %policy, "simulating");

    let result = simulation(taskset, horizon, policy);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&result, format, &mut out)?;
    if let Some(&t) = matches.get_one::<TimeStep>("at") {
        write_status_at(&result, t, &mut out)?;
    }
    out.flush()?;

    Ok(result.code())
}

fn main() {
    // cargo run -- <task_file> -p rm|edf [-t <horizon>|hyperperiod] [-f text|json|csv] [--at <t>]
    // example : cargo run -- tasks.csv -p edf -t hyperperiod
    init_logging();
    let matches: ArgMatches = build_cli_command().get_matches();

    match execute(&matches) {
        Ok(code) => process::exit(code as i32),
        Err(e) => {
            error!("{:#}", e);
            process::exit(INPUT_ERROR_CODE);
        }
    }
}
