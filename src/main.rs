use anyhow::Context;
use clap::Parser;

use shift_roster::api::schedule_output_dto::ScheduleOutputDto;
use shift_roster::domain::engine::scheduler_config::FillStrategyType;
use shift_roster::domain::report::render::render_schedule;
use shift_roster::loader::export::{write_csv_file, write_json_file};
use shift_roster::loader::parser::load_schedule_input;
use shift_roster::{logger, run_schedule};

/// Assigns restaurant staff to the open shift slots of one week.
#[derive(Debug, Parser)]
#[command(name = "shift_roster", version, about)]
struct Cli {
    /// Schedule input document (JSON).
    input: String,

    /// Fill strategy, overrides the one in the input file.
    #[arg(long, value_enum)]
    strategy: Option<FillStrategyType>,

    /// Skip the fairness redistribution pass.
    #[arg(long)]
    no_fairness: bool,

    /// Write the populated schedule and report as JSON.
    #[arg(long, value_name = "FILE")]
    json: Option<String>,

    /// Write one CSV row per vacancy block.
    #[arg(long, value_name = "FILE")]
    csv: Option<String>,

    /// Print the schedule without colors.
    #[arg(long)]
    plain: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init();

    let mut input = load_schedule_input(&cli.input).with_context(|| format!("could not load schedule input '{}'", cli.input))?;

    if let Some(strategy) = cli.strategy {
        input.config.strategy = strategy;
    }
    if cli.no_fairness {
        input.config.fairness_pass = false;
    }

    let run = run_schedule(input);
    run.report.print_summary();

    println!("{}", render_schedule(&run.calendar, &run.roster, !cli.plain));

    if let Some(path) = &cli.csv {
        write_csv_file(path, &run.calendar, &run.roster).with_context(|| format!("could not write CSV export '{}'", path))?;
    }

    if let Some(path) = &cli.json {
        let output = ScheduleOutputDto::new(run.report.clone(), &run.calendar, &run.roster);
        write_json_file(path, &output).with_context(|| format!("could not write JSON export '{}'", path))?;
    }

    Ok(())
}
