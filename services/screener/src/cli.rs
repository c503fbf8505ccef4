use crate::commands::{run_demo, run_intervals, run_screen, DemoArgs, IntervalsArgs, ScreenArgs};
use asq_engine::config::AppConfig;
use asq_engine::error::AppError;
use asq_engine::telemetry;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "ASQ-3 Screener",
    about = "Score ASQ-3 questionnaires and resolve screening intervals from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a completed answer sheet against the cutoff tables
    Screen(ScreenArgs),
    /// Show which questionnaire intervals apply to a child's age
    Intervals(IntervalsArgs),
    /// Run a canned end-to-end screening demo
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    telemetry::init(&config)?;

    match cli.command {
        Command::Screen(args) => run_screen(args, &config),
        Command::Intervals(args) => run_intervals(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
