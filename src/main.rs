use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sjf_scheduler::config::DEFAULT_AGING_INCREMENT;
use sjf_scheduler::gui::SchedulerApp;
use sjf_scheduler::report;
use sjf_scheduler::{ProcfsSource, Scheduler, SchedulerConfig, SharedScheduler};

#[derive(Parser, Debug)]
#[command(name = "sjf-scheduler")]
#[command(version)]
#[command(about = "Shortest-Job-First scheduling over a snapshot of live processes")]
struct Args {
    /// Amount added to every burst time before scheduling
    #[arg(long, global = true, default_value_t = DEFAULT_AGING_INCREMENT)]
    aging: f64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the scheduler window (default)
    Gui,

    /// Run one scheduling pass and print the table
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Show rows ordered by arrival time instead of schedule order
    #[arg(long)]
    by_arrival: bool,

    /// Also write the five fields per process to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Also write the result as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

fn run_once(scheduler: Scheduler, args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedScheduler::new(scheduler);
    let mut source = ProcfsSource::new();

    let mut summary = shared.retrieve(&mut source)?;
    if args.by_arrival {
        summary = shared.reorder_by_arrival_time();
    }

    print!("{}", report::render_table(&summary));

    if let Some(path) = &args.csv {
        report::save_csv(&summary, path)?;
    }
    if let Some(path) = &args.json {
        report::save_json(&summary, path)?;
    }
    Ok(())
}

fn run_gui(scheduler: Scheduler) -> Result<(), Box<dyn std::error::Error>> {
    let shared = SharedScheduler::new(scheduler);

    // Configure native options for the GUI
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("SJF Process Scheduler"),
        ..Default::default()
    };

    eframe::run_native(
        "SJF Process Scheduler",
        options,
        Box::new(move |cc| Box::new(SchedulerApp::new(cc, shared))),
    )?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SchedulerConfig::new().with_aging_increment(args.aging);
    let scheduler = Scheduler::new(config)?;
    tracing::debug!(aging_increment = args.aging, "Scheduler configured");

    match args.command.unwrap_or(Commands::Gui) {
        Commands::Gui => run_gui(scheduler),
        Commands::Run(run_args) => run_once(scheduler, run_args),
    }
}
