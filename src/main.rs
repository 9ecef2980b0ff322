use std::io;
use std::path::PathBuf;
use std::process;

use chrono::Local;
use clap::{CommandFactory, Parser};
use log::info;

use oblique_throw::cli::ThrowArgs;
use oblique_throw::core::ballistics::{DISTANCE_DOMAIN, TIME_DOMAIN, TrajectorySolver};
use oblique_throw::core::error::ThrowError;
use oblique_throw::core::plot::render_png;
use oblique_throw::core::report::ThrowSummary;

#[derive(Parser, Debug)]
#[command(
    name = "oblique_throw",
    version,
    about = "The oblique throw - Simulation / Without air resistance"
)]
struct Cli {
    #[command(flatten)]
    throw: ThrowArgs,

    /// PNG file for the 2x2 plot grid (default: oblique_throw_<timestamp>.png)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only print the summary table
    #[arg(long)]
    no_plot: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "oblique_throw_{}.png",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn run(cli: &Cli) -> Result<(), ThrowError> {
    let angle_deg = cli.throw.angle_deg()?;
    let parameters = cli.throw.parameters()?;

    let solver = TrajectorySolver::new(parameters);
    let roots = solver.solve_roots()?;
    let series = solver.sample_series(DISTANCE_DOMAIN, TIME_DOMAIN)?;

    let summary = ThrowSummary {
        parameters,
        angle_deg,
        roots,
    };
    summary.write_table(&mut io::stdout().lock())?;

    if !cli.no_plot {
        let path = cli.output.clone().unwrap_or_else(default_output_path);
        render_png(&path, &series)?;
        info!("Wrote plot grid to {}", path.display());
        println!("\nPlots saved to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        if err.is_usage() {
            print!("{}", Cli::command().render_help());
            return;
        }
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
