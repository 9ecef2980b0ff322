use std::process;

use clap::{CommandFactory, Parser};
use oblique_throw::cli::ThrowArgs;

mod app;
mod constants;
mod render;

#[derive(Parser, Debug)]
#[command(
    name = "oblique_throw_viewer",
    version,
    about = "The oblique throw - Simulation / Without air resistance (plot window)"
)]
struct ViewerCli {
    #[command(flatten)]
    throw: ThrowArgs,
}

// Arguments are checked before any window is opened.
fn main() {
    env_logger::init();
    let cli = ViewerCli::parse();

    let panels = match app::prepare(&cli.throw) {
        Ok(panels) => panels,
        Err(err) if err.is_usage() => {
            print!("{}", ViewerCli::command().render_help());
            return;
        }
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    macroquad::Window::from_config(app::window_conf(), app::run(panels));
}
