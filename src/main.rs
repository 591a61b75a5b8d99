use std::{io, process::ExitCode, thread, time::Instant};

use rand::Rng;
use torus_life::Grid;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use console::{ConsoleCommand, ConsoleRender};
use options::{Args, OptionsError};
use stats::{Recorder, SwitchRecorder};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn create_board(args: &Args) -> Result<Grid, OptionsError> {
    // unseeded runs still log their seed so they can be replayed
    let seed = args.seed().unwrap_or_else(|| rand::rng().random());
    let config = args.grid_config(seed)?;
    let game = Grid::from_config(&config)?;
    info!(
        rows = config.rows,
        columns = config.columns,
        density = config.density,
        seed = config.seed,
        alive = game.alive_count(),
        "created board"
    );
    Ok(game)
}

fn run(args: &Args, mut game: Grid) -> io::Result<Grid> {
    let mut console = if args.console() {
        Some(ConsoleRender::new()?)
    } else {
        None
    };
    let period = args.frame_period();
    let parallel = args.multithreading();

    let mut stats = SwitchRecorder::new(game.alive_count(), args.stats_file().is_some());
    'generations: for _ in 0..args.generations() {
        let tick = Instant::now();

        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    ConsoleCommand::Exit => break 'generations,
                    ConsoleCommand::Handled => {}
                }
            }
            console.render(&game)?;
        }

        // report metrics every 500ms, in the footer if in console mode
        if stats.has_report() {
            let report = stats.report();
            match console {
                Some(ref mut console) => console.set_report(report),
                None => info!("{}", report),
            }
        }

        if parallel {
            game.step_parallel();
        } else {
            game.step();
        }
        stats.record(game.alive_count());

        // hold the tick rate steady regardless of how long the step took
        if let Some(rest) = period.and_then(|p| p.checked_sub(tick.elapsed())) {
            thread::sleep(rest);
        }
    }
    std::mem::drop(console);

    if let Some(file_name) = args.stats_file() {
        stats.save(file_name)?;
        info!(file = file_name, "wrote stats");
    }
    Ok(game)
}

fn main() -> ExitCode {
    let args = match Args::from_env() {
        Ok(Some(args)) => args,
        Ok(None) => return ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    // logging would garble the raw-mode screen
    if !args.console() {
        init_logging();
    }

    let game = match create_board(&args) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&args, game) {
        Ok(game) => {
            debug!(generation = game.generation(), "simulation finished");
            if args.print() {
                print!("{game}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
