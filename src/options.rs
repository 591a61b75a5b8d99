use std::{io, str::FromStr, sync::OnceLock, time::Duration};

use regex::Regex;
use thiserror::Error;
use torus_life::{ConfigError, GridConfig};

const USAGE: &str = "usage: torus-life [options]";
const DEFAULT_FPS: u32 = 10;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error(transparent)]
    Parse(#[from] getopts::Fail),

    #[error("invalid value {value:?} for --{option}")]
    Value { option: &'static str, value: String },

    #[error("invalid grid size {0:?}, expected ROWSxCOLS")]
    Size(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read terminal size: {0}")]
    Terminal(#[from] io::Error),
}

#[derive(Debug)]
pub struct Args {
    size: Option<(usize, usize)>,
    density: f64,
    seed: Option<u64>,
    fps: Option<u32>,
    generations: Option<u64>,
    console: bool,
    threads: bool,
    print: bool,
    stats_file: Option<String>,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "draw the board in the terminal");
        opts.optflag("t", "threads", "compute generations on all cores");
        opts.optflag("", "print", "print the final board");
        opts.optopt("s", "size", "set grid size", "ROWSxCOLS");
        opts.optopt("d", "density", "initial live probability", "P");
        opts.optopt("", "seed", "seed for the initial board", "N");
        opts.optopt("f", "fps", "generations per second", "N");
        opts.optopt("g", "gens", "max number of generations", "COUNT");
        opts.optopt("", "stats", "write stats csv to file", "FILE");
        opts
    }

    /// Parses the arguments, or returns `None` if only help was requested
    fn new<T: AsRef<str>>(args: &[T]) -> Result<Option<Self>, OptionsError> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage(USAGE));
            return Ok(None);
        }

        let size = matches.opt_str("size").map(|s| parse_size(&s)).transpose()?;
        let fps = opt_value(&matches, "fps")?;
        if fps == Some(0) {
            return Err(OptionsError::Value {
                option: "fps",
                value: "0".to_owned(),
            });
        }

        Ok(Some(Self {
            size,
            density: opt_value(&matches, "density")?.unwrap_or(GridConfig::DEFAULT_DENSITY),
            seed: opt_value(&matches, "seed")?,
            fps,
            generations: opt_value(&matches, "gens")?,
            console: matches.opt_present("console"),
            threads: matches.opt_present("threads"),
            print: matches.opt_present("print"),
            stats_file: matches.opt_str("stats"),
        }))
    }

    pub fn from_env() -> Result<Option<Self>, OptionsError> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    pub fn console(&self) -> bool {
        self.console
    }
    pub fn multithreading(&self) -> bool {
        self.threads
    }
    pub fn print(&self) -> bool {
        self.print
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generations(&self) -> u64 {
        self.generations.unwrap_or(u64::MAX) // close enough to "forever"
    }
    /// Minimum time per generation, if the run is throttled at all
    pub fn frame_period(&self) -> Option<Duration> {
        match self.fps {
            Some(fps) => Some(Duration::from_secs(1) / fps),
            None if self.console => Some(Duration::from_secs(1) / DEFAULT_FPS),
            None => None,
        }
    }

    pub fn stats_file(&self) -> Option<&str> {
        self.stats_file.as_deref()
    }

    /// Grid size, defaulting to one tile per terminal character in console mode
    ///
    /// Rows run along the horizontal axis, so they take the terminal width. The
    /// last terminal line is kept for the report footer.
    pub fn grid_size(&self) -> Result<(usize, usize), OptionsError> {
        if let Some(size) = self.size {
            return Ok(size);
        }
        if self.console {
            let (cols, lines) = crossterm::terminal::size()?;
            return Ok((cols as usize, lines.saturating_sub(1) as usize));
        }
        Ok((GridConfig::DEFAULT_ROWS, GridConfig::DEFAULT_COLUMNS))
    }

    pub fn grid_config(&self, seed: u64) -> Result<GridConfig, OptionsError> {
        let (rows, columns) = self.grid_size()?;
        let config = GridConfig {
            rows,
            columns,
            density: self.density,
            seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn opt_value<T: FromStr>(
    matches: &getopts::Matches,
    option: &'static str,
) -> Result<Option<T>, OptionsError> {
    let Some(value) = matches.opt_str(option) else {
        return Ok(None);
    };
    match value.parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(OptionsError::Value { option, value }),
    }
}

fn parse_size(s: &str) -> Result<(usize, usize), OptionsError> {
    static SIZE: OnceLock<Regex> = OnceLock::new();
    let re = SIZE.get_or_init(|| Regex::new(r"^\s*(\d+)\s*[xX]\s*(\d+)\s*$").unwrap());

    let invalid = || OptionsError::Size(s.to_owned());
    let caps = re.captures(s).ok_or_else(invalid)?;
    let rows = caps[1].parse().map_err(|_| invalid())?;
    let columns = caps[2].parse().map_err(|_| invalid())?;
    Ok((rows, columns))
}
