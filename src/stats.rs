use std::{
    fs,
    io::{self, Write},
    path::Path,
    time::{Duration, Instant},
};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

pub trait Recorder {
    fn record(&mut self, alive: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> String;
}

pub struct SimpleRecord {
    gens: u64,
    alive: usize,
    gens_in_report: u64,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    fn record(&mut self, alive: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.alive = alive;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}",
            gens_per_sec, self.gens, self.alive
        )
    }
}

/// Keeps a `(micros since last generation, alive)` sample for every generation
pub struct CsvRecord {
    inner: SimpleRecord,
    data: Vec<(u128, usize)>,
    last: Instant,
}
impl CsvRecord {
    pub fn new(alive: usize) -> Self {
        Self {
            inner: SimpleRecord::new(alive),
            data: Vec::new(),
            last: Instant::now(),
        }
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(b"gen,delta_t,alive\n")?;
        for (i, (delta, alive)) in self.data.iter().enumerate() {
            writeln!(out, "{},{},{}", i + 1, delta, alive)?;
        }
        out.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = fs::File::create(path)?;
        self.write_to(io::BufWriter::new(file))
    }
}
impl Recorder for CsvRecord {
    fn record(&mut self, alive: usize) {
        let delta = self.last.elapsed().as_micros();
        self.last = Instant::now();

        self.data.push((delta, alive));
        self.inner.record(alive);
    }

    fn has_report(&self) -> bool {
        self.inner.has_report()
    }
    fn report(&mut self) -> String {
        self.inner.report()
    }
}

pub enum SwitchRecorder {
    Csv(CsvRecord),
    Simple(SimpleRecord),
}
impl SwitchRecorder {
    pub fn new(alive: usize, csv: bool) -> Self {
        if csv {
            Self::Csv(CsvRecord::new(alive))
        } else {
            Self::Simple(SimpleRecord::new(alive))
        }
    }

    /// Writes the collected samples, or does nothing if no CSV was requested
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        match self {
            Self::Csv(r) => r.save(path),
            Self::Simple(_) => Ok(()),
        }
    }
}
impl Recorder for SwitchRecorder {
    fn record(&mut self, alive: usize) {
        match self {
            Self::Csv(r) => r.record(alive),
            Self::Simple(r) => r.record(alive),
        }
    }
    fn has_report(&self) -> bool {
        match self {
            Self::Csv(r) => r.has_report(),
            Self::Simple(r) => r.has_report(),
        }
    }
    fn report(&mut self) -> String {
        match self {
            Self::Csv(r) => r.report(),
            Self::Simple(r) => r.report(),
        }
    }
}
