//! # Runner Facade
//!
//! The runner is the single entry point for executing the demonstration
//! suite. It sequences the six demos, gives each one a [`FileSink`] on its
//! fixed filename, and writes `summary.txt` once every transcript is on disk.
//!
//! The runner returns a structured [`RunReport`] and never prints: console
//! rendering belongs to the binary.

use crate::error::Result;
use crate::patterns::{adapter, decorator, factory, observer, singleton, strategy};
use crate::sink::fs::FileSink;
use crate::sink::Sink;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const SUMMARY_FILENAME: &str = "summary.txt";

type DemoFn = fn(&mut FileSink) -> Result<()>;

/// The fixed roster, grouped the way the summary reports them.
/// Order here is execution order.
const ROSTER: [(&str, &str, &str, DemoFn); 6] = [
    (
        "Behavioral",
        "Observer Pattern - Stock Market Monitoring",
        "observer_stock_market.txt",
        observer::run::<FileSink>,
    ),
    (
        "Behavioral",
        "Strategy Pattern - Payment Processing System",
        "strategy_payment.txt",
        strategy::run::<FileSink>,
    ),
    (
        "Creational",
        "Factory Pattern - Vehicle Manufacturing",
        "factory_vehicles.txt",
        factory::run::<FileSink>,
    ),
    (
        "Creational",
        "Singleton Pattern - Configuration Manager",
        "singleton_config.txt",
        singleton::run::<FileSink>,
    ),
    (
        "Structural",
        "Adapter Pattern - Media Players",
        "adapter_media.txt",
        adapter::run::<FileSink>,
    ),
    (
        "Structural",
        "Decorator Pattern - Coffee Shop",
        "decorator_coffee.txt",
        decorator::run::<FileSink>,
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct RunMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl RunMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub transcripts: Vec<PathBuf>,
    pub messages: Vec<RunMessage>,
}

impl RunReport {
    pub fn add_message(&mut self, message: RunMessage) {
        self.messages.push(message);
    }
}

/// Run all six demos into `results_dir`, then generate the summary.
pub fn run_all<P: AsRef<Path>>(results_dir: P) -> Result<RunReport> {
    let dir = results_dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut report = RunReport::default();
    report.add_message(RunMessage::info(format!(
        "Output will be saved to: {}",
        dir.display()
    )));

    let mut last_group = "";
    for (group, _, filename, demo) in ROSTER {
        if group != last_group {
            report.add_message(RunMessage::info(format!("Running {} patterns...", group)));
            last_group = group;
        }
        let mut sink = FileSink::create(dir.join(filename))?;
        demo(&mut sink)?;
        report.transcripts.push(sink.finish()?);
    }

    report.transcripts.push(write_summary(dir)?);

    report.add_message(RunMessage::success(
        "All design patterns demonstrated successfully!",
    ));
    let names: Vec<String> = report
        .transcripts
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();
    for name in names {
        report.add_message(RunMessage::info(format!("  - {}", name)));
    }

    Ok(report)
}

/// Write `summary.txt`: a timestamp, the pattern roster, and every other
/// file present in the results directory at generation time.
fn write_summary(dir: &Path) -> Result<PathBuf> {
    let mut sink = FileSink::create(dir.join(SUMMARY_FILENAME))?;

    sink.write_line("DESIGN PATTERNS DEMONSTRATION SUMMARY")?;
    sink.write_line(&"=".repeat(50))?;
    sink.write_line(&format!(
        "Generated on: {}",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;
    sink.blank_line()?;

    sink.write_line("PATTERNS IMPLEMENTED:")?;
    sink.write_line(&"-".repeat(30))?;
    let mut last_group = "";
    let mut number = 0;
    for (group, title, _, _) in ROSTER {
        if group != last_group {
            if !last_group.is_empty() {
                sink.blank_line()?;
            }
            sink.write_line(&format!("{} PATTERNS:", group.to_uppercase()))?;
            last_group = group;
        }
        number += 1;
        sink.write_line(&format!("  {}. {}", number, title))?;
    }
    sink.blank_line()?;

    sink.write_line("FILES GENERATED:")?;
    sink.write_line(&"-".repeat(30))?;
    for name in transcript_names(dir)? {
        sink.write_line(&format!("  - {}", name))?;
    }

    sink.finish()
}

/// Every file in the results directory except the summary itself, sorted.
fn transcript_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name != SUMMARY_FILENAME {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
