use clap::Parser;
use colored::*;
use patternlab::error::Result;
use patternlab::runner::{self, MessageLevel, RunMessage};

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    println!("{}", "Design Patterns Demonstration".bold());
    let report = runner::run_all(&cli.results_dir)?;
    print_messages(&report.messages);

    println!(
        "{}",
        format!("Results saved in: {}/", cli.results_dir.display()).dimmed()
    );
    Ok(())
}

fn print_messages(messages: &[RunMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
