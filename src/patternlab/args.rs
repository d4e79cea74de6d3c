use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "patternlab")]
#[command(
    about = "Run six classic design-pattern demos and save their transcripts",
    long_about = None
)]
pub struct Cli {
    /// Directory the transcripts are written to
    #[arg(short = 'd', long, default_value = "results")]
    pub results_dir: PathBuf,
}
