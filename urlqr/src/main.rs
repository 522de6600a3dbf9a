//! Prompt for a URL, save it as a QR code PNG and as `url.txt`.
//!
//! Writes `<token>+1.png` and `url.txt` into the output directory (the
//! working directory by default) and prints both paths on success.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use urlqr::error::PipelineError;
use urlqr::exit_codes;
use urlqr::io::collector::{InjectedSource, InputSource, PromptSource, StdinSource};
use urlqr::logging;
use urlqr::pipeline::{PipelineConfig, run_pipeline};

#[derive(Parser)]
#[command(name = "urlqr", version, about = "Save a URL as a QR code image")]
struct Cli {
    /// Use this value instead of prompting.
    #[arg(long, conflicts_with = "stdin")]
    url: Option<String>,

    /// Read the value from piped standard input instead of prompting.
    #[arg(long)]
    stdin: bool,

    /// Directory to write the artifacts into.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

impl Cli {
    fn input_source(&self) -> Box<dyn InputSource> {
        match (&self.url, self.stdin) {
            (Some(url), _) => Box::new(InjectedSource::new(url.clone())),
            (None, true) => Box::new(StdinSource),
            (None, false) => Box::new(PromptSource),
        }
    }

    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        let code = match err.downcast_ref::<PipelineError>() {
            Some(pipeline_err) => {
                report_partial(pipeline_err);
                pipeline_err.exit_code()
            }
            None => exit_codes::INVALID,
        };
        error!(code, "run failed");
        eprintln!("error: {:#}", err);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let source = cli.input_source();
    let outcome = run_pipeline(source.as_ref(), &cli.pipeline_config())?;
    println!(
        "saved: image={} text={}",
        outcome.artifacts.image.display(),
        outcome.artifacts.text.display()
    );
    Ok(())
}

fn report_partial(err: &PipelineError) {
    if let PipelineError::Persistence {
        written_before: Some(path),
        ..
    } = err
    {
        eprintln!("note: {} was written before the failure", path.display());
    }
}
