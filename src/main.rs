use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand};
use langcov::{CountryTable, Estimator, Result, default_target_names};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "langcov",
    about = "Estimate language coverage from free-text country language demographics",
    version
)]
struct Cli {
    #[command(flatten)]
    tuning: Tuning,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every language mentioned in a details text.
    Extract {
        /// Language details, e.g. "French (official) 80%, Creole 20%".
        text: String,
    },

    /// Estimate coverage of one details text.
    Estimate {
        text: String,
        #[command(flatten)]
        targets: Targets,
    },

    /// Estimate coverage for countries of a details CSV.
    Audience {
        /// CSV with Code, Name, Languages, Population, Language_Details.
        #[arg(long)]
        data: PathBuf,
        /// Country codes, e.g. US FR DE.
        #[arg(required = true)]
        codes: Vec<String>,
        #[command(flatten)]
        targets: Targets,
    },
}

#[derive(Debug, Args)]
struct Targets {
    /// Target language (repeatable). Defaults to English and Chinese.
    #[arg(short = 't', long = "target")]
    targets: Vec<String>,
}

impl Targets {
    fn resolve(self) -> Vec<String> {
        if self.targets.is_empty() {
            default_target_names().into_iter().map(String::from).collect()
        } else {
            self.targets
        }
    }
}

#[derive(Debug, Args)]
struct Tuning {
    /// Smallest share reported as a missing language.
    #[arg(long, global = true)]
    materiality: Option<f64>,
    /// Character offset before which a first mention counts as primary.
    #[arg(long, global = true)]
    primary_offset: Option<usize>,
}

impl Tuning {
    fn build(&self) -> Result<Estimator> {
        let mut builder = Estimator::builder();
        if let Some(m) = self.materiality {
            builder = builder.materiality(m);
        }
        if let Some(o) = self.primary_offset {
            builder = builder.primary_offset(o);
        }
        Ok(builder.build()?)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let estimator = cli.tuning.build()?;

    match cli.command {
        Commands::Extract { text } => print_json(&estimator.extract_languages(&text)),
        Commands::Estimate { text, targets } => {
            let targets = targets.resolve();
            print_json(&estimator.estimate_coverage(&text, &targets))
        }
        Commands::Audience {
            data,
            codes,
            targets,
        } => {
            let table = CountryTable::from_path(&data)?;
            let targets = targets.resolve();
            print_json(&estimator.audience_report(&table, &codes, &targets))
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
