//! Time Warp IDE - CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use timewarp::backends::dev::repl::LineREPL;
use timewarp::backends::DryRunExecutor;
use timewarp::util::config::{self, UserConfig};
use timewarp::util::i18n::{t_cur, MSG};
use timewarp::util::logger;
use timewarp::{classify, validate, BatchFile, LanguageTag, NAME, VERSION};
use tracing::{debug, warn};

/// Educational multi-language programming environment
#[derive(Parser, Debug)]
#[command(name = "timewarp")]
#[command(author = "Time Warp Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive session (default)
    Repl,

    /// Run a whole file once as the given language
    Test {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Language to run it as
        #[arg(value_name = "LANG")]
        lang: LanguageTag,
    },

    /// Show advisory syntax diagnostics for a file
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Language to check as (default: detected)
        #[arg(short, long)]
        lang: Option<LanguageTag>,
    },

    /// Print the language detected for a piece of text
    Classify {
        /// Text to classify
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init_cli(args.verbose);

    if args.verbose {
        eprintln!("{} version: {}", NAME, VERSION);
        eprintln!("Host: {}", std::env::consts::OS);
    }

    match args.command.unwrap_or(Commands::Repl) {
        Commands::Repl => report(repl()),
        Commands::Test { file, lang } => {
            match test_file(&file, lang) {
                Ok(()) => {
                    println!("Test completed successfully");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    println!("Test failed: {:#}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Commands::Check { file, lang } => report(check(&file, lang)),
        Commands::Classify { text } => {
            println!("{}", classify(&text, None));
            ExitCode::SUCCESS
        }
    }
}

fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> UserConfig {
    match config::load_user_config() {
        Ok(config) => {
            if let Some(path) = config::get_config_path().filter(|p| p.exists()) {
                let path_str = path.display().to_string();
                debug!("{}", t_cur(MSG::ConfigLoaded, &[&path_str]));
            }
            config
        }
        Err(e) => {
            warn!("ignoring configuration: {}", e);
            UserConfig::default()
        }
    }
}

fn repl() -> Result<()> {
    let config = load_config();
    let mut repl = LineREPL::with_config(DryRunExecutor::new(), config.repl)
        .context("Failed to start the line editor")?;
    repl.run().context("REPL terminated")?;
    Ok(())
}

fn test_file(
    file: &Path,
    lang: LanguageTag,
) -> Result<()> {
    let batch = BatchFile::read(file)?;
    println!("Testing {} code from {}", lang, file.display());
    let execution = batch.run(&mut DryRunExecutor::new(), lang)?;
    print!("{}", execution.output);
    Ok(())
}

fn check(
    file: &Path,
    lang: Option<LanguageTag>,
) -> Result<()> {
    let source = fs::read_to_string(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;
    let extension = file.extension().and_then(|e| e.to_str());
    let tag = lang.unwrap_or_else(|| classify(&source, extension));

    let diagnostics = validate(&source, tag);
    println!("Checking {} as {}", file.display(), tag);
    if diagnostics.is_empty() {
        println!("No syntax issues found.");
    }
    for diagnostic in diagnostics {
        println!("{}", diagnostic);
    }
    Ok(())
}
