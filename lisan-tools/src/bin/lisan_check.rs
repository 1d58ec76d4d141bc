use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use lisan::Locale;
use lisan_tools::{
    check,
    config::{ToolsConfig, CONFIG_FILE_NAME},
};

/// Check that the translation resources of every locale have the same keys.
#[derive(Parser, Debug)]
#[command(name = "lisan-check", version)]
struct Cli {
    /// The configuration file.
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    /// The directory containing `<code>.json` (overrides the configuration).
    #[arg(short, long)]
    lang_dir: Option<PathBuf>,

    /// Only check these locales (overrides the configuration).
    #[arg(long, value_delimiter = ',')]
    locale: Vec<String>,

    /// Also check the `data-key` attributes of these HTML pages.
    #[arg(long)]
    page: Vec<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let mut config = match ToolsConfig::read(&cli.config) {
        Ok(x) => x,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::from(2);
        }
    };
    if let Some(dir) = cli.lang_dir {
        config.lang_dir = dir;
    }
    if !cli.locale.is_empty() {
        let locales: Result<Vec<Locale>, _> = cli.locale.iter().map(|x| x.parse()).collect();
        config.locales = match locales {
            Ok(x) => x,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::from(2);
            }
        };
    }
    config.pages.extend(cli.page);
    log::debug!("{:?}", config);
    let report = check::run(&config);
    print!("{}", report);
    if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
