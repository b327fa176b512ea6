// std imports
use std::io::stdout;
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use pathmatch::{app, cli, config, error::*, settings::Settings};

const PATHMATCH_DEBUG_LOG: &str = "PATHMATCH_DEBUG_LOG";
const PATHMATCH_DEBUG_LOG_STYLE: &str = "PATHMATCH_DEBUG_LOG_STYLE";

// ---

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    if std::env::var(PATHMATCH_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(PATHMATCH_DEBUG_LOG)
                .write_style(PATHMATCH_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }

    let settings = if opt.config.is_empty() {
        config::load()?
    } else {
        config::at(&opt.config).load()?
    };
    config::global::initialize(settings.clone());

    Ok(settings)
}

fn run() -> Result<bool> {
    let opt = cli::Opt::parse();
    let settings = bootstrap(&opt)?;
    app::run(&opt, &settings, &mut stdout().lock())
}

fn main() {
    let result = run();
    if let Err(err) = &result {
        eprintln!("{}: {}", config::APP_NAME, err);
    }
    process::exit(app::exit_code(&result));
}
