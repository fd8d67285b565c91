// std imports
use std::{
    io::{self, IsTerminal, stdin, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};

// local imports
use globfold::{
    app::{App, Options, Outcome},
    cli,
    error::*,
    settings::Settings,
};

const GLOBFOLD_DEBUG_LOG: &str = "GLOBFOLD_DEBUG_LOG";
const GLOBFOLD_DEBUG_LOG_STYLE: &str = "GLOBFOLD_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(GLOBFOLD_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(GLOBFOLD_DEBUG_LOG)
                .write_style(GLOBFOLD_DEBUG_LOG_STYLE),
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
}

fn run() -> Result<Outcome> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = Settings::load(opt.config.as_deref())?;
    log::debug!("settings: {:?}", settings);

    let concurrency = match opt.concurrency.or(settings.concurrency) {
        None | Some(0) => num_cpus::get(),
        Some(value) => value,
    };

    let app = App::new(
        opt.patterns,
        Options {
            ignore_case: opt.ignore_case || settings.ignore_case,
            match_all: opt.match_all || settings.match_all,
            invert: opt.invert_match,
            count: opt.count,
            concurrency,
            chunk_size: settings.chunk_size,
        },
    )?;

    let stdout = stdout();
    let mut output = stdout.lock();

    let result = if !opt.subjects.is_empty() {
        app.run(&opt.subjects, &mut output)
    } else if stdin().is_terminal() {
        log::debug!("no subjects given and standard input is a terminal");
        let mut cmd = cli::Opt::command();
        cmd.print_help()?;
        return Ok(Outcome::Help);
    } else {
        app.run_lines(stdin().lock(), &mut output)
    };

    match result {
        Ok(selected) => Ok(Outcome::Selected(selected)),
        Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe => Ok(Outcome::Closed),
        Err(err) => Err(err),
    }
}

fn main() {
    match run() {
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
