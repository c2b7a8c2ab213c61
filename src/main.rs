use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use setcal::error::{Error, ErrorKind};
use setcal::limits::Limits;

fn main() -> ExitCode {
    init_logging();
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("setcal: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

fn try_main() -> Result<()> {
    let args = setcal::args::parsed()?;
    let lines = setcal::input::read_lines(&args.file)?;

    if io::stdout().is_terminal() {
        setcal::run(&lines, Limits::default(), io::stdout().lock())
    } else {
        setcal::run(&lines, Limits::default(), io::BufWriter::new(io::stdout().lock()))
    }
}

/// Failures outside the fixed set of kinds (a closed stdout, say) exit with 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<Error>() {
        err.kind.code()
    } else if let Some(kind) = err.downcast_ref::<ErrorKind>() {
        kind.code()
    } else {
        1
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SETCAL_LOG").unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}
