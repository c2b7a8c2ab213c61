//! Code to parse the command line using `clap`, and the definition of the
//! parsed result

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::debug;

use crate::error::ErrorKind;

/// The parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// `file` is the input to evaluate
    pub file: PathBuf,
}

#[derive(Debug, Parser)]
#[command(name = "setcal", version, about)]
/// `CliArgs` contains the command line as `clap` sees it.
struct CliArgs {
    #[arg(value_name = "INPUT")]
    /// File of universe, set, relation and command lines
    file: PathBuf,
}

/// Returns the parsed command line. `--help` and `--version` print and exit;
/// anything other than exactly one input path is `BadInvocation`.
pub fn parsed() -> Result<Args, ErrorKind> {
    parse_from(std::env::args_os())
}

/// Like [`parsed`], but with the arguments (program name first) given
/// explicitly.
pub fn parse_from<I, T>(args: I) -> Result<Args, ErrorKind>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    use clap::error::ErrorKind as ClapKind;
    match CliArgs::try_parse_from(args) {
        Ok(parsed) => Ok(Args { file: parsed.file }),
        Err(e) if matches!(e.kind(), ClapKind::DisplayHelp | ClapKind::DisplayVersion) => e.exit(),
        Err(e) => {
            debug!(reason = ?e.kind(), "rejected command line");
            Err(ErrorKind::BadInvocation)
        }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exactly_one_path_is_accepted() {
        let args = parse_from(["setcal", "input.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("input.txt"));
    }

    #[test]
    fn anything_else_is_a_bad_invocation() {
        assert_eq!(parse_from(["setcal"]), Err(ErrorKind::BadInvocation));
        assert_eq!(parse_from(["setcal", "a", "b"]), Err(ErrorKind::BadInvocation));
        assert_eq!(parse_from(["setcal", "--frobnicate", "a"]), Err(ErrorKind::BadInvocation));
    }
}
