//! `setcal` reads a description of a universe, some sets and relations over
//! it, and commands that compute with them. The `Calculator` walks the lines
//! in order; `run` prints what it produces. The `input` module hides file
//! details and the `args` module parses the command line.
//!
//! Input lines are tagged by their first character:
//! * `U a b c` declares the universe (first line, exactly once),
//! * `S a b` declares a set,
//! * `R (a b) (b c)` declares a relation,
//! * `C union 2 3` runs a command whose operands are line numbers.
//!
//! Declarations are echoed; each command prints its result. The first error
//! stops the run, and what was already printed stays printed.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

use anyhow::Result;
use std::io;
use std::slice;
use tracing::debug;

pub mod args;
pub mod calculate;
pub mod command;
pub mod error;
pub mod input;
pub mod keywords;
pub mod limits;
pub mod operations;
pub mod output;
pub mod properties;
pub mod relation;
pub mod set;

use crate::calculate::{calculate, Operands};
use crate::command::Command;
use crate::error::{Error, ErrorKind};
use crate::input::{Line, LineKind};
use crate::limits::Limits;
use crate::output::Outcome;
use crate::relation::Relation;
use crate::set::ElementSet;

/// What one line contributes to the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printed<'a> {
    /// A declaration, echoed verbatim
    Echo(&'a Line),
    /// The result of the command on the given line
    Result(&'a Line, Outcome),
}

impl Printed<'_> {
    /// Writes this output. Echoes always end with a newline; a command's
    /// result does too, unless its line is the last of `line_count` lines.
    pub fn write_to(&self, out: &mut impl io::Write, line_count: usize) -> io::Result<()> {
        match self {
            Printed::Echo(line) => writeln!(out, "{}", line.text),
            Printed::Result(line, outcome) => {
                write!(out, "{outcome}")?;
                if line.number != line_count {
                    writeln!(out)?;
                }
                Ok(())
            }
        }
    }
}

/// Walks the input lines in order, yielding what each one prints. After the
/// first error it yields nothing more.
pub struct Calculator<'a> {
    all: &'a [Line],
    remaining: std::iter::Enumerate<slice::Iter<'a, Line>>,
    limits: Limits,
    universe: Option<ElementSet>,
    failed: bool,
}

impl<'a> Calculator<'a> {
    /// Checks the shape of the whole input before anything is printed: the
    /// line count against `limits`, a universe on the first line, and the
    /// ordering of declarations and commands.
    pub fn new(lines: &'a [Line], limits: Limits) -> Result<Calculator<'a>, Error> {
        if lines.len() > limits.max_lines {
            return Err(Error::at(limits.max_lines + 1, ErrorKind::LineLimitExceeded));
        }
        match lines.first() {
            Some(line) if line.kind == LineKind::Universe => {}
            _ => return Err(Error::at(1, ErrorKind::SetSyntax)),
        }
        check_layout(lines)?;
        Ok(Calculator {
            all: lines,
            remaining: lines.iter().enumerate(),
            limits,
            universe: None,
            failed: false,
        })
    }

    fn universe(&self) -> Result<&ElementSet, ErrorKind> {
        self.universe.as_ref().ok_or(ErrorKind::SetSyntax)
    }

    fn process(&mut self, index: usize, line: &'a Line) -> Result<Printed<'a>, ErrorKind> {
        let max_len = self.limits.max_element_len;
        match line.kind {
            LineKind::Universe => {
                if self.universe.is_some() {
                    return Err(ErrorKind::DuplicateUniverse);
                }
                let universe = ElementSet::parse(&line.text, None, max_len)?;
                debug!(size = universe.len(), "universe established");
                self.universe = Some(universe);
                Ok(Printed::Echo(line))
            }
            LineKind::Set => {
                ElementSet::parse(&line.text, Some(self.universe()?), max_len)?;
                Ok(Printed::Echo(line))
            }
            LineKind::Relation => {
                Relation::parse(&line.text, self.universe()?, max_len)?;
                Ok(Printed::Echo(line))
            }
            LineKind::Command => {
                let command = Command::parse(&line.text)?;
                let operands = Operands::new(&self.all[..index], self.universe()?, self.limits);
                let outcome = calculate(&command, &operands)?;
                Ok(Printed::Result(line, outcome))
            }
            LineKind::Unrecognized => Err(ErrorKind::CommandSyntax),
        }
    }
}

/// Declarations must all come before the first command, and there must be at
/// least one declaration and one command. A set or relation after a command is
/// reported on its own line; a missing declaration on the first command; a
/// missing command on the last line.
fn check_layout(lines: &[Line]) -> Result<(), Error> {
    let mut first_command = None;
    let mut declared = false;
    for line in lines {
        match line.kind {
            LineKind::Command => {
                if first_command.is_none() {
                    first_command = Some(line.number);
                }
            }
            LineKind::Set | LineKind::Relation => {
                if first_command.is_some() {
                    return Err(Error::at(line.number, ErrorKind::CommandSyntax));
                }
                declared = true;
            }
            LineKind::Universe | LineKind::Unrecognized => {}
        }
    }
    match first_command {
        None => Err(Error::at(lines.len(), ErrorKind::CommandSyntax)),
        Some(number) if !declared => Err(Error::at(number, ErrorKind::CommandSyntax)),
        Some(_) => Ok(()),
    }
}

impl<'a> Iterator for Calculator<'a> {
    type Item = Result<Printed<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (index, line) = self.remaining.next()?;
        let result = self.process(index, line).map_err(|kind| Error::at(line.number, kind));
        if let Err(err) = &result {
            debug!(%err, "stopping");
            self.failed = true;
        }
        Some(result)
    }
}

/// Evaluates `lines` and writes the output to `out` as it is produced. On the
/// first error, `out` is flushed and the error returned; nothing already
/// written is taken back.
pub fn run(lines: &[Line], limits: Limits, mut out: impl io::Write) -> Result<()> {
    for printed in Calculator::new(lines, limits)? {
        match printed {
            Ok(printed) => printed.write_to(&mut out, lines.len())?,
            Err(err) => {
                out.flush()?;
                return Err(err.into());
            }
        }
    }
    out.flush()?;
    Ok(())
}
