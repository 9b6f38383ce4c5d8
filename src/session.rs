use std::io::{self, Write};

use crate::environment::Environment;
use crate::statement::execute;

pub const BANNER: &str = "Enter your statements to evaluate. Statements should end with ';'\n\
                          Enter \"run\" to evaluate given statements or \"exit\" to end program";

#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    run,
    exit,
    blank,
    statement(&'a str),
}

impl<'a> Command<'a> {
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("run") {
            Self::run
        } else if trimmed.eq_ignore_ascii_case("exit") {
            Self::exit
        } else if trimmed.is_empty() {
            Self::blank
        } else {
            Self::statement(line)
        }
    }
}

/// What the caller should do after a line was fed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    proceed,
    report,
    quit,
}

#[derive(Default)]
pub struct Session {
    variables: Environment,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &Environment {
        &self.variables
    }

    /// Handles one input line, writing rejection messages to `errors`.
    pub fn feed<W: Write>(&mut self, line: &str, errors: &mut W) -> io::Result<Flow> {
        match Command::classify(line) {
            Command::run => Ok(Flow::report),
            Command::exit => Ok(Flow::quit),
            Command::blank => Ok(Flow::proceed),
            Command::statement(line) => {
                if let Err(failures) = execute(line, &mut self.variables) {
                    tracing::debug!(line, count = failures.len(), "rejected");
                    for failure in failures {
                        writeln!(errors, "Error: {}", failure)?;
                    }
                    writeln!(errors, "Previous entry will not be recorded")?;
                }
                Ok(Flow::proceed)
            },
        }
    }

    pub fn report(&self) -> String {
        format!("\nResults\n{}", self.variables)
    }
}
