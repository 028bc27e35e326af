use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::height::parser::parse_height;
use crate::shell::config::Config;
use crate::shell::report::Report;
use crate::units::error::NormalizeResult;
use crate::weight::parser::parse_weight;

pub const WEIGHT_PROMPT: &str = "Enter Weight (e.g., 70kg, 11st 6, 150 lbs): ";
pub const HEIGHT_PROMPT: &str = "Enter Height (e.g., 180cm, 5'11, 1.8m): ";
pub const AGAIN_PROMPT: &str = "Process another patient? (y/n): ";

/// Outcome of one prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// Quit word typed, or input ran out
    Quit,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Reports printed before the session ended
    pub reports: usize,
    /// Inputs rejected and asked again
    pub retries: usize,
}

/// Interactive read loop over any line source and sink.
///
/// Parse failures never leave the loop: the message is shown and the same
/// question is asked again.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            config,
            summary: SessionSummary::default(),
        }
    }

    pub fn run(&mut self) -> io::Result<SessionSummary> {
        self.print_banner()?;

        loop {
            let weight = match self.prompt_until_valid(WEIGHT_PROMPT, parse_weight)? {
                Prompted::Value(weight) => weight,
                Prompted::Quit => return self.quit(),
            };

            let height = match self.prompt_until_valid(HEIGHT_PROMPT, parse_height)? {
                Prompted::Value(height) => height,
                Prompted::Quit => return self.quit(),
            };

            let report = Report::new(weight, height);
            write!(self.output, "{}", report.render(&self.config.report))?;
            self.summary.reports += 1;
            info!(reports = self.summary.reports, "report printed");

            let again = self.read_line(AGAIN_PROMPT)?;
            if !matches!(again.as_deref().map(str::trim), Some(a) if a.eq_ignore_ascii_case("y")) {
                writeln!(self.output, "Goodbye.")?;
                self.output.flush()?;
                return Ok(self.summary);
            }
        }
    }

    /// Ask until `parse` accepts the answer or the user quits
    pub fn prompt_until_valid<T>(
        &mut self,
        prompt: &str,
        parse: fn(&str) -> NormalizeResult<T>,
    ) -> io::Result<Prompted<T>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(Prompted::Quit),
            };
            let data = line.trim();

            if self.config.is_quit_word(data) {
                return Ok(Prompted::Quit);
            }

            match parse(data) {
                Ok(value) => return Ok(Prompted::Value(value)),
                Err(e) => {
                    debug!(input = data, error = %e, "input rejected");
                    self.summary.retries += 1;
                    writeln!(self.output, "   [Error] {}", e)?;
                    writeln!(self.output, "   Please try again.")?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// `None` once the input is exhausted
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "\n{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn print_banner(&mut self) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "      CLINICAL DATA NORMALIZER (Interactive Mode)")?;
        writeln!(self.output, "      Type 'q' to quit at any time.")?;
        writeln!(self.output, "{}", rule)
    }

    fn quit(&mut self) -> io::Result<SessionSummary> {
        writeln!(self.output, "\nExiting...")?;
        self.output.flush()?;
        Ok(self.summary)
    }
}
