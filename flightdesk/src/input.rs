//! Interactive field prompts with validation and bounded re-prompting.
//!
//! A [`Prompter`] reads answers from any [`BufRead`] and writes prompts to
//! any [`Write`], so the same code drives a terminal session and a scripted
//! test. Every rejected answer prints the reason and asks again. With a retry
//! limit set, a field that keeps failing ends with
//! [`Error::RetriesExhausted`]; end of input always ends with
//! [`Error::InputClosed`].

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::date::FlightDate;
use crate::entity::fields::{check_phone, IntRule, TextRule};
use crate::entity::ValidationError;
use crate::error::{Error, Result};

#[cfg(test)]
mod proptests;

/// Shown after an answer that is neither y nor n.
pub const YES_NO_HINT: &str = "Please try again. Enter y for yes and n for no.";
/// Shown after a line that is not valid UTF-8.
pub const UNREADABLE: &str = "Please re-enter. The answer is not valid text.";
/// Shown after a menu choice that is not offered.
pub const INVALID_CHOICE: &str = "Your input is invalid!";

/// Parses one answer as an integer, naming `label` in the message when it is
/// not one.
///
/// # Errors
///
/// Returns the message to show when `answer` is not an integer.
///
/// # Examples
///
/// ```
/// use flightdesk::input::parse_int;
///
/// assert_eq!(parse_int(" 42 ", "The age"), Ok(42));
/// assert_eq!(
///     parse_int("forty", "The age"),
///     Err("The age must be an integer.".to_string())
/// );
/// ```
pub fn parse_int(answer: &str, label: &str) -> std::result::Result<i64, String> {
    answer
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("{label} must be an integer."))
}

/// Parses a y/n answer. Case-insensitive; surrounding spaces are ignored.
#[must_use]
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim() {
        a if a.eq_ignore_ascii_case("y") => Some(true),
        a if a.eq_ignore_ascii_case("n") => Some(false),
        _ => None,
    }
}

fn reenter(err: &ValidationError) -> String {
    format!("Please re-enter. {}", err.message)
}

/// Reads validated field values from an input source.
///
/// # Examples
///
/// ```
/// use std::io::Cursor;
/// use flightdesk::entity::fields::PLANE_SEATS;
/// use flightdesk::input::Prompter;
///
/// let mut out = Vec::new();
/// let mut prompter = Prompter::new(Cursor::new("0\n180\n"), &mut out);
/// let seats = prompter.read_int("Seats: ", &PLANE_SEATS).unwrap();
/// assert_eq!(seats, 180);
///
/// let shown = String::from_utf8(out).unwrap();
/// assert!(shown.contains("Please re-enter. The plane's seat capacity must be between 1 and 499."));
/// ```
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter that re-prompts without limit.
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Limits how many invalid answers a single field accepts before giving
    /// up. `None` means no limit.
    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// The configured retry limit.
    pub const fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }

    /// The output sink, for printing results between prompts.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Gives back the input source and output sink.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes one line to the output.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Shows `prompt` and reads one line, without the line ending.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, a validation error if
    /// the line is not UTF-8, or an I/O error.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.read_answer(prompt)?
            .map_err(|_| ValidationError::new("answer", "the answer is not valid UTF-8").into())
    }

    /// Reads one raw line. The inner `Err` carries the message for a line
    /// that does not decode.
    fn read_answer(&mut self, prompt: &str) -> Result<std::result::Result<String, String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(Error::InputClosed);
        }
        while matches!(bytes.last(), Some(b'\n' | b'\r')) {
            bytes.pop();
        }
        Ok(String::from_utf8(bytes).map_err(|_| UNREADABLE.to_string()))
    }

    /// Asks for `field` until `parse` accepts the answer.
    ///
    /// `parse` returns the complete message to print when it rejects an
    /// answer. A line that is not UTF-8 counts as a rejected answer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RetriesExhausted`] once the retry limit is reached,
    /// [`Error::InputClosed`] at end of input, or an I/O error.
    pub fn ask<T>(
        &mut self,
        field: &str,
        prompt: &str,
        mut parse: impl FnMut(&str) -> std::result::Result<T, String>,
    ) -> Result<T> {
        let mut attempts = 0u32;
        loop {
            let outcome = self.read_answer(prompt)?.and_then(|answer| parse(&answer));
            match outcome {
                Ok(value) => return Ok(value),
                Err(message) => {
                    attempts += 1;
                    log::debug!("rejected {field} (attempt {attempts}): {message}");
                    self.say(&message)?;
                    if self.max_attempts.is_some_and(|max| attempts >= max) {
                        return Err(Error::RetriesExhausted {
                            field: field.to_string(),
                            attempts,
                        });
                    }
                }
            }
        }
    }

    /// Reads an integer within `rule`.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_int(&mut self, prompt: &str, rule: &IntRule) -> Result<i64> {
        self.ask(rule.field, prompt, |answer| {
            let value = parse_int(answer, rule.label).map_err(|m| format!("Please re-enter. {m}"))?;
            rule.check(value).map_err(|e| reenter(&e))?;
            Ok(value)
        })
    }

    /// Reads a record id. Any non-negative integer is accepted; whether the
    /// record exists is up to the caller.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_id(&mut self, prompt: &str, entity: &str) -> Result<i64> {
        self.ask("id", prompt, |answer| {
            let value = answer
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("Please re-enter. The {entity} ID is an integer."))?;
            if value < 0 {
                return Err(format!("Please re-enter. The {entity} ID cannot be negative."));
            }
            Ok(value)
        })
    }

    /// Reads text that satisfies `rule`. Surrounding spaces are removed.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_text(&mut self, prompt: &str, rule: &TextRule) -> Result<String> {
        self.ask(rule.field, prompt, |answer| {
            let value = answer.trim();
            rule.check(value).map_err(|e| reenter(&e))?;
            Ok(value.to_string())
        })
    }

    /// Reads a phone number of ten digits, or an empty answer.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_phone(&mut self, prompt: &str) -> Result<String> {
        self.ask("phone", prompt, |answer| {
            let value = answer.trim();
            check_phone(value).map_err(|e| reenter(&e))?;
            Ok(value.to_string())
        })
    }

    /// Reads one of an enumerated set of codes.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_code<T>(&mut self, field: &str, prompt: &str) -> Result<T>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.ask(field, prompt, |answer| answer.parse::<T>().map_err(|e| reenter(&e)))
    }

    /// Reads a y/n answer.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        self.ask("answer", prompt, |answer| {
            parse_yes_no(answer).ok_or_else(|| YES_NO_HINT.to_string())
        })
    }

    /// Reads a date one component at a time after printing `heading`.
    ///
    /// The day is checked against the month and year already entered, so
    /// February 29 is only accepted in leap years.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_date(&mut self, heading: &str) -> Result<FlightDate> {
        self.say(heading)?;
        let year = self.ask("year", "Year: ", |answer| {
            let value = parse_int(answer, "The year").map_err(|m| format!("Please re-enter. {m}"))?;
            FlightDate::check_year(value).map_err(|e| reenter(&e))
        })?;
        let month = self.ask("month", "Month: ", |answer| {
            let value = parse_int(answer, "The month").map_err(|m| format!("Please re-enter. {m}"))?;
            FlightDate::check_month(value).map_err(|e| reenter(&e))
        })?;
        let day = self.ask("day", "Day: ", |answer| {
            let value = parse_int(answer, "The day").map_err(|m| format!("Please re-enter. {m}"))?;
            FlightDate::check_day(year, month, value).map_err(|e| reenter(&e))
        })?;
        Ok(FlightDate::from_ymd(year, month, day)?)
    }

    /// Reads a menu choice between `first` and `last` inclusive.
    ///
    /// # Errors
    ///
    /// See [`Prompter::ask`].
    pub fn read_choice(&mut self, prompt: &str, first: u32, last: u32) -> Result<u32> {
        self.ask("choice", prompt, |answer| {
            answer
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|choice| (first..=last).contains(choice))
                .ok_or_else(|| INVALID_CHOICE.to_string())
        })
    }
}
