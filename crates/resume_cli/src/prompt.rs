//! Line-based terminal prompts.
//!
//! # Responsibility
//! - Ask one question, re-asking until the answer is usable.
//! - Stay generic over reader/writer so sessions can be scripted in tests.
//!
//! # Invariants
//! - `Ok(None)` means the input reached EOF; callers stop asking.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one full line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", line.as_ref())
    }

    /// Asks until a non-blank answer arrives; returns it trimmed.
    pub fn read_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(&format!("{prompt}: "))? else {
                return Ok(None);
            };
            if !answer.is_empty() {
                return Ok(Some(answer));
            }
            self.say("  -> Please enter a non-empty value.")?;
        }
    }

    /// Asks until an integer inside `min..=max` arrives.
    pub fn read_int(&mut self, prompt: &str, min: i32, max: i32) -> io::Result<Option<i32>> {
        loop {
            let Some(answer) = self.ask(&format!("{prompt}: "))? else {
                return Ok(None);
            };
            match answer.parse::<i32>() {
                Ok(value) if value < min => self.say(format!("  -> Must be >= {min}."))?,
                Ok(value) if value > max => self.say(format!("  -> Must be <= {max}."))?,
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("  -> Please enter a valid integer.")?,
            }
        }
    }

    /// Asks a yes/no question; a blank answer picks `default_yes`.
    pub fn read_yes_no(&mut self, prompt: &str, default_yes: bool) -> io::Result<Option<bool>> {
        let suffix = if default_yes { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(answer) = self.ask(&format!("{prompt} {suffix}: "))? else {
                return Ok(None);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(Some(default_yes)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.say("  -> Please answer y/yes or n/no.")?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
