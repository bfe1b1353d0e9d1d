//! Interactive resume-building session.
//!
//! # Responsibility
//! - Collect owner and job values through `Prompter`.
//! - Hand every value to `ResumeService` and report its outcome.
//! - Print the final summary in the chosen style.
//!
//! # Invariants
//! - Core errors are reported and the loop continues; they never end the session.
//! - EOF at any prompt ends input and still prints what was collected.

use crate::args::CliOptions;
use crate::prompt::Prompter;
use log::info;
use resume_core::{ResumeService, SummaryStyle};
use std::io::{self, BufRead, Write};

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// Runs one session; returns the service so callers can inspect the result.
pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    options: &CliOptions,
) -> io::Result<Option<ResumeService>> {
    let mut service = loop {
        let Some(name) = prompter.read_non_empty("Enter your name")? else {
            return Ok(None);
        };
        match ResumeService::new(&name) {
            Ok(service) => break service,
            Err(err) => prompter.say(format!("  -> {err}"))?,
        }
    };

    prompter.say("")?;
    prompter.say(
        "Let's enter your jobs. Years may touch (e.g., 2020–2022 and 2022–2024), but they cannot overlap.",
    )?;

    while collect_job(prompter, &mut service)? {
        match prompter.read_yes_no("Do you want to add another job?", false)? {
            Some(true) => continue,
            Some(false) | None => break,
        }
    }

    prompter.say("")?;
    let style = match options.style {
        Some(style) => style,
        None => match prompter.read_yes_no("Use boxed summary style?", true)? {
            Some(false) => SummaryStyle::Simple,
            Some(true) | None => SummaryStyle::Boxed,
        },
    };

    info!(
        "event=summary_render module=cli status=ok style={} records={}",
        style,
        service.timeline().len()
    );
    prompter.say("")?;
    for line in service.render(style, options.max_width) {
        prompter.say(line)?;
    }

    Ok(Some(service))
}

/// Asks for one job. Returns `false` when input ended mid-way.
fn collect_job<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    service: &mut ResumeService,
) -> io::Result<bool> {
    prompter.say("")?;
    prompter.say("Add a new job:")?;

    let Some(company) = prompter.read_non_empty("  Company")? else {
        return Ok(false);
    };
    let Some(title) = prompter.read_non_empty("  Title")? else {
        return Ok(false);
    };
    let Some(start) = prompter.read_int("  Start year", MIN_YEAR, MAX_YEAR)? else {
        return Ok(false);
    };
    let Some(end) = prompter.read_int("  End year", start, MAX_YEAR)? else {
        return Ok(false);
    };

    match service.add_job(&company, &title, start, end) {
        Ok(_) => prompter.say("  -> Job added.")?,
        Err(err) => prompter.say(format!("  -> Could not add job: {err}"))?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::args::CliOptions;
    use crate::prompt::Prompter;
    use resume_core::SummaryStyle;
    use std::io::Cursor;

    fn options(style: Option<SummaryStyle>) -> CliOptions {
        CliOptions {
            style,
            max_width: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    fn session(input: &str, style: Option<SummaryStyle>) -> (Option<usize>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let service = run(&mut prompter, &options(style)).unwrap();
        let text = String::from_utf8(prompter.into_output()).unwrap();
        (service.map(|s| s.timeline().len()), text)
    }

    #[test]
    fn overlap_is_reported_and_session_continues() {
        let input = "Jamie\n\
            Acme\nEngineer\n2020\n2023\ny\n\
            Globex\nLead\n2022\n2024\ny\n\
            Globex\nLead\n2023\n2024\nn\n";
        let (count, text) = session(input, Some(SummaryStyle::Simple));

        assert_eq!(count, Some(2));
        assert!(text.contains(
            "  -> Could not add job: the period 2022–2024 overlaps with 2020–2023"
        ));
        assert_eq!(text.matches("  -> Job added.").count(), 2);
        assert!(text.contains(
            "Resume for: Jamie\nEngineer @ Acme (2020–2023)\nLead @ Globex (2023–2024)\n"
        ));
    }

    #[test]
    fn style_prompt_defaults_to_boxed() {
        let input = "Jamie\nAcme\nEngineer\n2020\n2022\n\n\n";
        let (count, text) = session(input, None);

        assert_eq!(count, Some(1));
        assert!(text.contains("Use boxed summary style? [Y/n]: "));
        assert!(text.contains("╔"));
        assert!(text.contains("Years: 2020–2022"));
    }

    #[test]
    fn end_year_cannot_precede_start_year() {
        let input = "Jamie\nAcme\nEngineer\n2020\n2019\n2021\nn\nn\n";
        let (count, text) = session(input, None);

        assert_eq!(count, Some(1));
        assert!(text.contains("Must be >= 2020."));
        assert!(text.contains("Engineer @ Acme (2020–2021)"));
    }

    #[test]
    fn eof_before_name_ends_without_summary() {
        let (count, text) = session("", None);
        assert_eq!(count, None);
        assert!(!text.contains("Resume for"));
    }

    #[test]
    fn eof_mid_job_still_prints_summary() {
        let (count, text) = session("Jamie\nAcme\n", Some(SummaryStyle::Boxed));
        assert_eq!(count, Some(0));
        assert!(text.contains("No jobs registered."));
    }
}
