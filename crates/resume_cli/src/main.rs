//! Interactive resume builder.
//!
//! # Responsibility
//! - Own every terminal interaction; `resume_core` never does I/O.
//! - Map argument errors to exit code 2; everything else is recoverable.

mod args;
mod prompt;
mod session;

use args::{parse_args, Command, USAGE};
use prompt::Prompter;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let command = match parse_args(std::env::args().skip(1), |key| std::env::var(key).ok()) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let options = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("resume {}", resume_core::core_version());
            return ExitCode::SUCCESS;
        }
        Command::Run(options) => options,
    };

    if let Some(log_dir) = options.log_dir.as_deref() {
        // Logging is best-effort; the session runs without it.
        if let Err(err) = resume_core::init_logging(&options.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout().lock());
    match session::run(&mut prompter, &options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_end module=cli status=error kind={:?}", err.kind());
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
