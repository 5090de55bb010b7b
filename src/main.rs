//! gitstamp binary entry point.

use std::process::ExitCode;

use gitstamp::ui::output;

fn main() -> ExitCode {
    match gitstamp::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
