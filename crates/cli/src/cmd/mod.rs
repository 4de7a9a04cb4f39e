pub mod check;
pub mod generate;
pub mod vars;

use std::fmt::Display;

use crate::logging;

/// Print the failure banner and exit with status 1, flushing the log file first.
pub fn fail(command: &str, err: impl Display) -> ! {
    println!("FAIL roledoc {command}");
    println!("{err}");
    logging::shutdown();
    std::process::exit(1);
}
