use colored::Colorize;
use std::error::Error;

pub(crate) fn die(doing: &str, err: impl Error) -> ! {
    eprintln!("{} {}: {}", "Error".red().bold(), doing, err);
    if let Some(cause) = err.source() {
        eprintln!();
        eprintln!("Caused by:");
        for (i, e) in std::iter::successors(Some(cause), |e| (*e).source()).enumerate() {
            eprintln!("   {}: {}", i, e);
        }
    }
    std::process::exit(1);
}
