/// Print the character table of a font metrics JSON file as `CharCoord` literals
///
/// Reads the `characters` object of an atlas description (as written by
/// bitmap font generators) and prints one line per character, in file
/// order, ready to paste into a `[CharCoord; N]` table.
mod utils;
use crate::utils::die;
use charcoord_lib::{export, read_document};
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The font metrics JSON file to read
    #[clap(default_value = "font.json")]
    font_json: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let document =
        read_document(&cli.font_json).unwrap_or_else(|e| die("reading font metrics", e));

    // Stdout is line buffered, so lines already written survive a later die()
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = export(&document, &mut out) {
        die("exporting character table", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_path() {
        let cli = Cli::try_parse_from(["charcoord"]).unwrap();
        assert_eq!(cli.font_json, PathBuf::from("font.json"));
    }

    #[test]
    fn test_explicit_path() {
        let cli = Cli::try_parse_from(["charcoord", "atlas/white.json"]).unwrap();
        assert_eq!(cli.font_json, PathBuf::from("atlas/white.json"));
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["charcoord", "a.json", "b.json"]).is_err());
    }
}
