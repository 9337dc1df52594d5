//! Command Line Interface module
//!
//! Handles command-line argument parsing using clap
//!

use crate::matcher::MatchOptions;
use clap::Parser;
use std::path::PathBuf;

/// RegExplorer - interactive regular expression tester
#[derive(Parser, Debug)]
#[command(
    name = "regexplorer",
    about = "RegExplorer - interactive regular expression tester",
    long_about = "RegExplorer - Rust based TUI that highlights every match of a regular expression
    in a text and lets you step through the matches

    EXAMPLES:
        regexplorer                         # Start with an empty text
        regexplorer notes.txt               # Load the text from a file
        regexplorer notes.txt -p \"\\d+\"     # Start with a pattern
        regexplorer -i notes.txt            # Case insensitive matching

    USAGE TIP:
        Tab switches between pattern and text, Up/Down step through matches,
        Ctrl+O opens a file
    "
)]
#[command(version)]
pub struct Cli {
    /// File to load as the text to match against
    #[arg(help = "File to load as the text to match against")]
    pub file: Option<PathBuf>,

    /// Initial pattern
    #[arg(short, long, help = "Initial regular expression")]
    pub pattern: Option<String>,

    /// Case insensitive matching
    #[arg(short, long, help = "Case insensitive matching")]
    pub ignore_case: bool,

    /// Disable multi-line anchors
    #[arg(long, help = "Make ^ and $ match only at the start and end of the text")]
    pub no_multiline: bool,

    /// Treat whitespace in the pattern literally
    #[arg(
        long,
        help = "Treat whitespace in the pattern literally (extended mode is on by default)"
    )]
    pub no_extended: bool,

    /// debug mode
    #[arg(
        short,
        long,
        help = "Debug mode (logging to a temp file with timestamps)"
    )]
    pub debug: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate command line arguments
    pub fn validate(&self) -> bool {
        if let Some(file) = &self.file {
            if !file.exists() {
                eprintln!("Error: File does not exist: {}", file.display());
                return false;
            }
            if !file.is_file() {
                eprintln!("Error: Path must be a file: {}", file.display());
                return false;
            }
        }

        true
    }

    /// Matcher options selected on the command line
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            multiline: !self.no_multiline,
            ignore_whitespace: !self.no_extended,
            case_insensitive: self.ignore_case,
        }
    }

    /// Initial pattern, empty when none was given
    pub fn initial_pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_cli(file: Option<PathBuf>, pattern: Option<&str>) -> Cli {
        Cli {
            file,
            pattern: pattern.map(|p| p.to_string()),
            ignore_case: false,
            no_multiline: false,
            no_extended: false,
            debug: false,
        }
    }

    #[test]
    fn test_no_file_is_valid() {
        let cli = create_test_cli(None, None);
        assert!(cli.validate());
    }

    #[test]
    fn test_existing_file_is_valid() {
        let file = NamedTempFile::new().unwrap();
        let cli = create_test_cli(Some(file.path().to_path_buf()), None);
        assert!(cli.validate());
    }

    #[test]
    fn test_missing_file_is_invalid() {
        let cli = create_test_cli(Some(PathBuf::from("/path/to/missing/file.txt")), None);
        assert!(!cli.validate());
    }

    #[test]
    fn test_directory_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let cli = create_test_cli(Some(dir.path().to_path_buf()), None);
        assert!(!cli.validate());
    }

    #[test]
    fn test_default_match_options() {
        let cli = create_test_cli(None, None);
        assert_eq!(cli.match_options(), MatchOptions::default());
    }

    #[test]
    fn test_flag_match_options() {
        let mut cli = create_test_cli(None, None);
        cli.ignore_case = true;
        cli.no_multiline = true;
        cli.no_extended = true;

        let options = cli.match_options();
        assert!(options.case_insensitive);
        assert!(!options.multiline);
        assert!(!options.ignore_whitespace);
    }

    #[test]
    fn test_initial_pattern() {
        assert_eq!(create_test_cli(None, None).initial_pattern(), "");
        assert_eq!(create_test_cli(None, Some(r"\d+")).initial_pattern(), r"\d+");
    }

    #[test]
    fn test_parse_from_arguments() {
        let cli = Cli::parse_from(["regexplorer", "notes.txt", "-p", "abc", "-i", "--no-extended"]);
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.initial_pattern(), "abc");
        assert!(cli.ignore_case);
        assert!(cli.no_extended);
        assert!(!cli.no_multiline);
        assert!(!cli.debug);
    }
}
