use std::path::PathBuf;

use clap::Parser;

use crate::generators::DigitAlphabet;
use crate::password::RawRequest;

/// Upper bound for `--count`.
pub const MAX_COUNT: usize = 10_000;

#[derive(Parser, Debug)]
#[command(
    name = "passcompose",
    version,
    about = "Generate a random password from digit, symbol and letter counts",
    long_about = r#"
Generate a random password of a given length containing exactly the requested
number of digits and special characters, at least the requested number of
letters, and letters for every remaining position. The characters are shuffled
so their category says nothing about their position.

Examples:
  passcompose -L 16 -n 2 -s 2 -l 4
  passcompose -L 12 -n 3 -s 0 -l 0 --digits one-to-nine --copy
  passcompose --interactive
"#
)]
pub struct Cli {
    /// Total password length
    #[arg(short = 'L', long, value_name = "N")]
    pub length: Option<String>,

    /// Number of digits
    #[arg(short = 'n', long, value_name = "N")]
    pub numbers: Option<String>,

    /// Number of special characters (ASCII punctuation)
    #[arg(short = 's', long, value_name = "N")]
    pub specials: Option<String>,

    /// Minimum number of letters; remaining positions are letters too
    #[arg(short = 'l', long, value_name = "N")]
    pub letters: Option<String>,

    /// Digits to draw from: zero-to-nine or one-to-nine
    #[arg(short = 'd', long, value_name = "ALPHABET")]
    pub digits: Option<DigitAlphabet>,

    /// Copy the generated password to the clipboard
    #[arg(short, long)]
    pub copy: bool,

    /// How many passwords to generate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..=MAX_COUNT as u64))]
    pub count: u64,

    /// Largest value accepted for any field
    #[arg(long, value_name = "N")]
    pub max: Option<usize>,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fill in the fields interactively
    #[arg(short, long)]
    pub interactive: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The four fields exactly as typed; unparsed so validation sees them raw.
    pub fn raw_request(&self) -> RawRequest {
        RawRequest {
            length: self.length.clone(),
            numbers: self.numbers.clone(),
            specials: self.specials.clone(),
            letters: self.letters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_stay_raw() {
        let cli = Cli::try_parse_from(["passcompose", "-L", "8", "-n", "two", "--specials", "1"]).unwrap();

        let raw = cli.raw_request();
        assert_eq!(raw.length.as_deref(), Some("8"));
        assert_eq!(raw.numbers.as_deref(), Some("two"));
        assert_eq!(raw.specials.as_deref(), Some("1"));
        assert_eq!(raw.letters, None);
        assert_eq!(cli.count, 1);
        assert!(!cli.copy);
    }

    #[test]
    fn parses_options() {
        let cli = Cli::try_parse_from([
            "passcompose",
            "--digits",
            "one-to-nine",
            "-c",
            "--count",
            "3",
            "--max",
            "64",
            "-i",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.digits, Some(DigitAlphabet::OneToNine));
        assert!(cli.copy);
        assert_eq!(cli.count, 3);
        assert_eq!(cli.max, Some(64));
        assert!(cli.interactive);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_zero_count_and_bad_alphabet() {
        assert!(Cli::try_parse_from(["passcompose", "--count", "0"]).is_err());
        assert!(Cli::try_parse_from(["passcompose", "--count", "18446744073709551615"]).is_err());
        assert!(Cli::try_parse_from(["passcompose", "--count", "10001"]).is_err());
        assert_eq!(Cli::try_parse_from(["passcompose", "--count", "10000"]).unwrap().count, 10_000);
        assert!(Cli::try_parse_from(["passcompose", "--digits", "hex"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
