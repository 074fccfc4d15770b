use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{ Deserialize, Serialize };

/// ASCII punctuation, the 32 printable symbols that are neither letters,
/// digits nor whitespace.
pub const SPECIALS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

pub const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Which digits the "numbers" category draws from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitAlphabet {
    /// `0-9`
    #[default]
    ZeroToNine,
    /// `1-9`, never produces `0`
    OneToNine,
}

impl DigitAlphabet {
    fn first(self) -> u8 {
        match self {
            DigitAlphabet::ZeroToNine => b'0',
            DigitAlphabet::OneToNine => b'1',
        }
    }
}

impl FromStr for DigitAlphabet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-to-nine" | "zero_to_nine" | "0-9" => Ok(DigitAlphabet::ZeroToNine),
            "one-to-nine" | "one_to_nine" | "1-9" => Ok(DigitAlphabet::OneToNine),
            other => Err(format!(
                "unknown digit alphabet '{}', expected zero-to-nine or one-to-nine",
                other
            )),
        }
    }
}

impl fmt::Display for DigitAlphabet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DigitAlphabet::ZeroToNine => write!(f, "zero-to-nine"),
            DigitAlphabet::OneToNine => write!(f, "one-to-nine"),
        }
    }
}

pub fn generate_number<R: Rng + ?Sized>(rng: &mut R, digits: DigitAlphabet) -> char {
    rng.random_range(digits.first()..=b'9') as char
}

pub fn generate_special<R: Rng + ?Sized>(rng: &mut R) -> char {
    pick(rng, SPECIALS)
}

pub fn generate_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    pick(rng, LETTERS)
}

// Every alphabet here is ASCII, so byte indexing is char indexing.
fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &str) -> char {
    let bytes = alphabet.as_bytes();
    let chosen_index = rng.random_range(0..bytes.len());

    bytes[chosen_index] as char
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn specials_are_ascii_punctuation() {
        assert_eq!(SPECIALS.len(), 32);
        assert!(SPECIALS.chars().all(|c| c.is_ascii_punctuation()));

        let all_punctuation: Vec<char> = (0u8..128)
            .map(char::from)
            .filter(|c| c.is_ascii_punctuation())
            .collect();
        assert!(all_punctuation.iter().all(|c| SPECIALS.contains(*c)));
    }

    #[test]
    fn letters_cover_both_cases() {
        assert_eq!(LETTERS.len(), 52);
        assert!(LETTERS.chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn one_to_nine_never_draws_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let c = generate_number(&mut rng, DigitAlphabet::OneToNine);
            assert!(('1'..='9').contains(&c), "drew {}", c);
        }
    }

    #[test]
    fn zero_to_nine_reaches_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let drawn: Vec<char> = (0..2000)
            .map(|_| generate_number(&mut rng, DigitAlphabet::ZeroToNine))
            .collect();

        assert!(drawn.iter().all(|c| c.is_ascii_digit()));
        assert!(drawn.contains(&'0'));
        assert!(drawn.contains(&'9'));
    }

    #[test]
    fn draws_stay_in_their_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert!(generate_special(&mut rng).is_ascii_punctuation());
            assert!(generate_letter(&mut rng).is_ascii_alphabetic());
        }
    }

    #[test]
    fn digit_alphabet_parses_cli_and_config_spellings() {
        assert_eq!("one-to-nine".parse::<DigitAlphabet>(), Ok(DigitAlphabet::OneToNine));
        assert_eq!("1-9".parse::<DigitAlphabet>(), Ok(DigitAlphabet::OneToNine));
        assert_eq!("Zero_To_Nine".parse::<DigitAlphabet>(), Ok(DigitAlphabet::ZeroToNine));
        assert!("two-to-eight".parse::<DigitAlphabet>().is_err());
        assert_eq!(DigitAlphabet::OneToNine.to_string(), "one-to-nine");
    }
}
