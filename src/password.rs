use crate::errors::{ ComposeError, Field, InputProblem };
use crate::generators::{ DigitAlphabet, generate_letter, generate_number, generate_special };

use rand::Rng;
use rand::seq::SliceRandom;

/// Largest value any single field accepts when read from text.
pub const DEFAULT_MAX_FIELD: usize = 300;

/// Hard upper bound for the configurable field maximum.
pub const MAX_FIELD_CEILING: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub length: usize,
    pub numbers: usize,
    pub specials: usize,
    pub letters: usize,
}

impl PasswordRequest {
    pub fn new(length: usize, numbers: usize, specials: usize, letters: usize) -> Self {
        Self { length, numbers, specials, letters }
    }

    /// Sum of the three category counts, `None` on overflow.
    fn requested(&self) -> Option<usize> {
        self.numbers.checked_add(self.specials)?.checked_add(self.letters)
    }

    /// Positions left over after the category counts, filled with letters.
    pub fn remainder(&self) -> Result<usize, ComposeError> {
        let exceeds = || ComposeError::CountExceedsLength {
            requested: self.numbers.saturating_add(self.specials).saturating_add(self.letters),
            length: self.length,
        };

        let requested = self.requested().ok_or_else(exceeds)?;
        self.length.checked_sub(requested).ok_or_else(exceeds)
    }
}

/// The four fields as text, the way a form or the command line hands them over.
/// `None` and blank text both mean the field was left empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRequest {
    pub length: Option<String>,
    pub numbers: Option<String>,
    pub specials: Option<String>,
    pub letters: Option<String>,
}

impl RawRequest {
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Length => self.length.as_deref(),
            Field::Numbers => self.numbers.as_deref(),
            Field::Specials => self.specials.as_deref(),
            Field::Letters => self.letters.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Length => &mut self.length,
            Field::Numbers => &mut self.numbers,
            Field::Specials => &mut self.specials,
            Field::Letters => &mut self.letters,
        };
        *slot = Some(value);
    }

    /// Fill fields that were not supplied from `defaults`.
    pub fn or(mut self, defaults: &RawRequest) -> Self {
        for field in Field::ALL {
            if self.field(field).is_none() {
                if let Some(value) = defaults.field(field) {
                    self.set(field, value.to_string());
                }
            }
        }
        self
    }

    /// Validate every field against `[0, max]`. An empty field is an error,
    /// never zero. Fields are checked in form order and the first bad one is
    /// reported.
    pub fn parse(&self, max: usize) -> Result<PasswordRequest, ComposeError> {
        let mut values = [0usize; 4];
        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            *slot = parse_field(field, self.field(field), max)?;
        }
        let [length, numbers, specials, letters] = values;

        Ok(PasswordRequest::new(length, numbers, specials, letters))
    }
}

fn parse_field(field: Field, text: Option<&str>, max: usize) -> Result<usize, ComposeError> {
    let invalid = |problem| ComposeError::MissingOrInvalidInput { field, problem };

    let text = match text.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(invalid(InputProblem::Missing)),
    };

    // Digits only: rejects signs, so "-1" and "+3" are invalid rather than clamped.
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(InputProblem::NotANumber));
    }

    match text.parse::<usize>() {
        Ok(n) if n <= max => Ok(n),
        // Too many digits for usize is still just a number that is too big.
        _ => Err(invalid(InputProblem::OutOfRange { max })),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Composer {
    digits: DigitAlphabet,
}

impl Composer {
    pub fn new(digits: DigitAlphabet) -> Self {
        Self { digits }
    }

    pub fn digits(&self) -> DigitAlphabet {
        self.digits
    }

    /// Compose a password using the thread-local generator.
    pub fn compose(&self, request: &PasswordRequest) -> Result<String, ComposeError> {
        self.compose_with(request, &mut rand::rng())
    }

    /// Draw `numbers` digits, `specials` punctuation and `letters` letters,
    /// pad with letters up to `length`, then shuffle the lot.
    pub fn compose_with<R: Rng + ?Sized>(
        &self,
        request: &PasswordRequest,
        rng: &mut R,
    ) -> Result<String, ComposeError> {
        let remainder = request.remainder()?;

        let mut chars: Vec<char> = Vec::with_capacity(request.length.min(MAX_FIELD_CEILING));

        for _ in 0..request.numbers {
            chars.push(generate_number(rng, self.digits));
        }

        for _ in 0..request.specials {
            chars.push(generate_special(rng));
        }

        for _ in 0..request.letters + remainder {
            chars.push(generate_letter(rng));
        }

        chars.shuffle(rng);

        Ok(chars.iter().collect())
    }
}
