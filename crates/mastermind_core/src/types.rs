//! Core domain types for Mastermind.

use serde::{Serialize, Serializer};
use tracing::instrument;

/// Largest alphabet the keypad can express (digit keys 0-9).
pub const MAX_DIGIT_COUNT: usize = 10;

/// Longest code a game may use (one display line).
pub const MAX_CODE_LENGTH: usize = 16;

/// A single code digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value, if it fits the keypad alphabet.
    pub fn new(value: u8) -> Option<Self> {
        (usize::from(value) < MAX_DIGIT_COUNT).then_some(Self(value))
    }

    /// Parses an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|v| u8::try_from(v).ok()).and_then(Self::new)
    }

    /// Returns the numeric value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the ASCII character for this digit.
    pub fn to_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// The first `count` digits of the alphabet, in ascending order.
    pub fn alphabet(count: usize) -> impl Iterator<Item = Digit> {
        (0..count.min(MAX_DIGIT_COUNT) as u8).map(Digit)
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Error returned by [`Code`] mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CodeError {
    /// The code already holds as many digits as its capacity allows.
    #[display("Code is full ({} digits)", capacity)]
    Full {
        /// Capacity of the rejected code.
        capacity: usize,
    },
}

/// Fixed-capacity digit sequence with an explicit length.
///
/// Used for both the secret and the guess. `push` refuses to grow
/// past the capacity the code was created with.
#[derive(Debug, Clone, Copy)]
pub struct Code {
    digits: [Digit; MAX_CODE_LENGTH],
    len: usize,
    capacity: usize,
}

impl Code {
    /// Creates an empty code. Capacity is clamped to [`MAX_CODE_LENGTH`].
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            digits: [Digit::default(); MAX_CODE_LENGTH],
            len: 0,
            capacity: capacity.min(MAX_CODE_LENGTH),
        }
    }

    /// Builds a full code from digits. Capacity equals the number of digits.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::Full` if more than [`MAX_CODE_LENGTH`] digits are given.
    pub fn from_digits(digits: &[Digit]) -> Result<Self, CodeError> {
        let mut code = Self::with_capacity(digits.len());
        for &digit in digits {
            code.push(digit)?;
        }
        Ok(code)
    }

    /// Parses a string of ASCII digits, e.g. `"1234"`.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.chars().map(Digit::from_char).collect::<Option<Vec<_>>>()?;
        Self::from_digits(&digits).ok()
    }

    /// Appends a digit.
    ///
    /// # Errors
    ///
    /// Returns `CodeError::Full` when the code is already at capacity.
    pub fn push(&mut self, digit: Digit) -> Result<(), CodeError> {
        if self.is_full() {
            return Err(CodeError::Full {
                capacity: self.capacity,
            });
        }
        self.digits[self.len] = digit;
        self.len += 1;
        Ok(())
    }

    /// Removes all digits, keeping the capacity.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of digits held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no digits are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of digits.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once the code holds `capacity` digits.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// The digits held, in order.
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.len]
    }

    /// True if `digit` occurs anywhere in the code.
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits().contains(&digit)
    }

    /// True if no digit occurs twice.
    #[instrument(level = "trace")]
    pub fn is_distinct(&self) -> bool {
        let digits = self.digits();
        digits
            .iter()
            .enumerate()
            .all(|(i, d)| !digits[i + 1..].contains(d))
    }
}

// Slots past `len` may hold stale digits after `clear`.
impl PartialEq for Code {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.digits() == other.digits()
    }
}

impl Eq for Code {}

impl std::hash::Hash for Code {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.digits().hash(state);
    }
}

/// Collects at most [`MAX_CODE_LENGTH`] digits into a full code.
///
/// Capacity equals the number of digits collected.
impl FromIterator<Digit> for Code {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut code = Self::with_capacity(MAX_CODE_LENGTH);
        for digit in iter.into_iter().take(MAX_CODE_LENGTH) {
            code.digits[code.len] = digit;
            code.len += 1;
        }
        code.capacity = code.len;
        code
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for digit in self.digits() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Per-position feedback for a guessed digit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Hint {
    /// Digit does not occur in the secret.
    #[strum(serialize = ".")]
    Wrong,
    /// Digit occurs in the secret at another position.
    #[strum(serialize = "?")]
    Misplaced,
    /// Digit matches the secret at this position.
    #[strum(serialize = "+")]
    Correct,
}

/// Hints for one evaluated guess, one per position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hints(Vec<Hint>);

impl Hints {
    /// Wraps a hint sequence.
    pub fn new(hints: Vec<Hint>) -> Self {
        Self(hints)
    }

    /// The hints, in guess order.
    pub fn as_slice(&self) -> &[Hint] {
        &self.0
    }

    /// Number of hints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no hints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts hints of the given kind.
    pub fn count(&self, kind: Hint) -> usize {
        self.0.iter().filter(|h| **h == kind).count()
    }
}

impl std::fmt::Display for Hints {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for hint in &self.0 {
            write!(f, "{}", hint)?;
        }
        Ok(())
    }
}

impl Serialize for Hints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
