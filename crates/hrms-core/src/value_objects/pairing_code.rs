//! Pairing code - six decimal digits drawn from the OS random source

use rand::rngs::OsRng;
use rand::Rng;
use std::fmt;

/// One-time numeric pairing code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairingCode(String);

impl PairingCode {
    /// Number of digits in a code
    pub const LEN: usize = 6;

    /// Draw a fresh code from a cryptographically secure source
    pub fn generate() -> Self {
        let mut rng = OsRng;
        let code = (0..Self::LEN)
            .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
            .collect();
        Self(code)
    }

    /// Parse a code typed by a human. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, PairingCodeError> {
        let s = s.trim();
        if s.len() != Self::LEN {
            return Err(PairingCodeError::InvalidLength(s.len()));
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PairingCodeError::NonDigit);
        }
        Ok(Self(s.to_string()))
    }

    /// Borrow the code as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Error when parsing a pairing code
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PairingCodeError {
    #[error("pairing code must have 6 digits, got {0} characters")]
    InvalidLength(usize),

    #[error("pairing code must contain only digits")]
    NonDigit,
}

impl fmt::Display for PairingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PairingCode {
    type Err = PairingCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PairingCode::parse(s)
    }
}

impl AsRef<str> for PairingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
