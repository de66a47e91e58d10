use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::Result, token::Token};

/// The correlation key sent with every call of a run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a fresh random identifier (UUID v4).
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled row of the served dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub t: f64,
}

/// The feature vector the service asks a prediction for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Input {
    #[inline]
    pub fn features(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
}

/// What the service answers to a submission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    /// Cumulative session score.
    pub score: f64,
    /// Round specific signal.
    pub win: f64,
}

/// The opaque token blob handed out at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint(Vec<u8>);

impl Fingerprint {
    pub fn new(raw: Vec<u8>) -> Self {
        Self(raw)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Decodes the blob as a token, without checking its signature.
    pub fn decode(&self) -> Result<Token> {
        Token::decode(&self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_uuids() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn caller_ids_are_kept_verbatim() {
        let id = SessionId::from("abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.to_string(), "abc");
    }

    #[test]
    fn input_ignores_unknown_fields() {
        let input: Input = serde_json::from_str(r#"{"a": 1, "b": 2.5, "c": -3, "round": 7}"#).unwrap();
        assert_eq!(input.features(), [1.0, 2.5, -3.0]);
    }

    #[test]
    fn input_keeps_double_precision() {
        let input: Input = serde_json::from_str(r#"{"a": 16777217, "b": 123456.789, "c": 0.1}"#).unwrap();
        assert_eq!(input.features(), [16_777_217.0, 123_456.789, 0.1]);
    }

    #[test]
    fn outcome_accepts_integers() {
        let outcome: Outcome = serde_json::from_str(r#"{"score": 350, "win": 1200}"#).unwrap();
        assert_eq!(
            outcome,
            Outcome {
                score: 350.0,
                win: 1200.0
            }
        );
    }
}
