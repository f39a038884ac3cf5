use crate::utils::error::{PrimesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add { a: i64, b: i64 },
    IsPrime { n: i64 },
    PrimesUpTo { n: i64 },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::IsPrime { .. } => "is-prime",
            Command::PrimesUpTo { .. } => "primes-up-to",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Outcome {
    Sum { a: i64, b: i64, sum: i64 },
    Primality { n: i64, prime: bool },
    Primes { bound: i64, count: usize, primes: Vec<i64> },
}

impl Outcome {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Text => Ok(self.to_string()),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sum { a, b, sum } => write!(f, "{} + {} = {}", a, b, sum),
            Outcome::Primality { n, prime: true } => write!(f, "{} is prime", n),
            Outcome::Primality { n, prime: false } => write!(f, "{} is not prime", n),
            Outcome::Primes { primes, .. } => {
                let joined: Vec<String> = primes.iter().map(i64::to_string).collect();
                write!(f, "{}", joined.join(" "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = PrimesError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(PrimesError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Expected 'text' or 'json'".to_string(),
            }),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = PrimesError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}
