use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, Settings};
use crate::domain::model::{Command, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{parse_integer, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "primes")]
#[command(version)]
#[command(about = "Integer addition, primality tests and prime enumeration")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format: text or json
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Largest bound accepted by primes-up-to
    #[arg(long, global = true)]
    pub max_bound: Option<i64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

/// Operands stay as text until [`CliConfig::command`] validates them.
#[derive(Debug, Clone, Subcommand)]
pub enum Operation {
    /// Print a + b
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Report whether n is prime
    IsPrime {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
    /// List every prime p with 2 <= p <= n
    PrimesUpTo {
        #[arg(allow_hyphen_values = true)]
        n: String,
    },
}

impl CliConfig {
    pub fn command(&self) -> Result<Command> {
        match &self.operation {
            Operation::Add { a, b } => Ok(Command::Add {
                a: parse_integer("a", a)?,
                b: parse_integer("b", b)?,
            }),
            Operation::IsPrime { n } => Ok(Command::IsPrime {
                n: parse_integer("n", n)?,
            }),
            Operation::PrimesUpTo { n } => Ok(Command::PrimesUpTo {
                n: parse_integer("n", n)?,
            }),
        }
    }

    pub fn load_file(&self) -> Result<Option<TomlConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };
        let file = TomlConfig::from_file(path)?;
        file.validate()?;
        Ok(Some(file))
    }

    pub fn settings(&self) -> Result<Settings> {
        let file = self.load_file()?;
        let overrides = Overrides {
            format: self.format,
            max_bound: self.max_bound,
        };
        Settings::resolve(file.as_ref(), &overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::PrimesError;

    #[test]
    fn test_parse_subcommands() {
        let cli = CliConfig::try_parse_from(["primes", "add", "-10", "-20"]).unwrap();
        assert_eq!(cli.command().unwrap(), Command::Add { a: -10, b: -20 });

        let cli = CliConfig::try_parse_from(["primes", "--format", "json", "is-prime", "97"])
            .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.command().unwrap(), Command::IsPrime { n: 97 });

        let cli = CliConfig::try_parse_from(["primes", "primes-up-to", "30", "--max-bound", "100"])
            .unwrap();
        assert_eq!(cli.max_bound, Some(100));
        assert_eq!(cli.command().unwrap(), Command::PrimesUpTo { n: 30 });
    }

    #[test]
    fn test_non_integer_operand() {
        let cli = CliConfig::try_parse_from(["primes", "is-prime", "3.14"]).unwrap();
        assert!(matches!(
            cli.command(),
            Err(PrimesError::InvalidInputType { .. })
        ));
    }

    #[test]
    fn test_settings_without_file() {
        let cli = CliConfig::try_parse_from(["primes", "is-prime", "7"]).unwrap();
        assert_eq!(cli.settings().unwrap(), Settings::default());
    }
}
