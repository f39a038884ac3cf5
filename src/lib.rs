pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, Settings};
pub use crate::core::{add, engine::PrimesEngine, is_prime, isqrt, primes_up_to};
pub use domain::model::{Command, Outcome, OutputFormat};
pub use utils::error::{PrimesError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
