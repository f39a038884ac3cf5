use crate::config::Settings;
use crate::core::{add, is_prime, primes_up_to};
use crate::domain::model::{Command, Outcome};
use crate::utils::error::{PrimesError, Result};
use std::time::Instant;

pub struct PrimesEngine {
    settings: Settings,
}

impl PrimesEngine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn run(&self, command: &Command) -> Result<Outcome> {
        tracing::debug!(operation = command.name(), ?command, "running command");
        let started = Instant::now();

        let outcome = match *command {
            Command::Add { a, b } => Outcome::Sum { a, b, sum: add(a, b) },
            Command::IsPrime { n } => Outcome::Primality { n, prime: is_prime(n) },
            Command::PrimesUpTo { n } => {
                if n > self.settings.max_bound {
                    tracing::warn!(bound = n, max = self.settings.max_bound, "bound rejected");
                    return Err(PrimesError::BoundExceeded {
                        bound: n,
                        max: self.settings.max_bound,
                    });
                }
                let primes = primes_up_to(n);
                Outcome::Primes { bound: n, count: primes.len(), primes }
            }
        };

        match &outcome {
            Outcome::Primes { bound, count, .. } => tracing::info!(
                operation = command.name(),
                bound,
                count,
                elapsed = ?started.elapsed(),
                "enumeration finished"
            ),
            _ => tracing::info!(operation = command.name(), %outcome, "done"),
        }

        Ok(outcome)
    }
}
