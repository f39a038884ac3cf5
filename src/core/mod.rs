pub mod arith;
pub mod engine;
pub mod primality;

pub use arith::add;
pub use primality::{is_prime, isqrt, primes_up_to};
