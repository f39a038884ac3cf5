use primes::{Command, Outcome, OutputFormat, PrimesEngine, PrimesError, Settings};

fn engine_with_max(max_bound: i64) -> PrimesEngine {
    PrimesEngine::new(Settings {
        max_bound,
        ..Settings::default()
    })
}

#[test]
fn test_run_add() {
    let engine = PrimesEngine::new(Settings::default());
    let outcome = engine.run(&Command::Add { a: 123, b: 456 }).unwrap();
    assert_eq!(outcome, Outcome::Sum { a: 123, b: 456, sum: 579 });
}

#[test]
fn test_run_is_prime() {
    let engine = PrimesEngine::new(Settings::default());
    assert_eq!(
        engine.run(&Command::IsPrime { n: 97 }).unwrap(),
        Outcome::Primality { n: 97, prime: true }
    );
    assert_eq!(
        engine.run(&Command::IsPrime { n: 100 }).unwrap(),
        Outcome::Primality { n: 100, prime: false }
    );
}

#[test]
fn test_run_primes_up_to() {
    let engine = PrimesEngine::new(Settings::default());
    let outcome = engine.run(&Command::PrimesUpTo { n: 30 }).unwrap();
    assert_eq!(
        outcome,
        Outcome::Primes {
            bound: 30,
            count: 10,
            primes: vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29],
        }
    );
    assert_eq!(
        outcome.render(OutputFormat::Text).unwrap(),
        "2 3 5 7 11 13 17 19 23 29"
    );
}

#[test]
fn test_negative_bound_is_empty_not_error() {
    let engine = engine_with_max(10);
    let outcome = engine.run(&Command::PrimesUpTo { n: -5 }).unwrap();
    assert_eq!(outcome, Outcome::Primes { bound: -5, count: 0, primes: vec![] });
}

#[test]
fn test_bound_exceeded() {
    let engine = engine_with_max(100);
    assert!(engine.run(&Command::PrimesUpTo { n: 100 }).is_ok());

    let err = engine.run(&Command::PrimesUpTo { n: 101 }).unwrap_err();
    assert!(matches!(err, PrimesError::BoundExceeded { bound: 101, max: 100 }));
    assert_eq!(
        err.severity(),
        primes::utils::error::ErrorSeverity::Medium
    );
}

#[test]
fn test_bound_does_not_limit_other_operations() {
    let engine = engine_with_max(2);
    assert!(engine.run(&Command::IsPrime { n: i64::MAX }).is_ok());
    assert!(engine.run(&Command::Add { a: i64::MAX, b: 1 }).is_ok());
}
