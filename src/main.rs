use clap::Parser;
use primes::utils::error::{ErrorSeverity, PrimesError};
use primes::utils::logger;
use primes::{CliConfig, PrimesEngine};

fn main() {
    let config = CliConfig::parse();

    // 設定在日誌之前載入，以便套用 [logging] level
    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            exit_with(&e);
        }
    };

    logger::init_logger(settings.format, config.verbose, settings.log_level.as_deref());

    tracing::info!(version = primes::VERSION, "starting primes");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let result = config.command().and_then(|command| {
        let engine = PrimesEngine::new(settings.clone());
        engine.run(&command)
    });

    match result.and_then(|outcome| outcome.render(settings.format)) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &PrimesError) -> ! {
    tracing::debug!(
        category = ?e.category(),
        severity = ?e.severity(),
        "{}",
        e
    );

    eprintln!("error: {}", e.user_friendly_message());
    eprintln!("hint: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
