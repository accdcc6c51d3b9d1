use clap::Parser;
use rust_tour::config::toml_config::{MonitoringSection, PresentationSection, TomlConfig};
use rust_tour::utils::{logger, validation::Validate};
use rust_tour::{CliConfig, ConfigProvider, MenuSession, Topic, TourEngine};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rust-tour CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.list {
        for topic in Topic::ALL {
            println!("{:<14} {}", topic.slug(), topic.label());
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(config) {
        Ok(()) => {
            tracing::info!("✅ Tour session finished");
        }
        Err(e) => {
            tracing::error!(
                "❌ Tour session failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                rust_tour::utils::error::ErrorSeverity::Low => 0,
                rust_tour::utils::error::ErrorSeverity::Medium => 2,
                rust_tour::utils::error::ErrorSeverity::High => 1,
                rust_tour::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run(cli: CliConfig) -> rust_tour::Result<()> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = TomlConfig::from_file(path)?;

            // CLI flags override the file
            if cli.no_pause {
                let presentation =
                    config.presentation.get_or_insert_with(|| PresentationSection {
                        rule_width: None,
                        pause_between: None,
                    });
                presentation.pause_between = Some(false);
                tracing::info!("🔧 Pause prompt overridden off by --no-pause");
            }
            if cli.timings {
                config.monitoring = Some(MonitoringSection {
                    enabled: true,
                    log_level: None,
                });
                tracing::info!("🔧 Timings overridden on by --timings");
            }

            config.validate()?;
            tracing::info!("✅ Configuration loaded and validated successfully");
            display_config_summary(&config);

            run_with(&cli, config)
        }
        None => run_with(&cli, cli.clone()),
    }
}

fn run_with<C: ConfigProvider>(cli: &CliConfig, config: C) -> rust_tour::Result<()> {
    let stdout = io::stdout();

    if let Some(topic) = cli.requested_topic() {
        let mut engine = TourEngine::new(config);
        let mut out = stdout.lock();
        engine.run_topic(&mut out, topic)?;
        engine.finish();
        return Ok(());
    }

    if cli.all {
        let mut engine = TourEngine::new(config);
        let mut out = stdout.lock();
        engine.run_all(&mut out)?;
        engine.finish();
        return Ok(());
    }

    let stdin = io::stdin();
    let mut session = MenuSession::new(stdin.lock(), stdout.lock(), config);
    session.run()
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Tour Configuration:");
    println!("  Name: {} v{}", config.tour.name, config.tour.version);
    println!("  Rule width: {}", config.rule_width());
    println!("  Pause between topics: {}", config.pause_between());
    println!("  Timings: {}", config.monitoring_enabled());
    println!(
        "  Topics: {}",
        config
            .enabled_topics()
            .iter()
            .map(|t| t.slug())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
}
