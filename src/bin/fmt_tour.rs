use clap::Parser;
use rust_tour::lessons::formatting;
use rust_tour::utils::logger;
use std::io::{self, Write};

#[derive(Parser)]
#[command(name = "fmt-tour")]
#[command(about = "A walkthrough of std::fmt: traits, format specs, and buffers")]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting the std::fmt walkthrough");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== RUST FORMATTING DEEP DIVE ===")?;

    match formatting::run(&mut out) {
        Ok(()) => {
            writeln!(out, "\n=== END OF FORMATTING DEEP DIVE ===")?;
            tracing::info!("✅ Walkthrough completed");
        }
        Err(e) => {
            tracing::error!("❌ Walkthrough failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
