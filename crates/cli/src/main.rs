//! MiniBank CLI - interactive banking console
//!
//! Runs a menu-driven session against an in-memory bank. State lives for
//! the lifetime of the process; `--demo` seeds a ready-made user so the
//! menus can be explored without registering first.

use anyhow::Result;
use clap::Parser;
use minibank_services::Bank;
use tracing_subscriber::EnvFilter;

mod console;
mod demo;

/// MiniBank - an in-memory banking console
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed a demo user (demo / demo123) with two funded accounts
    #[arg(long)]
    pub demo: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let bank = Bank::new();

    if cli.demo {
        demo::seed(&bank)?;
        println!("✅ Demo data loaded (username: demo, password: demo123)");
    }

    console::run(&bank)
}
