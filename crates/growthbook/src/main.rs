use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let parsed = cli::Cli::parse();

    // Every failure is terminal: report it once and exit non-zero
    if let Err(err) = parsed.dispatch().await {
        eprintln!("💥 {}", err);
        std::process::exit(1);
    }
}
