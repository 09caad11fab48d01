use ankideck::cli::args::Args;
// src/main.rs
use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // stdout carries exported documents, logs go to stderr
    let mut env_filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("ankideck={}", filter).parse() {
        env_filter = env_filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = ankideck::run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
