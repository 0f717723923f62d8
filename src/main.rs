use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod playlist;
mod runtime;
mod scanner;
mod sync;
mod target;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    runtime::run()
}
