use std::{fs::File, process::ExitCode};

use clap::Parser;

use securebank_dashboard::{
    bank::{SimulatedBank, TokioDelay},
    config::Config,
    domain::Error,
    engine::Engine,
    ingestion::CsvReader,
    screen::StdScreen,
    storage::FileSessionStorage,
    store::Store,
};
use tracing_subscriber::EnvFilter;

#[tokio::main] // using Tokio runtime for the simulated delays
async fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = Config::parse();
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let file = File::open(&config.events)?;

    // Wire up the collaborators
    let events = CsvReader::new(file);
    let bank = SimulatedBank::new(TokioDelay, config.delays());
    let storage = FileSessionStorage::new(config.session_file);

    let mut engine = Engine::new(events, storage, bank, StdScreen::default(), Store::seeded());
    engine.process().await
}
