use clap::Parser;
use std::io::IsTerminal;
use paraphrase_runner::{InferenceRunner, RunArgs, RunConfig, T5Loader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn init_tracing(quiet: bool) {
    let default = if quiet { "paraphrase_runner=warn" } else { "paraphrase_runner=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn main() {
    let config = RunConfig::from(RunArgs::parse());
    init_tracing(config.quiet);

    tracing::info!("Starting paraphrase generation");
    tracing::info!("paraphrase-runner version: {}", env!("CARGO_PKG_VERSION"));

    // Failures are reported through the result file; the exit code stays 0.
    let loader = T5Loader::new(config.force_cpu);
    InferenceRunner::new(loader, config).run();
}
