use std::process::ExitCode;

fn main() -> ExitCode {
    // log to stderr so the report on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    ps_wheelsieve::cli::run()
}
