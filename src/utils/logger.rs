use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "portfolio_gateway=info";
const VERBOSE_DIRECTIVES: &str = "portfolio_gateway=debug,info";

fn filter(directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

pub fn init_cli_logger(verbose: bool) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };

    tracing_subscriber::registry()
        .with(filter(directives))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

/// Selected by `--json-logs`: one JSON object per line, for running the
/// CLI under a process supervisor or CI job that collects structured logs.
/// Contact sends log the sender email, so keep these logs private.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(filter(DEFAULT_DIRECTIVES))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .json()
                .with_current_span(false),
        )
        .init();
}
