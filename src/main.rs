use cboard::commands::Cli;
use cboard::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cboard=debug")))
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Cli::menu()
}
