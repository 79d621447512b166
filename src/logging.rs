use tracing_subscriber::{ EnvFilter, layer::SubscriberExt, util::SubscriberInitExt };

use crate::errors::AppError;

/// Logs go to stderr so stdout only ever carries passwords.
pub fn init_tracing(verbose: bool) -> Result<(), AppError> {
    let default_filter = if verbose { "oktopass_gen=debug,warn" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()?;

    Ok(())
}
