/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
use crate::utils::config::get_env_or_default;
use once_cell::sync::OnceCell;
use tracing::Level;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the tracing subscriber for the process
///
/// Reads the level from `LOGLEVEL` (default `info`). Safe to call multiple
/// times; only the first call installs a subscriber.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let level = get_env_or_default("LOGLEVEL", Level::INFO);
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init();
    });
}
