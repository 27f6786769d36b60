//! Log output for applications embedding the checker

use tracing::Level;

/// Installs a `tracing-subscriber` fmt subscriber at `level`
///
/// Returns false if a global subscriber was already installed, which
/// leaves the existing one in place.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
