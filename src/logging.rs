//! Logging setup.
//!
//! Diagnostics go to stderr through `tracing`. The default level is WARN so
//! that skipped justfile lines stay quiet unless asked for; `-v`/`-q` move it
//! up or down, and `RUST_LOG` overrides both.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Map `-v`/`-q` counts to a level, starting from WARN.
pub fn level_for(verbose: u8, quiet: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::OFF,
        LevelFilter::ERROR,
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ];
    let index = (2 + i32::from(verbose) - i32::from(quiet)).clamp(0, LEVELS.len() as i32 - 1);
    LEVELS[index as usize]
}

/// Install the global stderr subscriber. Safe to call more than once.
pub fn init(verbose: u8, quiet: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        assert_eq!(level_for(0, 0), LevelFilter::WARN);
    }

    #[test]
    fn verbose_and_quiet_shift_level() {
        assert_eq!(level_for(1, 0), LevelFilter::INFO);
        assert_eq!(level_for(2, 0), LevelFilter::DEBUG);
        assert_eq!(level_for(0, 1), LevelFilter::ERROR);
        assert_eq!(level_for(2, 1), LevelFilter::INFO);
    }

    #[test]
    fn level_is_clamped() {
        assert_eq!(level_for(10, 0), LevelFilter::TRACE);
        assert_eq!(level_for(0, 10), LevelFilter::OFF);
    }
}
