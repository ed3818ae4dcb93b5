//! CLI configuration structures and loaders.
use std::env;

/// Configuration for the terminal frontend.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Milliseconds between connection probes driving the sync effect.
    pub probe_interval_ms: u64,
    /// Message log capacity.
    pub message_capacity: usize,
    /// Buffer size for the entry outcome channel.
    pub entry_buffer: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            probe_interval_ms: 2000,
            message_capacity: 32,
            entry_buffer: 8,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RAFFLE_PROBE_INTERVAL_MS` - Connection probe period (default: 2000)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 32)
    /// - `CLI_ENTRY_BUFFER` - Entry outcome queue size (default: 8)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("RAFFLE_PROBE_INTERVAL_MS") {
            config.probe_interval_ms = interval.max(1);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.message_capacity = capacity.max(1);
        }

        if let Some(buffer) = read_env::<usize>("CLI_ENTRY_BUFFER") {
            config.entry_buffer = buffer.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = CliConfig::default();
        assert_eq!(config.probe_interval_ms, 2000);
        assert_eq!(config.message_capacity, 32);
        assert_eq!(config.entry_buffer, 8);
    }
}
