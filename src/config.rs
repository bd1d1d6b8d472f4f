use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

use crate::relay::{RelaySettings, DEFAULT_DEPLOYMENT, DEFAULT_ENDPOINT};
use crate::tutor_core::DEFAULT_REPLY_DELAY;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";

/// Process settings, read from the environment (and `.env`, when present).
#[derive(Clone, Debug)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    /// host:port the browser uses to reach the liveview sockets.
    pub reachable_addr: String,
    pub relay: RelaySettings,
    pub ping_message: String,
    pub reply_delay: Duration,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Settings> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let listen = var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen}"))?;
        let reachable_addr = var("REACHABLE_ADDR").unwrap_or(listen);

        let reply_delay = match var("REPLY_DELAY_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse()
                    .with_context(|| format!("REPLY_DELAY_MS is not a number: {ms}"))?,
            ),
            None => DEFAULT_REPLY_DELAY,
        };

        Ok(Settings {
            listen_addr,
            reachable_addr,
            relay: RelaySettings {
                api_key: var("AZURE_OPENAI_API_KEY"),
                endpoint: var("ENDPOINT_URL").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
                deployment: var("DEPLOYMENT_NAME")
                    .unwrap_or_else(|| DEFAULT_DEPLOYMENT.to_string()),
            },
            ping_message: lookup("PING_MESSAGE").unwrap_or_else(|| "ping".to_string()),
            reply_delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> Result<Settings> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.listen_addr, "127.0.0.1:3030".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.reachable_addr, "127.0.0.1:3030");
        assert_eq!(settings.relay, RelaySettings::default());
        assert_eq!(settings.ping_message, "ping");
        assert_eq!(settings.reply_delay, Duration::from_millis(800));
    }

    #[test]
    fn test_overrides() {
        let settings = settings(&[
            ("LISTEN_ADDR", "0.0.0.0:8080"),
            ("REACHABLE_ADDR", "tutor.example.com"),
            ("AZURE_OPENAI_API_KEY", "secret"),
            ("DEPLOYMENT_NAME", "gpt-4o"),
            ("PING_MESSAGE", "pong"),
            ("REPLY_DELAY_MS", "0"),
        ])
        .unwrap();
        assert_eq!(settings.reachable_addr, "tutor.example.com");
        assert_eq!(settings.relay.api_key.as_deref(), Some("secret"));
        assert_eq!(settings.relay.deployment, "gpt-4o");
        assert_eq!(settings.relay.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.ping_message, "pong");
        assert_eq!(settings.reply_delay, Duration::ZERO);
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let settings = settings(&[("AZURE_OPENAI_API_KEY", "  ")]).unwrap();
        assert!(settings.relay.api_key.is_none());
    }

    #[test]
    fn test_invalid_values() {
        assert!(settings(&[("LISTEN_ADDR", "nowhere")]).is_err());
        assert!(settings(&[("REPLY_DELAY_MS", "soon")]).is_err());
    }
}
