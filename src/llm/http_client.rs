use reqwest::Client;
use std::time::Duration;

/// One grounded model round-trip can take tens of seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 90;
const CONNECT_TIMEOUT_SECS: u64 = 10;

pub fn build_provider_client() -> Client {
    build_provider_client_with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
}

pub fn build_provider_client_with_timeout(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .build()
        .unwrap_or_default()
}
