//! Shared setup for the mock-server tests.

use semaphore_client::Semaphore;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

/// Token every test client authenticates with.
pub const TOKEN: &str = "test-token";

/// Expected `Authorization` header value for [`TOKEN`].
pub const AUTH_HEADER: &str = "Token test-token";

/// Starts a mock server and a client pointed at it.
pub async fn setup() -> (MockServer, Semaphore) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let client = Semaphore::with_base_url(&server.uri(), TOKEN).expect("client");
    (server, client)
}
