use plaid_core::ClientSettings;

/// Helper for testing the Plaid API using wiremock.
///
/// The returned settings point the client at the mock server, with the sandbox credentials
/// `test_id` / `test_secret`.
///
/// Warning: when using `Mock::expected` ensure `server` is not dropped before the test completes,
pub async fn start_api_mock(mocks: Vec<wiremock::Mock>) -> (wiremock::MockServer, ClientSettings) {
    let server = wiremock::MockServer::start().await;

    for mock in mocks {
        server.register(mock).await;
    }

    let settings = ClientSettings {
        endpoint: server.uri(),
        user_agent: "test-agent".to_string(),
        ..Default::default()
    };

    (server, settings)
}
