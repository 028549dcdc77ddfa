// Shared test helpers for starting the service on an ephemeral port.

use link_parser::server::{serve, AppState};
use link_parser::Config;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running service instance; the server shuts down when this is dropped.
pub struct TestService {
    pub base_url: String,
    _shutdown: oneshot::Sender<()>,
}

impl TestService {
    pub fn parse_url(&self) -> String {
        format!("{}/parse", self.base_url)
    }
}

/// Starts the service with default configuration.
pub async fn start_service() -> TestService {
    start_service_with(Config::default()).await
}

/// Starts the service with the given configuration on 127.0.0.1:0.
pub async fn start_service_with(config: Config) -> TestService {
    let state = AppState::from_config(&config).expect("Failed to build app state");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get address");
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        serve(listener, state, async {
            let _ = rx.await;
        })
        .await
        .expect("Server failed");
    });

    TestService {
        base_url: format!("http://{}", addr),
        _shutdown: tx,
    }
}

/// POSTs `link` to the service's `/parse` endpoint.
pub async fn post_link(service: &TestService, link: &str) -> reqwest::Response {
    reqwest::Client::new()
        .post(service.parse_url())
        .body(link.to_string())
        .send()
        .await
        .expect("Request to service failed")
}

/// Content-Type header of a response, or empty string.
pub fn content_type(response: &reqwest::Response) -> String {
    response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
