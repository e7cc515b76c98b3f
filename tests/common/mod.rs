#![allow(dead_code)]

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use caseworker_login::prelude::*;
use std::sync::{Arc, Mutex};
use url::Url;

/// A request as the stub portal saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct PortalState {
    status: StatusCode,
    reply: &'static str,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stub of the portal answering every request with a fixed reply.
pub struct StubPortal {
    pub base_url: Url,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubPortal {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<PortalState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    state.recorded.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.reply,
    )
}

/// Starts a stub portal on an ephemeral port.
pub async fn spawn_portal(status: StatusCode, reply: &'static str) -> StubPortal {
    let recorded = Arc::new(Mutex::new(Vec::new()));
    let state = PortalState {
        status,
        reply,
        recorded: recorded.clone(),
    };

    let app = Router::new().fallback(record).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubPortal {
        base_url: Url::parse(&format!("http://{}", addr)).unwrap(),
        recorded,
    }
}

/// Base URL of a port nothing listens on.
pub async fn closed_portal_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{}", addr)).unwrap()
}

/// Notifier that remembers every message.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Navigator that remembers every target.
#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}
