//! In-process mock addon for network tests

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

type Key = (String, String);

#[derive(Default)]
struct MockState {
    /// Raw manifest body; `None` answers 500
    manifest: Option<String>,
    catalogs: HashMap<Key, String>,
    streams: HashMap<Key, String>,
    stream_delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    stream_requests: AtomicUsize,
}

/// Builder for a mock addon; unknown catalogs and streams answer 404
#[derive(Default)]
pub struct MockAddon {
    state: MockState,
}

impl MockAddon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn manifest(self, manifest: Value) -> Self {
        self.manifest_raw(&manifest.to_string())
    }

    pub fn manifest_raw(mut self, body: &str) -> Self {
        self.state.manifest = Some(body.to_string());
        self
    }

    pub fn catalog(self, kind: &str, id: &str, body: Value) -> Self {
        self.catalog_raw(kind, id, &body.to_string())
    }

    pub fn catalog_raw(mut self, kind: &str, id: &str, body: &str) -> Self {
        self.state
            .catalogs
            .insert((kind.to_string(), id.to_string()), body.to_string());
        self
    }

    pub fn stream(self, kind: &str, id: &str, body: Value) -> Self {
        self.stream_raw(kind, id, &body.to_string())
    }

    pub fn stream_raw(mut self, kind: &str, id: &str, body: &str) -> Self {
        self.state
            .streams
            .insert((kind.to_string(), id.to_string()), body.to_string());
        self
    }

    pub fn stream_delay(mut self, delay: Duration) -> Self {
        self.state.stream_delay = delay;
        self
    }

    pub async fn start(self) -> RunningAddon {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/manifest.json", get(manifest))
            .route("/catalog/:kind/:file", get(catalog))
            .route("/stream/:kind/:file", get(stream))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningAddon {
            addr,
            state,
            handle,
        }
    }
}

pub struct RunningAddon {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl RunningAddon {
    pub fn base_url(&self) -> String {
        format!("http://{}/", self.addr)
    }

    pub fn stream_requests(&self) -> usize {
        self.state.stream_requests.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

impl Drop for RunningAddon {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn json_key(kind: String, file: &str) -> Key {
    (kind, file.strip_suffix(".json").unwrap_or(file).to_string())
}

fn json_body(body: &str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

async fn manifest(State(state): State<Arc<MockState>>) -> Response {
    match &state.manifest {
        Some(body) => json_body(body),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn catalog(
    State(state): State<Arc<MockState>>,
    Path((kind, file)): Path<(String, String)>,
) -> Response {
    match state.catalogs.get(&json_key(kind, &file)) {
        Some(body) => json_body(body),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn stream(
    State(state): State<Arc<MockState>>,
    Path((kind, file)): Path<(String, String)>,
) -> Response {
    state.stream_requests.fetch_add(1, Ordering::SeqCst);
    let current = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(current, Ordering::SeqCst);

    if !state.stream_delay.is_zero() {
        tokio::time::sleep(state.stream_delay).await;
    }
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    match state.streams.get(&json_key(kind, &file)) {
        Some(body) => json_body(body),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Tracing layer recording this crate's events for the current thread
#[derive(Clone, Default)]
pub struct CapturedLogs {
    events: Arc<Mutex<Vec<(Level, String)>>>,
}

impl CapturedLogs {
    /// Capture until the returned guard is dropped
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }

    pub fn events(&self) -> Vec<(Level, String)> {
        self.events.lock().unwrap().clone()
    }

    pub fn contains(&self, level: Level, text: &str) -> bool {
        self.events()
            .iter()
            .any(|(l, message)| *l == level && message.contains(text))
    }
}

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for CapturedLogs {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(env!("CARGO_CRATE_NAME")) {
            return;
        }
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.events
            .lock()
            .unwrap()
            .push((*event.metadata().level(), visitor.0));
    }
}
