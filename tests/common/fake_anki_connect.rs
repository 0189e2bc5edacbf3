//! Fake AnkiConnect server for integration tests.
//!
//! Binds an `axum` server to a random port on 127.0.0.1 and answers the
//! single `POST /` endpoint AnkiConnect exposes. Replies are configured per
//! action; every request body is recorded so tests can assert which actions
//! ran and with which params.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        Mutex,
    },
    time::Duration,
};

use axum::{
    extract::State,
    http::StatusCode,
    response::{
        IntoResponse,
        Response,
    },
    routing::post,
    Json,
    Router,
};
use serde_json::{
    json,
    Value,
};
use tokio::net::TcpListener;

#[derive(Default)]
struct ApiState {
    replies: HashMap<String, Value>,
    status: Option<StatusCode>,
    delay: Option<Duration>,
    calls: Vec<Value>,
}

type Shared = Arc<Mutex<ApiState>>;

/// Handle to the running fake server.
pub struct FakeAnkiConnect {
    addr: SocketAddr,
    state: Shared,
}

impl FakeAnkiConnect {
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Shared::default();

        let app = Router::new().route("/", post(handle)).with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// `http://127.0.0.1:PORT`
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `action` with `{"result": result, "error": null}`.
    pub fn respond(&self, action: &str, result: Value) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert(action.to_string(), json!({ "result": result, "error": null }));
        self
    }

    /// Answer `action` with `{"result": null, "error": message}`.
    pub fn respond_error(&self, action: &str, message: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert(action.to_string(), json!({ "result": null, "error": message }));
        self
    }

    /// Make every request fail with `status` and a plain-text body.
    pub fn fail_with(&self, status: StatusCode) {
        self.state.lock().unwrap().status = Some(status);
    }

    /// Hold every reply back for `delay` before answering.
    pub fn delay_replies(&self, delay: Duration) {
        self.state.lock().unwrap().delay = Some(delay);
    }

    pub fn calls(&self) -> Vec<Value> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn actions(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| call["action"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn call(&self, action: &str) -> Option<Value> {
        self.calls().into_iter().find(|call| call["action"] == action)
    }
}

async fn handle(State(state): State<Shared>, Json(body): Json<Value>) -> Response {
    let (response, delay) = {
        let mut state = state.lock().unwrap();
        state.calls.push(body.clone());

        let response = match state.status {
            Some(status) => (status, "AnkiConnect is unhappy").into_response(),
            None => {
                let action = body["action"].as_str().unwrap_or_default();
                let reply = state.replies.get(action).cloned().unwrap_or_else(|| {
                    json!({ "result": null, "error": format!("unsupported action: {action}") })
                });
                Json(reply).into_response()
            }
        };
        (response, state.delay)
    };

    // Sleep outside the lock; axum handlers must be Send.
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    response
}
