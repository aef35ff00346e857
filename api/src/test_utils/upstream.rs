//! Stub GitHub API
//!
//! Serves fixture payloads on `127.0.0.1:0` so tests can drive the real
//! reqwest adapter. Any endpoint can be switched to a fixed status code.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header::USER_AGENT, HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use super::fixtures::{test_commits, test_contributors, test_languages, test_repository};
use super::Endpoint;

impl Endpoint {
    fn from_path(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
        match segments.as_slice() {
            ["repos", _, _] => Some(Endpoint::Repository),
            ["repos", _, _, "commits"] => Some(Endpoint::Commits),
            ["repos", _, _, "contributors"] => Some(Endpoint::Contributors),
            ["repos", _, _, "languages"] => Some(Endpoint::Languages),
            _ => None,
        }
    }
}

pub struct StubUpstream {
    commits: usize,
    contributors: usize,
    statuses: HashMap<Endpoint, StatusCode>,
}

/// A stub that is accepting connections
pub struct RunningUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

struct StubState {
    stub: StubUpstream,
    requests: Mutex<Vec<String>>,
    user_agents: Mutex<Vec<String>>,
}

impl Default for StubUpstream {
    fn default() -> Self {
        Self {
            commits: 10,
            contributors: 10,
            statuses: HashMap::new(),
        }
    }
}

impl StubUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commits and contributors to serve
    pub fn with_sizes(mut self, commits: usize, contributors: usize) -> Self {
        self.commits = commits;
        self.contributors = contributors;
        self
    }

    /// Answer `endpoint` with `status` instead of its fixture
    pub fn with_status(mut self, endpoint: Endpoint, status: StatusCode) -> Self {
        self.statuses.insert(endpoint, status);
        self
    }

    pub async fn spawn(self) -> RunningUpstream {
        let state = Arc::new(StubState {
            stub: self,
            requests: Mutex::new(Vec::new()),
            user_agents: Mutex::new(Vec::new()),
        });

        let app = Router::new().fallback(serve).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningUpstream {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

impl RunningUpstream {
    /// Path and query of every request received so far
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.state.user_agents.lock().unwrap().clone()
    }
}

async fn serve(State(state): State<Arc<StubState>>, uri: Uri, headers: HeaderMap) -> Response {
    let target = uri
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| uri.path().to_string());
    state.requests.lock().unwrap().push(target);

    if let Some(agent) = headers.get(USER_AGENT).and_then(|v| v.to_str().ok()) {
        state.user_agents.lock().unwrap().push(agent.to_string());
    }

    let Some(endpoint) = Endpoint::from_path(uri.path()) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if let Some(status) = state.stub.statuses.get(&endpoint) {
        if *status == StatusCode::NO_CONTENT {
            return StatusCode::NO_CONTENT.into_response();
        }
        return (*status, "stub failure").into_response();
    }

    let body = match endpoint {
        Endpoint::Repository => Value::Object(test_repository()),
        Endpoint::Commits => Value::Array(
            test_commits(state.stub.commits)
                .into_iter()
                .map(Value::Object)
                .collect(),
        ),
        Endpoint::Contributors => Value::Array(
            test_contributors(state.stub.contributors)
                .into_iter()
                .map(Value::Object)
                .collect(),
        ),
        Endpoint::Languages => Value::Object(test_languages()),
    };

    Json(body).into_response()
}
