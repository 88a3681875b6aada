//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use country_search::catalog::{CatalogSource, FetchError, RawPayload};
use country_search::config::CatalogConfig;
use country_search::{CountryRecord, HttpCatalog, Normalizer, SearchSession, ViewModel};
use serde_json::json;
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;

/// Scenario payload: four countries in `common`/`png` shape.
pub const SCENARIO_PAYLOAD: &str = r#"[
    {"common": "India", "png": "in.png"},
    {"common": "Indonesia", "png": "id.png"},
    {"common": "Iran", "png": "ir.png"},
    {"common": "United States", "png": "us.png"}
]"#;

pub fn scenario_payload() -> RawPayload {
    serde_json::from_str(SCENARIO_PAYLOAD).unwrap()
}

pub fn records(names: &[&str]) -> Vec<CountryRecord> {
    names
        .iter()
        .map(|name| CountryRecord::new(*name, *name, ""))
        .collect()
}

pub fn names(records: &[CountryRecord]) -> Vec<&str> {
    records.iter().map(|r| r.display_name.as_str()).collect()
}

/// Find a port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn http_catalog(url: &str) -> HttpCatalog {
    let config = CatalogConfig {
        url: url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    HttpCatalog::new(&config).expect("Failed to build HTTP catalog")
}

pub fn http_session(url: &str) -> SearchSession<HttpCatalog> {
    SearchSession::new(Arc::new(http_catalog(url)), Normalizer::default())
}

// -- Scripted source ----------------------------------------------------------

pub enum Script {
    Payload(RawPayload),
    TransportFailure,
    Status(u16),
}

/// In-process catalog source with a scripted outcome.
///
/// When gated, `fetch` parks until the returned gate is notified.
pub struct ScriptedCatalog {
    script: Script,
    gate: Option<Arc<Notify>>,
    calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(script: Script) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let source = Self {
            script,
            gate: Some(Arc::clone(&gate)),
            calls: AtomicUsize::new(0),
        };
        (source, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogSource for ScriptedCatalog {
    async fn fetch(&self) -> Result<RawPayload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        match &self.script {
            Script::Payload(payload) => Ok(payload.clone()),
            Script::TransportFailure => Err(FetchError::transport(
                "scripted://catalog",
                "connection reset by peer",
            )),
            Script::Status(code) => Err(FetchError::Status { code: *code }),
        }
    }

    fn describe(&self) -> String {
        "scripted://catalog".to_string()
    }
}

pub fn scripted_session(script: Script) -> (Arc<ScriptedCatalog>, SearchSession<ScriptedCatalog>) {
    let source = Arc::new(ScriptedCatalog::new(script));
    let session = SearchSession::new(Arc::clone(&source), Normalizer::default());
    (source, session)
}

/// Poll until the view model leaves `Loading` or the timeout expires.
pub async fn settle<S: CatalogSource>(session: &mut SearchSession<S>, timeout: Duration) {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        session.poll();
        if !matches!(session.view_model(), ViewModel::Loading) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}
