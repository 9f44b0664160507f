use std::ops::Deref;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, ORIGIN};
use serde_json::Value;

use crate::jsonrpc;
use crate::registry::{merge_dedup, Registry};
use crate::{Error, Result};

/// Budget for one outbound call, connect included.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);
/// Pause between two peer-discovery sweeps.
const DISCOVERY_INTERVAL: Duration = Duration::from_secs(300);
/// Origin announced on forwarded requests so nodes can tell relayed
/// traffic from direct traffic.
const RELAY_ORIGIN: &str = "http://localhost:8545";

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn new(seeds: Vec<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(ATTEMPT_TIMEOUT)
            .build()?;
        Ok(Client {
            inner: Arc::new(ClientInner {
                registry: Registry::new(seeds),
                http,
            }),
        })
    }

    /// Peer-discovery loop; runs until the task is dropped. The first
    /// sweep happens one full interval after startup.
    pub async fn run_discovery(self) {
        loop {
            tokio::time::sleep(DISCOVERY_INTERVAL).await;
            self.refresh_peers().await;
        }
    }
}

pub struct ClientInner {
    registry: Registry,
    http: reqwest::Client,
}

impl ClientInner {
    /// Current endpoint order, first entry tried first.
    pub async fn endpoints(&self) -> Vec<String> {
        self.registry.snapshot().await
    }

    /// Forwards one request to the first endpoint that answers with a
    /// well-formed envelope. Endpoints are tried in registry order, one
    /// pass, no retries; the remote envelope is returned untouched,
    /// error payloads included.
    pub async fn forward(&self, request: &jsonrpc::Request) -> Result<jsonrpc::Response> {
        let body = jsonrpc::encode(request)?;
        for endpoint in self.registry.snapshot().await {
            let url = format!("http://{endpoint}/");
            tracing::debug!("forwarding {} to {url}", request.method);
            let resp = match self
                .http
                .post(&url)
                .header(CONTENT_TYPE, "application/json")
                .header(ORIGIN, RELAY_ORIGIN)
                .body(body.clone())
                .send()
                .await
            {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::warn!("{url}: send error: {e}");
                    continue;
                }
            };
            let bytes = match resp.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("{url}: read error: {e}");
                    continue;
                }
            };
            match serde_json::from_slice::<jsonrpc::Response>(&bytes) {
                Ok(response) => return Ok(response),
                Err(e) => {
                    tracing::warn!("{url}: malformed envelope: {e}");
                }
            }
        }
        Err(Error::Exhausted)
    }

    /// One discovery sweep: ask every known endpoint for its peers,
    /// append what came back, and install the merged order. Endpoints
    /// that do not answer contribute nothing and stay registered.
    pub async fn refresh_peers(&self) {
        let known = self.registry.snapshot().await;
        let mut discovered = Vec::new();
        for endpoint in &known {
            match self.fetch_peers(endpoint).await {
                Ok(peers) => discovered.extend(peers),
                Err(e) => tracing::debug!("peer fetch from {endpoint} failed: {e}"),
            }
        }
        let before = known.len();
        let merged = merge_dedup(known, discovered);
        if merged.len() > before {
            tracing::info!(
                "discovered {} new endpoint(s), {} known",
                merged.len() - before,
                merged.len()
            );
        }
        self.registry.replace(merged).await;
    }

    async fn fetch_peers(&self, endpoint: &str) -> Result<Vec<String>> {
        let request = jsonrpc::Request {
            jsonrpc: jsonrpc::VERSION.to_string(),
            method: "getPeers".to_string(),
            params: Vec::new(),
            id: Value::from(1),
        };
        let peers = self
            .http
            .post(format!("http://{endpoint}/peers"))
            .json(&request)
            .send()
            .await?
            .json::<Vec<String>>()
            .await?;
        Ok(peers)
    }
}
