// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::rest::RestClient;
use crate::scheme::Codec;
use crate::types::{scheme_builder, scheme_group_version};
use http::header::{HeaderMap, HeaderName, ACCEPT, CONTENT_TYPE};
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request as seen by [`MockService`]
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// A mock HTTP service that returns predefined responses based on request method and
/// path, and records every request it receives.
#[derive(Clone, Default)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for requests matching the exact method and path
    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client backed by this mock service. Clones share recorded state.
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Build a transport handle for the arbitrator group backed by this mock service
    pub fn into_rest_client(self) -> RestClient {
        arbitrator_rest_client(self.into_client())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let this = self.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes().to_vec();
            let method = parts.method.to_string();
            let path = parts.uri.path().to_string();

            this.requests.lock().unwrap().push(RecordedRequest {
                method: method.clone(),
                path: path.clone(),
                query: parts.uri.query().map(str::to_string),
                accept: header_value(&parts.headers, ACCEPT),
                content_type: header_value(&parts.headers, CONTENT_TYPE),
                body,
            });

            // Default 404 for unmatched requests
            let (status, body) = this
                .find_response(&method, &path)
                .unwrap_or_else(|| (404, not_found_json("resource", &path)));

            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

fn header_value(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Transport handle scoped to `arbitrator.incubator.k8s.io/v1` on top of any kube client
pub fn arbitrator_rest_client(client: Client) -> RestClient {
    RestClient::new(
        client,
        "/apis",
        scheme_group_version(),
        "application/json",
        Codec::json(scheme_builder().build().unwrap()),
    )
    .unwrap()
}

/// Collection path of a kind in the arbitrator group
pub fn collection_path(namespace: &str, plural: &str) -> String {
    format!(
        "/apis/arbitrator.incubator.k8s.io/v1/namespaces/{}/{}",
        namespace, plural
    )
}

pub fn queue_json(namespace: &str, name: &str, weight: i32) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "arbitrator.incubator.k8s.io/v1",
        "kind": "Queue",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": "1"
        },
        "spec": {
            "weight": weight,
            "request": { "resources": { "cpu": "2" } }
        }
    })
}

pub fn task_set_json(namespace: &str, name: &str, queue: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "arbitrator.incubator.k8s.io/v1",
        "kind": "TaskSet",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": "1"
        },
        "spec": {
            "queue": queue,
            "priority": 1,
            "resourceRequest": { "resources": { "memory": "1Gi" } }
        }
    })
}

pub fn list_json(kind: &str, items: Vec<serde_json::Value>) -> String {
    serde_json::json!({
        "apiVersion": "arbitrator.incubator.k8s.io/v1",
        "kind": format!("{}List", kind),
        "metadata": { "resourceVersion": "42" },
        "items": items
    })
    .to_string()
}

/// Newline-delimited watch events, as served by a watch request
pub fn watch_events_body(events: &[(&str, serde_json::Value)]) -> String {
    events
        .iter()
        .map(|(event_type, object)| {
            format!(
                "{}\n",
                serde_json::json!({ "type": event_type, "object": object })
            )
        })
        .collect()
}

pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": if code < 300 { "Success" } else { "Failure" },
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(
        404,
        "NotFound",
        &format!("{} \"{}\" not found", resource, name),
    )
}
