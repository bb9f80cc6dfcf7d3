// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API path prefix reserved for custom and extension resources
pub const API_PATH: &str = "/apis";

/// Media types understood by the client
pub mod content_type {
    pub const JSON: &str = "application/json";
}

/// Environment variables read by the demo binary
pub mod env {
    /// Namespace to list and watch resources in
    pub const NAMESPACE: &str = "ARBITRATOR_NAMESPACE";
    /// When "true", keep watching queues after the initial listing
    pub const WATCH: &str = "ARBITRATOR_WATCH";
}

pub const DEFAULT_NAMESPACE: &str = "default";
