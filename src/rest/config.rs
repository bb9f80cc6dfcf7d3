// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Base transport configuration and the ways to obtain one

use crate::error::{ArbitratorError, Result};
use crate::scheme::{Codec, GroupVersion};
use kube::config::{KubeConfigOptions, Kubeconfig};
use tracing::debug;

/// Connection settings plus the group/version-specific fields defaulting fills in.
///
/// Callers own this value; client constructors work on a copy and never write
/// back into it.
#[derive(Clone, Debug)]
pub struct RestConfig {
    /// Host, TLS and credential settings handed to the kube transport
    pub kube: kube::Config,
    pub group_version: Option<GroupVersion>,
    /// Prefix in front of `/{group}/{version}`, e.g. `/apis`
    pub api_path: String,
    pub content_type: Option<String>,
    pub negotiated_serializer: Option<Codec>,
}

impl RestConfig {
    pub fn new(kube: kube::Config) -> Self {
        Self {
            kube,
            group_version: None,
            api_path: String::new(),
            content_type: None,
            negotiated_serializer: None,
        }
    }

    /// Configuration for an API server reachable at `host`, without credentials
    pub fn for_host(host: &str) -> Result<Self> {
        let cluster_url: http::Uri = host.parse().map_err(|e| {
            ArbitratorError::ConfigurationError(format!("Invalid host '{}': {}", host, e))
        })?;
        if cluster_url.scheme().is_none() || cluster_url.authority().is_none() {
            return Err(ArbitratorError::ConfigurationError(format!(
                "Host '{}' must be an absolute URL such as https://10.0.0.1:6443",
                host
            )));
        }

        Ok(Self::new(kube::Config::new(cluster_url)))
    }

    /// Infer configuration from the local kubeconfig or the in-cluster environment
    pub async fn infer() -> Result<Self> {
        let config = kube::Config::infer().await.map_err(|e| {
            ArbitratorError::ConfigurationError(format!("Failed to infer config: {}", e))
        })?;
        debug!("Inferred configuration for {}", config.cluster_url);
        Ok(Self::new(config))
    }

    /// Build configuration from the contents of a kubeconfig file
    pub async fn from_kubeconfig_yaml(kubeconfig: &str) -> Result<Self> {
        let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig).map_err(|e| {
            ArbitratorError::ConfigurationError(format!("Failed to parse kubeconfig: {}", e))
        })?;

        let config =
            kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
                .await
                .map_err(|e| {
                    ArbitratorError::ConfigurationError(format!("Failed to create config: {}", e))
                })?;

        Ok(Self::new(config))
    }

    pub fn host(&self) -> String {
        self.kube.cluster_url.to_string()
    }
}

impl From<kube::Config> for RestConfig {
    fn from(kube: kube::Config) -> Self {
        Self::new(kube)
    }
}
