// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArbitratorError {
    /// Request failures classified by the kube transport, passed through untouched
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Invalid client configuration: {0}")]
    ConfigurationError(String),

    #[error("Scheme registration failed: {0}")]
    SchemeError(String),

    #[error("Serialization failed: {0}")]
    CodecError(String),

    #[error("Invalid resource: {0}")]
    InvalidResource(String),
}

impl ArbitratorError {
    /// True for errors raised while building a client rather than while talking to the server
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ArbitratorError::ConfigurationError(_) | ArbitratorError::SchemeError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ArbitratorError>;
