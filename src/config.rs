// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

use crate::constants::{env as vars, DEFAULT_NAMESPACE};

/// Demo binary configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace whose queues and task sets are listed
    pub namespace: String,
    pub watch: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let namespace = lookup(vars::NAMESPACE)
            .filter(|ns| !ns.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        let watch = match lookup(vars::WATCH) {
            Some(value) => value.parse().with_context(|| {
                format!("{} must be true or false, got '{}'", vars::WATCH, value)
            })?,
            None => false,
        };

        Ok(Config { namespace, watch })
    }
}
