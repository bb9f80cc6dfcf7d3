// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named resource quantities, e.g. `cpu: 2`, `memory: 4Gi`
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct ResourceList {
    #[serde(default)]
    pub resources: BTreeMap<String, Quantity>,
}

impl ResourceList {
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Quantity> {
        self.resources.get(name)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            resources: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Quantity(v.into())))
                .collect(),
        }
    }
}
