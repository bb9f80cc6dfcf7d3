// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::ResourceList;
use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(
    CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema,
)]
#[kube(
    group = "arbitrator.incubator.k8s.io",
    version = "v1",
    kind = "TaskSet",
    plural = "tasksets"
)]
#[kube(namespaced)]
#[kube(status = "TaskSetStatus")]
#[serde(rename_all = "camelCase")]
pub struct TaskSetSpec {
    /// Name of the queue this task set is charged against
    #[serde(default)]
    pub queue: String,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub resource_request: ResourceList,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskSetStatus {
    #[serde(default)]
    pub allocated: ResourceList,
}

impl TaskSet {
    pub fn belongs_to(&self, queue: &str) -> bool {
        self.spec.queue == queue
    }
}
