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
    kind = "Queue",
    plural = "queues"
)]
#[kube(namespaced)]
#[kube(status = "QueueStatus")]
#[serde(rename_all = "camelCase")]
pub struct QueueSpec {
    /// Relative share of cluster resources this queue is entitled to
    #[serde(default)]
    pub weight: i32,
    #[serde(default)]
    pub request: ResourceList,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    #[serde(default)]
    pub deserved: ResourceList,
    #[serde(default)]
    pub allocated: ResourceList,
    #[serde(default)]
    pub used: ResourceList,
    #[serde(default)]
    pub preempting: ResourceList,
}

impl Queue {
    /// Check if the arbitrator is reclaiming resources from this queue
    pub fn is_preempting(&self) -> bool {
        self.status
            .as_ref()
            .is_some_and(|s| !s.preempting.is_empty())
    }

    pub fn deserved(&self) -> Option<&ResourceList> {
        self.status.as_ref().map(|s| &s.deserved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::Resource;

    fn make_queue(status: Option<QueueStatus>) -> Queue {
        let mut queue = Queue::new(
            "research",
            QueueSpec {
                weight: 2,
                request: [("cpu", "4")].into_iter().collect(),
            },
        );
        queue.status = status;
        queue
    }

    #[test]
    fn test_resource_identity() {
        assert_eq!(Queue::api_version(&()), "arbitrator.incubator.k8s.io/v1");
        assert_eq!(Queue::kind(&()), "Queue");
        assert_eq!(Queue::plural(&()), "queues");
    }

    #[test]
    fn test_is_preempting_without_status() {
        assert!(!make_queue(None).is_preempting());
    }

    #[test]
    fn test_is_preempting_with_empty_preempting() {
        assert!(!make_queue(Some(QueueStatus::default())).is_preempting());
    }

    #[test]
    fn test_is_preempting_with_preempting_resources() {
        let queue = make_queue(Some(QueueStatus {
            preempting: [("cpu", "1")].into_iter().collect(),
            ..Default::default()
        }));
        assert!(queue.is_preempting());
    }

    #[test]
    fn test_deserved_from_status() {
        let queue = make_queue(Some(QueueStatus {
            deserved: [("memory", "8Gi")].into_iter().collect(),
            ..Default::default()
        }));
        assert!(queue.deserved().unwrap().get("memory").is_some());
        assert!(make_queue(None).deserved().is_none());
    }

    #[test]
    fn test_spec_round_trips_camel_case() {
        let queue = make_queue(None);
        let value = serde_json::to_value(&queue).unwrap();
        assert_eq!(value["spec"]["weight"], 2);
        assert_eq!(value["spec"]["request"]["resources"]["cpu"], "4");
    }
}
