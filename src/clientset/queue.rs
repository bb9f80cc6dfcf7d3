// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::rest::{RestClient, WatchStream};
use crate::types::Queue;
use kube::api::{DeleteParams, ListParams, WatchParams};
use kube::core::ObjectList;
use std::future::Future;

/// Has a method to return a [`QueueInterface`] for a namespace
pub trait QueuesGetter {
    fn queues(&self, namespace: &str) -> Queues<'_>;
}

/// Operations on the queues of one namespace
pub trait QueueInterface {
    fn get(&self, name: &str) -> impl Future<Output = Result<Queue>> + Send;
    fn list(&self, lp: &ListParams) -> impl Future<Output = Result<ObjectList<Queue>>> + Send;
    fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> impl Future<Output = Result<WatchStream<Queue>>> + Send;
    fn create(&self, queue: &Queue) -> impl Future<Output = Result<Queue>> + Send;
    fn update(&self, queue: &Queue) -> impl Future<Output = Result<Queue>> + Send;
    fn delete(&self, name: &str, dp: &DeleteParams) -> impl Future<Output = Result<()>> + Send;
}

/// Queues client scoped to one namespace, borrowing its group client's transport
#[derive(Clone, Debug)]
pub struct Queues<'a> {
    client: &'a RestClient,
    namespace: String,
}

impl<'a> Queues<'a> {
    pub(crate) fn new(client: &'a RestClient, namespace: &str) -> Self {
        Self {
            client,
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl QueueInterface for Queues<'_> {
    async fn get(&self, name: &str) -> Result<Queue> {
        self.client.get(&self.namespace, name).await
    }

    async fn list(&self, lp: &ListParams) -> Result<ObjectList<Queue>> {
        self.client.list(&self.namespace, lp).await
    }

    async fn watch(&self, wp: &WatchParams, resource_version: &str) -> Result<WatchStream<Queue>> {
        self.client
            .watch(&self.namespace, wp, resource_version)
            .await
    }

    async fn create(&self, queue: &Queue) -> Result<Queue> {
        self.client.create(&self.namespace, queue).await
    }

    async fn update(&self, queue: &Queue) -> Result<Queue> {
        self.client.replace(&self.namespace, queue).await
    }

    async fn delete(&self, name: &str, dp: &DeleteParams) -> Result<()> {
        self.client.delete::<Queue>(&self.namespace, name, dp).await
    }
}
