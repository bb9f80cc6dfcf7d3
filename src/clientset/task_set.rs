// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use crate::rest::{RestClient, WatchStream};
use crate::types::TaskSet;
use kube::api::{DeleteParams, ListParams, WatchParams};
use kube::core::ObjectList;
use std::future::Future;

/// Has a method to return a [`TaskSetInterface`] for a namespace
pub trait TaskSetsGetter {
    fn task_sets(&self, namespace: &str) -> TaskSets<'_>;
}

/// Operations on the task sets of one namespace
pub trait TaskSetInterface {
    fn get(&self, name: &str) -> impl Future<Output = Result<TaskSet>> + Send;
    fn list(&self, lp: &ListParams) -> impl Future<Output = Result<ObjectList<TaskSet>>> + Send;
    fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> impl Future<Output = Result<WatchStream<TaskSet>>> + Send;
    fn create(&self, task_set: &TaskSet) -> impl Future<Output = Result<TaskSet>> + Send;
    fn update(&self, task_set: &TaskSet) -> impl Future<Output = Result<TaskSet>> + Send;
    fn delete(&self, name: &str, dp: &DeleteParams) -> impl Future<Output = Result<()>> + Send;
}

#[derive(Clone, Debug)]
pub struct TaskSets<'a> {
    client: &'a RestClient,
    namespace: String,
}

impl<'a> TaskSets<'a> {
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

impl TaskSetInterface for TaskSets<'_> {
    async fn get(&self, name: &str) -> Result<TaskSet> {
        self.client.get(&self.namespace, name).await
    }

    async fn list(&self, lp: &ListParams) -> Result<ObjectList<TaskSet>> {
        self.client.list(&self.namespace, lp).await
    }

    async fn watch(
        &self,
        wp: &WatchParams,
        resource_version: &str,
    ) -> Result<WatchStream<TaskSet>> {
        self.client
            .watch(&self.namespace, wp, resource_version)
            .await
    }

    async fn create(&self, task_set: &TaskSet) -> Result<TaskSet> {
        self.client.create(&self.namespace, task_set).await
    }

    async fn update(&self, task_set: &TaskSet) -> Result<TaskSet> {
        self.client.replace(&self.namespace, task_set).await
    }

    async fn delete(&self, name: &str, dp: &DeleteParams) -> Result<()> {
        self.client.delete::<TaskSet>(&self.namespace, name, dp).await
    }
}
