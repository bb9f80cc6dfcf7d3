// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use futures::StreamExt;
use kube::api::{ListParams, WatchEvent, WatchParams};
use kube::ResourceExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use arbitrator_client::config::Config;
use arbitrator_client::{
    CrdV1Client, QueueInterface, QueuesGetter, RestConfig, TaskSetInterface, TaskSetsGetter,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    let rest_config = RestConfig::infer().await?;
    let client = CrdV1Client::new_for_config(&rest_config)?;
    info!("Connected to {}", rest_config.host());

    let queues = client.queues(&config.namespace);
    let queue_list = queues.list(&ListParams::default()).await?;
    info!("Found {} queues", queue_list.items.len());
    for queue in &queue_list.items {
        info!(
            "Queue {} weight={} preempting={}",
            queue.name_any(),
            queue.spec.weight,
            queue.is_preempting()
        );
    }

    let task_sets = client
        .task_sets(&config.namespace)
        .list(&ListParams::default())
        .await?;
    info!("Found {} task sets", task_sets.items.len());
    for task_set in &task_sets.items {
        info!(
            "TaskSet {} queue={} priority={}",
            task_set.name_any(),
            task_set.spec.queue,
            task_set.spec.priority
        );
    }

    if !config.watch {
        return Ok(());
    }

    let resource_version = queue_list.metadata.resource_version.unwrap_or_default();
    info!("Watching queues from resource version {}", resource_version);
    let mut events = queues
        .watch(&WatchParams::default(), &resource_version)
        .await?;

    while let Some(event) = events.next().await {
        match event? {
            WatchEvent::Added(queue) => info!("Queue {} added", queue.name_any()),
            WatchEvent::Modified(queue) => info!("Queue {} modified", queue.name_any()),
            WatchEvent::Deleted(queue) => info!("Queue {} deleted", queue.name_any()),
            WatchEvent::Bookmark(bookmark) => {
                info!("Bookmark at {}", bookmark.metadata.resource_version)
            }
            WatchEvent::Error(e) => warn!("Watch error: {}", e),
        }
    }

    // Watches end when the server closes them; reconnecting is up to the caller
    warn!("Queue watch ended");
    Ok(())
}
