// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the `arbitrator.incubator.k8s.io/v1` custom resources.
//!
//! ```no_run
//! use arbitrator_client::{CrdV1Client, QueueInterface, QueuesGetter, RestConfig};
//! use kube::api::ListParams;
//!
//! # async fn run() -> arbitrator_client::error::Result<()> {
//! let config = RestConfig::infer().await?;
//! let client = CrdV1Client::new_for_config(&config)?;
//! let queues = client.queues("default").list(&ListParams::default()).await?;
//! println!("{} queues", queues.items.len());
//! # Ok(())
//! # }
//! ```

pub mod clientset;
pub mod config;
pub mod constants;
pub mod error;
pub mod rest;
pub mod scheme;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use clientset::{
    must, CrdV1Client, CrdV1Interface, QueueInterface, Queues, QueuesGetter, RestClientAccess,
    TaskSetInterface, TaskSets, TaskSetsGetter,
};
pub use error::{ArbitratorError, Result};
pub use rest::{RestClient, RestConfig, WatchStream};
