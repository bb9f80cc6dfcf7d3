// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed clients for the arbitrator API group.
//!
//! [`CrdV1Client`] owns one [`RestClient`](crate::rest::RestClient) and hands out
//! per-namespace sub-clients ([`Queues`], [`TaskSets`]) that borrow it.

pub mod crd_v1;
pub mod queue;
pub mod task_set;

pub use crd_v1::{
    set_config_defaults, set_config_defaults_with, CrdV1Client, CrdV1Interface, RestClientAccess,
};
pub use queue::{QueueInterface, Queues, QueuesGetter};
pub use task_set::{TaskSetInterface, TaskSets, TaskSetsGetter};

use std::fmt::Display;

/// Unwrap a construction result, panicking with the error message on failure.
///
/// Meant for application start-up code that treats a broken client
/// configuration as fatal.
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}
