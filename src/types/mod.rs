// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource kinds of the `arbitrator.incubator.k8s.io/v1` API group.

pub mod queue;
pub mod register;
pub mod resources;
pub mod task_set;

pub use queue::{Queue, QueueSpec, QueueStatus};
pub use register::{scheme_builder, scheme_group_version, GROUP_NAME, VERSION};
pub use resources::ResourceList;
pub use task_set::{TaskSet, TaskSetSpec, TaskSetStatus};
