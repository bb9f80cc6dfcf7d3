// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Transport configuration and the REST handle built from it.

pub mod client;
pub mod config;

pub use client::{RestClient, WatchStream};
pub use config::RestConfig;
