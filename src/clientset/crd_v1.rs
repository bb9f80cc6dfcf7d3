// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client for the `arbitrator.incubator.k8s.io/v1` group and its defaulting rules

use crate::clientset::{must, Queues, QueuesGetter, TaskSets, TaskSetsGetter};
use crate::constants::{content_type, API_PATH};
use crate::error::Result;
use crate::rest::{RestClient, RestConfig};
use crate::scheme::{Codec, SchemeBuilder};
use crate::types::{scheme_builder, scheme_group_version};
use tracing::{debug, info};

/// Access to the transport handle behind a group client.
///
/// Never panics: an absent client (e.g. `None::<CrdV1Client>`) yields `None`.
pub trait RestClientAccess {
    fn rest_client(&self) -> Option<&RestClient>;
}

/// Everything the arbitrator group exposes: one getter per resource kind
pub trait CrdV1Interface: RestClientAccess + QueuesGetter + TaskSetsGetter {}

impl<T: RestClientAccess + QueuesGetter + TaskSetsGetter> CrdV1Interface for T {}

/// Client for the resource kinds of the arbitrator API group
#[derive(Clone, Debug)]
pub struct CrdV1Client {
    rest_client: RestClient,
}

impl CrdV1Client {
    /// Create a client for `config`. The caller's configuration is left untouched;
    /// defaulting is applied to a copy.
    pub fn new_for_config(config: &RestConfig) -> Result<Self> {
        Self::new_for_config_with(config, &scheme_builder())
    }

    /// Like [`CrdV1Client::new_for_config`], registering kinds through `builder`
    pub fn new_for_config_with(config: &RestConfig, builder: &SchemeBuilder) -> Result<Self> {
        let mut config = config.clone();
        set_config_defaults_with(&mut config, builder)?;
        let rest_client = RestClient::for_config(&config)?;

        info!(
            "Created client for {} at {}",
            rest_client.base_path(),
            config.host()
        );
        Ok(Self::new(rest_client))
    }

    /// Create a client for `config`, panicking if the configuration is invalid.
    ///
    /// Only for callers that treat misconfiguration as a programming error.
    pub fn new_for_config_or_die(config: &RestConfig) -> Self {
        must(Self::new_for_config(config))
    }

    /// Wrap a transport handle that is already scoped to the right group, version
    /// and content type. No defaulting is applied.
    pub fn new(rest_client: RestClient) -> Self {
        Self { rest_client }
    }
}

impl RestClientAccess for CrdV1Client {
    fn rest_client(&self) -> Option<&RestClient> {
        Some(&self.rest_client)
    }
}

impl<T: RestClientAccess + ?Sized> RestClientAccess for &T {
    fn rest_client(&self) -> Option<&RestClient> {
        (**self).rest_client()
    }
}

impl<T: RestClientAccess> RestClientAccess for Option<T> {
    fn rest_client(&self) -> Option<&RestClient> {
        self.as_ref().and_then(|client| client.rest_client())
    }
}

impl QueuesGetter for CrdV1Client {
    fn queues(&self, namespace: &str) -> Queues<'_> {
        Queues::new(&self.rest_client, namespace)
    }
}

impl TaskSetsGetter for CrdV1Client {
    fn task_sets(&self, namespace: &str) -> TaskSets<'_> {
        TaskSets::new(&self.rest_client, namespace)
    }
}

/// Apply the arbitrator group defaults to `config`
pub fn set_config_defaults(config: &mut RestConfig) -> Result<()> {
    set_config_defaults_with(config, &scheme_builder())
}

/// Overwrite group/version, API path, content type and serializer on `config`.
///
/// The scheme is built first; if registration fails `config` is left as it was.
pub fn set_config_defaults_with(config: &mut RestConfig, builder: &SchemeBuilder) -> Result<()> {
    let scheme = builder.build()?;

    config.group_version = Some(scheme_group_version());
    config.api_path = API_PATH.to_string();
    config.content_type = Some(content_type::JSON.to_string());
    config.negotiated_serializer = Some(Codec::json(scheme));

    debug!(
        "Defaulted configuration to {} under {}",
        scheme_group_version(),
        API_PATH
    );
    Ok(())
}
