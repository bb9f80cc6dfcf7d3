// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Transport handle scoped to one API group/version

use crate::error::{ArbitratorError, Result};
use crate::rest::RestConfig;
use crate::scheme::{Codec, GroupVersion};
use futures::stream::BoxStream;
use futures::StreamExt;
use http::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use kube::api::{DeleteParams, GetParams, ListParams, PostParams, WatchEvent, WatchParams};
use kube::core::{ObjectList, Request};
use kube::{Client, Resource};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Long-lived feed of change notifications for a resource collection
pub type WatchStream<K> = BoxStream<'static, Result<WatchEvent<K>>>;

/// Issues addressed REST requests for one group/version through a kube [`Client`].
///
/// Every request carries the handle's content type and is encoded/decoded with its
/// codec. Server and network failures come back as [`ArbitratorError::KubeError`]
/// exactly as the kube client classified them; nothing is retried here.
#[derive(Clone)]
pub struct RestClient {
    client: Client,
    base_path: String,
    group_version: GroupVersion,
    content_type: String,
    content_type_header: HeaderValue,
    codec: Codec,
}

impl RestClient {
    /// Build a handle from a fully defaulted configuration
    pub fn for_config(config: &RestConfig) -> Result<Self> {
        let group_version = config.group_version.clone().ok_or_else(|| {
            ArbitratorError::ConfigurationError(
                "GroupVersion is required when initializing a RestClient".to_string(),
            )
        })?;
        let codec = config.negotiated_serializer.clone().ok_or_else(|| {
            ArbitratorError::ConfigurationError(
                "NegotiatedSerializer is required when initializing a RestClient".to_string(),
            )
        })?;
        let content_type = config
            .content_type
            .clone()
            .unwrap_or_else(|| codec.content_type().to_string());

        // The kube client spawns its buffer task on the current runtime
        tokio::runtime::Handle::try_current().map_err(|e| {
            ArbitratorError::ConfigurationError(format!("Failed to create client: {}", e))
        })?;
        let client = Client::try_from(config.kube.clone()).map_err(|e| {
            ArbitratorError::ConfigurationError(format!("Failed to create client: {}", e))
        })?;

        Self::new(
            client,
            &config.api_path,
            group_version,
            &content_type,
            codec,
        )
    }

    /// Wrap an existing kube client. Nothing is defaulted: the handle uses exactly
    /// the path prefix, group/version, content type and codec it is given.
    pub fn new(
        client: Client,
        api_path: &str,
        group_version: GroupVersion,
        content_type: &str,
        codec: Codec,
    ) -> Result<Self> {
        let content_type_header = HeaderValue::from_str(content_type).map_err(|e| {
            ArbitratorError::ConfigurationError(format!(
                "Invalid content type '{}': {}",
                content_type, e
            ))
        })?;

        Ok(Self {
            client,
            base_path: base_path(api_path, &group_version),
            group_version,
            content_type: content_type.to_string(),
            content_type_header,
            codec,
        })
    }

    /// Path every request is addressed under, e.g. `/apis/{group}/{version}`
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn group_version(&self) -> &GroupVersion {
        &self.group_version
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Collection path of `K`, cluster wide when `namespace` is empty
    pub fn resource_path<K: Resource<DynamicType = ()>>(&self, namespace: &str) -> String {
        if namespace.is_empty() {
            format!("{}/{}", self.base_path, K::plural(&()))
        } else {
            format!(
                "{}/namespaces/{}/{}",
                self.base_path,
                namespace,
                K::plural(&())
            )
        }
    }

    #[instrument(skip(self), fields(kind = %K::kind(&())))]
    pub async fn get<K>(&self, namespace: &str, name: &str) -> Result<K>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        validate_segment("name", name)?;
        let req = self
            .request::<K>(namespace)?
            .get(name, &GetParams::default())
            .map_err(kube::Error::BuildRequest)?;
        let body = self.send(req).await?;
        self.codec.decode(body.as_bytes())
    }

    #[instrument(skip(self), fields(kind = %K::kind(&())))]
    pub async fn list<K>(&self, namespace: &str, lp: &ListParams) -> Result<ObjectList<K>>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned + Clone,
    {
        let req = self
            .request::<K>(namespace)?
            .list(lp)
            .map_err(kube::Error::BuildRequest)?;
        let body = self.send(req).await?;
        self.codec.decode_list(body.as_bytes())
    }

    #[instrument(skip(self), fields(kind = %K::kind(&())))]
    pub async fn watch<K>(
        &self,
        namespace: &str,
        wp: &WatchParams,
        resource_version: &str,
    ) -> Result<WatchStream<K>>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned + Clone + Send + 'static,
    {
        let mut req = self
            .request::<K>(namespace)?
            .watch(wp, resource_version)
            .map_err(kube::Error::BuildRequest)?;
        req.extensions_mut().insert("watch");
        let req = self.with_headers(req);
        debug!("{} {}", req.method(), req.uri());

        let events = self.client.request_events::<K>(req).await?;
        Ok(events
            .map(|event| event.map_err(ArbitratorError::from))
            .boxed())
    }

    #[instrument(skip(self, obj), fields(kind = %K::kind(&())))]
    pub async fn create<K>(&self, namespace: &str, obj: &K) -> Result<K>
    where
        K: Resource<DynamicType = ()> + Serialize + DeserializeOwned,
    {
        let data = self.codec.encode(obj)?;
        let req = self
            .request::<K>(namespace)?
            .create(&PostParams::default(), data)
            .map_err(kube::Error::BuildRequest)?;
        let body = self.send(req).await?;
        self.codec.decode(body.as_bytes())
    }

    /// Replace the object named by `obj.metadata.name`
    #[instrument(skip(self, obj), fields(kind = %K::kind(&())))]
    pub async fn replace<K>(&self, namespace: &str, obj: &K) -> Result<K>
    where
        K: Resource<DynamicType = ()> + Serialize + DeserializeOwned,
    {
        let Some(name) = obj.meta().name.as_deref() else {
            return Err(ArbitratorError::InvalidResource(format!(
                "{} to update has no metadata.name",
                K::kind(&())
            )));
        };
        validate_segment("name", name)?;
        let data = self.codec.encode(obj)?;
        let req = self
            .request::<K>(namespace)?
            .replace(name, &PostParams::default(), data)
            .map_err(kube::Error::BuildRequest)?;
        let body = self.send(req).await?;
        self.codec.decode(body.as_bytes())
    }

    #[instrument(skip(self), fields(kind = %K::kind(&())))]
    pub async fn delete<K>(&self, namespace: &str, name: &str, dp: &DeleteParams) -> Result<()>
    where
        K: Resource<DynamicType = ()>,
    {
        validate_segment("name", name)?;
        let req = self
            .request::<K>(namespace)?
            .delete(name, dp)
            .map_err(kube::Error::BuildRequest)?;
        // The server answers with either the deleted object or a Status; neither is needed
        self.send(req).await?;
        Ok(())
    }

    fn request<K: Resource<DynamicType = ()>>(&self, namespace: &str) -> Result<Request> {
        if !self.codec.scheme().recognizes::<K>() {
            return Err(ArbitratorError::CodecError(format!(
                "no kind {} is registered for version {}",
                K::kind(&()),
                K::api_version(&())
            )));
        }
        if !namespace.is_empty() {
            validate_segment("namespace", namespace)?;
        }
        Ok(Request::new(self.resource_path::<K>(namespace)))
    }

    fn with_headers(&self, mut req: http::Request<Vec<u8>>) -> http::Request<Vec<u8>> {
        let has_body = !req.body().is_empty();
        let headers = req.headers_mut();
        headers.insert(ACCEPT, self.content_type_header.clone());
        if has_body {
            headers.insert(CONTENT_TYPE, self.content_type_header.clone());
        }
        req
    }

    async fn send(&self, req: http::Request<Vec<u8>>) -> Result<String> {
        let req = self.with_headers(req);
        debug!("{} {}", req.method(), req.uri());
        Ok(self.client.request_text(req).await?)
    }
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_path", &self.base_path)
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

/// A name or namespace must stay a single path segment
fn validate_segment(what: &str, value: &str) -> Result<()> {
    let reason = match value {
        "" => Some("may not be empty"),
        "." | ".." => Some("may not be '.' or '..'"),
        _ if value.contains('/') => Some("may not contain '/'"),
        _ if value.contains('%') => Some("may not contain '%'"),
        _ => None,
    };
    match reason {
        Some(reason) => Err(ArbitratorError::InvalidResource(format!(
            "{} '{}' {}",
            what, value, reason
        ))),
        None => Ok(()),
    }
}

fn base_path(api_path: &str, group_version: &GroupVersion) -> String {
    let prefix = api_path.trim_end_matches('/');
    if group_version.group.is_empty() {
        format!("{}/{}", prefix, group_version.version)
    } else {
        format!(
            "{}/{}/{}",
            prefix, group_version.group, group_version.version
        )
    }
}
