// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! JSON codec bound to a [`Scheme`]

use crate::constants::content_type;
use crate::error::{ArbitratorError, Result};
use crate::scheme::{GroupVersionKind, Scheme};
use kube::core::ObjectList;
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Encodes and decodes request and response bodies for the kinds a scheme knows about.
///
/// Payloads are passed through as-is; no version conversion takes place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Codec {
    content_type: String,
    scheme: Arc<Scheme>,
}

impl Codec {
    pub fn json(scheme: Scheme) -> Self {
        Self {
            content_type: content_type::JSON.to_string(),
            scheme: Arc::new(scheme),
        }
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    pub fn encode<K>(&self, obj: &K) -> Result<Vec<u8>>
    where
        K: Resource<DynamicType = ()> + Serialize,
    {
        let gvk = self.ensure_known::<K>()?;
        serde_json::to_vec(obj)
            .map_err(|e| ArbitratorError::CodecError(format!("Failed to encode {}: {}", gvk, e)))
    }

    pub fn decode<K>(&self, data: &[u8]) -> Result<K>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned,
    {
        let gvk = self.ensure_known::<K>()?;
        let value = parse(data, &gvk)?;
        check_api_version(&value, &gvk)?;
        if let Some(kind) = value.get("kind").and_then(Value::as_str) {
            if kind != gvk.kind {
                return Err(ArbitratorError::CodecError(format!(
                    "expected kind {} but payload carries {}",
                    gvk.kind, kind
                )));
            }
        }

        serde_json::from_value(value)
            .map_err(|e| ArbitratorError::CodecError(format!("Failed to decode {}: {}", gvk, e)))
    }

    pub fn decode_list<K>(&self, data: &[u8]) -> Result<ObjectList<K>>
    where
        K: Resource<DynamicType = ()> + DeserializeOwned + Clone,
    {
        let gvk = self.ensure_known::<K>()?;
        let value = parse(data, &gvk)?;
        check_api_version(&value, &gvk)?;

        serde_json::from_value(value).map_err(|e| {
            ArbitratorError::CodecError(format!("Failed to decode list of {}: {}", gvk, e))
        })
    }

    fn ensure_known<K: Resource<DynamicType = ()>>(&self) -> Result<GroupVersionKind> {
        let gvk = GroupVersionKind::of::<K>();
        if self.scheme.plural_for(&gvk).is_none() {
            return Err(ArbitratorError::CodecError(format!(
                "no kind {} is registered for version {}",
                gvk.kind,
                gvk.group_version()
            )));
        }
        Ok(gvk)
    }
}

fn parse(data: &[u8], gvk: &GroupVersionKind) -> Result<Value> {
    serde_json::from_slice(data)
        .map_err(|e| ArbitratorError::CodecError(format!("Invalid JSON for {}: {}", gvk, e)))
}

fn check_api_version(value: &Value, gvk: &GroupVersionKind) -> Result<()> {
    let expected = gvk.group_version().api_version();
    match value.get("apiVersion").and_then(Value::as_str) {
        Some(found) if found != expected => Err(ArbitratorError::CodecError(format!(
            "expected apiVersion {} but payload carries {}",
            expected, found
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Queue, QueueSpec, TaskSet};

    fn queue_codec() -> Codec {
        let mut scheme = Scheme::new();
        scheme.add_known_type::<Queue>().unwrap();
        Codec::json(scheme)
    }

    #[test]
    fn test_content_type_is_json() {
        assert_eq!(queue_codec().content_type(), "application/json");
    }

    #[test]
    fn test_encode_includes_type_meta() {
        let queue = Queue::new("q1", QueueSpec::default());
        let bytes = queue_codec().encode(&queue).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(value["apiVersion"], "arbitrator.incubator.k8s.io/v1");
        assert_eq!(value["kind"], "Queue");
        assert_eq!(value["metadata"]["name"], "q1");
    }

    #[test]
    fn test_unregistered_kind_is_rejected() {
        let err = queue_codec()
            .decode::<TaskSet>(br#"{"metadata":{},"spec":{}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("no kind TaskSet is registered"));
    }

    #[test]
    fn test_decode_rejects_foreign_api_version() {
        let payload = br#"{"apiVersion":"other.io/v2","kind":"Queue","metadata":{"name":"q"},"spec":{}}"#;
        let err = queue_codec().decode::<Queue>(payload).unwrap_err();
        assert!(matches!(err, ArbitratorError::CodecError(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_kind() {
        let payload = br#"{"apiVersion":"arbitrator.incubator.k8s.io/v1","kind":"TaskSet","metadata":{"name":"q"},"spec":{}}"#;
        assert!(queue_codec().decode::<Queue>(payload).is_err());
    }

    #[test]
    fn test_decode_object() {
        let payload = br#"{"apiVersion":"arbitrator.incubator.k8s.io/v1","kind":"Queue","metadata":{"name":"q","namespace":"ns"},"spec":{"weight":3}}"#;
        let queue = queue_codec().decode::<Queue>(payload).unwrap();

        assert_eq!(queue.metadata.name.as_deref(), Some("q"));
        assert_eq!(queue.spec.weight, 3);
    }

    #[test]
    fn test_decode_list() {
        let payload = br#"{"apiVersion":"arbitrator.incubator.k8s.io/v1","kind":"QueueList","metadata":{"resourceVersion":"7"},"items":[{"metadata":{"name":"a"},"spec":{"weight":1}},{"metadata":{"name":"b"},"spec":{"weight":2}}]}"#;
        let list = queue_codec().decode_list::<Queue>(payload).unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.metadata.resource_version.as_deref(), Some("7"));
    }

    #[test]
    fn test_codecs_compare_by_scheme() {
        assert_eq!(queue_codec(), queue_codec());
        assert_ne!(queue_codec(), Codec::json(Scheme::new()));
    }
}
