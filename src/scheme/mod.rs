// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Locally scoped type registry and the codec bound to it.
//!
//! A [`Scheme`] is a plain value: it is built per client construction by a
//! [`SchemeBuilder`], handed to a [`Codec`] and never shared through a global.

pub mod codec;

pub use codec::Codec;

use crate::error::{ArbitratorError, Result};
use kube::Resource;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies a family of resource kinds and the schema revision they speak
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupVersion {
    pub group: String,
    pub version: String,
}

impl GroupVersion {
    pub fn new(group: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
        }
    }

    pub fn with_kind(&self, kind: impl Into<String>) -> GroupVersionKind {
        GroupVersionKind {
            group: self.group.clone(),
            version: self.version.clone(),
            kind: kind.into(),
        }
    }

    /// The `apiVersion` string objects of this group/version carry
    pub fn api_version(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupVersionKind {
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    /// Group/version/kind of a statically typed kube resource
    pub fn of<K: Resource<DynamicType = ()>>() -> Self {
        Self {
            group: K::group(&()).into_owned(),
            version: K::version(&()).into_owned(),
            kind: K::kind(&()).into_owned(),
        }
    }

    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::new(self.group.clone(), self.version.clone())
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.group_version(), self.kind)
    }
}

/// Registry of the resource kinds a codec may encode and decode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scheme {
    known_types: BTreeMap<GroupVersionKind, String>,
}

impl Scheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K` under its group/version/kind. Registering a kind twice is an error.
    pub fn add_known_type<K: Resource<DynamicType = ()>>(&mut self) -> Result<()> {
        let gvk = GroupVersionKind::of::<K>();
        if self.known_types.contains_key(&gvk) {
            return Err(ArbitratorError::SchemeError(format!(
                "kind {} is already registered",
                gvk
            )));
        }
        self.known_types.insert(gvk, K::plural(&()).into_owned());
        Ok(())
    }

    pub fn recognizes<K: Resource<DynamicType = ()>>(&self) -> bool {
        self.known_types.contains_key(&GroupVersionKind::of::<K>())
    }

    /// Plural resource name a registered kind is served under
    pub fn plural_for(&self, gvk: &GroupVersionKind) -> Option<&str> {
        self.known_types.get(gvk).map(String::as_str)
    }

    pub fn known_kinds(&self) -> impl Iterator<Item = &GroupVersionKind> {
        self.known_types.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.known_types.is_empty()
    }
}

/// A function that registers one or more kinds into a scheme
pub type AddToScheme = fn(&mut Scheme) -> Result<()>;

/// Ordered set of registration functions, run against a fresh [`Scheme`] on every build
#[derive(Clone, Debug, Default)]
pub struct SchemeBuilder {
    registrations: Vec<AddToScheme>,
}

impl SchemeBuilder {
    pub fn new(registrations: impl IntoIterator<Item = AddToScheme>) -> Self {
        Self {
            registrations: registrations.into_iter().collect(),
        }
    }

    pub fn register(mut self, add: AddToScheme) -> Self {
        self.registrations.push(add);
        self
    }

    /// Run every registration against `scheme`, stopping at the first failure
    pub fn add_to_scheme(&self, scheme: &mut Scheme) -> Result<()> {
        for add in &self.registrations {
            add(scheme)?;
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Scheme> {
        let mut scheme = Scheme::new();
        self.add_to_scheme(&mut scheme)?;
        Ok(scheme)
    }
}
