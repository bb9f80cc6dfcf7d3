// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Identity of the arbitrator API group and registration of its kinds

use crate::error::Result;
use crate::scheme::{AddToScheme, GroupVersion, Scheme, SchemeBuilder};
use crate::types::{Queue, TaskSet};

pub const GROUP_NAME: &str = "arbitrator.incubator.k8s.io";
pub const VERSION: &str = "v1";

pub fn scheme_group_version() -> GroupVersion {
    GroupVersion::new(GROUP_NAME, VERSION)
}

/// Register every kind served by this group/version
pub fn add_known_types(scheme: &mut Scheme) -> Result<()> {
    scheme.add_known_type::<Queue>()?;
    scheme.add_known_type::<TaskSet>()?;
    Ok(())
}

pub fn scheme_builder() -> SchemeBuilder {
    SchemeBuilder::new([add_known_types as AddToScheme])
}
