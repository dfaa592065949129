//! Named marker for the sequence axis of a batch.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Symbolic name of the dynamic (sequence) axis.
///
/// When a batch is converted along a dynamic axis, every sample is a sequence
/// whose leading dimension may differ between samples; only the per-step shape
/// has to agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DynamicAxis(Arc<str>);

impl DynamicAxis {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Arc::<str>::from(name.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An unnamed marker is treated as if no dynamic axis was given.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DynamicAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DynamicAxis {
    fn from(name: &str) -> Self {
        DynamicAxis::new(name)
    }
}

impl Serialize for DynamicAxis {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DynamicAxis {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(DynamicAxis::new(name))
    }
}
