//! Conversion settings, loadable from JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::layout::FlattenOrder;
use crate::sparse::DynamicAxis;

/// Settings for [`SparseConverter`](crate::sparse::SparseConverter).
///
/// ```json
/// { "dynamic_axis": "time", "order": "column_major" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    /// Sequence axis excluded from the shape check. An empty name counts as absent.
    #[serde(default)]
    pub dynamic_axis: Option<DynamicAxis>,
    /// Flattening order. Falls back to `SPARSE_FEED_ORDER`, then column-major.
    #[serde(default)]
    pub order: Option<FlattenOrder>,
}

impl ConversionConfig {
    pub fn with_dynamic_axis(mut self, axis: impl Into<DynamicAxis>) -> Self {
        self.dynamic_axis = Some(axis.into());
        self
    }

    pub fn with_order(mut self, order: FlattenOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// The dynamic axis, if one was given with a non-empty name.
    pub fn effective_dynamic_axis(&self) -> Option<&DynamicAxis> {
        self.dynamic_axis.as_ref().filter(|axis| !axis.is_empty())
    }

    pub fn resolved_order(&self) -> FlattenOrder {
        self.order
            .or_else(env::order_override)
            .unwrap_or_default()
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        serde_json::from_str(data).context("failed to parse sparse conversion config")
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read sparse conversion config {}", path.display()))?;
        Self::from_json_str(&data)
            .with_context(|| format!("invalid sparse conversion config {}", path.display()))
    }
}
