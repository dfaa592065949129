use std::env;
use std::sync::OnceLock;

use crate::layout::FlattenOrder;

static SPARSE_FEED_ORDER: OnceLock<Option<FlattenOrder>> = OnceLock::new();

fn parse_order(value: &str) -> Option<FlattenOrder> {
    let parsed = FlattenOrder::parse(value);
    if parsed.is_none() {
        tracing::warn!(value, "ignoring unrecognized SPARSE_FEED_ORDER");
    }
    parsed
}

pub(crate) fn order_override() -> Option<FlattenOrder> {
    *SPARSE_FEED_ORDER.get_or_init(|| match env::var("SPARSE_FEED_ORDER") {
        Ok(value) if !value.trim().is_empty() => parse_order(&value),
        _ => None,
    })
}
