// Output formatting: terminal display and JSON rendering.

pub mod terminal;

use anyhow::Result;
use serde::Serialize;

/// Render any report as pretty-printed JSON for the response layer.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
