//! Configuration items and message keys with their derived fields

use crate::config::consts::{DEFAULT_ITEM_TYPE, LOCAL_SUFFIX, MESSAGE_KEY_PREFIX};
use crate::config::ConfigItemDecl;
use serde::Serialize;

const COLOR_PREFIX: &str = "GColor";
const COLOR_SUFFIX: &str = "ARGB8";

/// Anything that received a sequential id from the context builder
pub trait Sequenced {
    /// Fully qualified key
    fn key(&self) -> &str;
    /// Sequential id
    fn id(&self) -> u32;
}

/// A configuration entry with its id and derived metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigItem {
    pub key: String,
    pub default: String,
    #[serde(rename = "type")]
    pub value_type: String,
    pub id: u32,
    /// Key ends in `LOCAL`
    pub local: bool,
    /// Default value as a script literal
    pub script_default: String,
}

impl ConfigItem {
    pub fn from_decl(decl: &ConfigItemDecl, id: u32) -> Self {
        let value_type = decl
            .value_type
            .clone()
            .unwrap_or_else(|| DEFAULT_ITEM_TYPE.to_string());

        Self {
            key: decl.key.clone(),
            default: decl.default.clone(),
            local: decl.key.ends_with(LOCAL_SUFFIX),
            script_default: script_default(&decl.default, &value_type),
            value_type,
            id,
        }
    }
}

impl Sequenced for ConfigItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn id(&self) -> u32 {
        self.id
    }
}

/// A message identifier, namespaced with `MSG_KEY_`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageKey {
    pub key: String,
    pub name: String,
    pub id: u32,
}

impl MessageKey {
    pub fn new(name: &str, id: u32) -> Self {
        Self {
            key: format!("{}{}", MESSAGE_KEY_PREFIX, name),
            name: name.to_string(),
            id,
        }
    }
}

impl Sequenced for MessageKey {
    fn key(&self) -> &str {
        &self.key
    }

    fn id(&self) -> u32 {
        self.id
    }
}

/// Default value as seen by the dynamically typed side
///
/// Integer types get a leading `+` so the script coerces the literal to a
/// number, then colour constants are rewritten to their script form.
pub fn script_default(default: &str, value_type: &str) -> String {
    let literal = if value_type.contains("int") {
        format!("+{}", default)
    } else {
        default.to_string()
    };

    if literal.contains(COLOR_PREFIX) {
        rewrite_color_literal(&literal)
    } else {
        literal
    }
}

/// Rewrite `GColor<Name>ARGB8` into `GColor.<Name>`
///
/// The name spans from the first `GColor` to the last `ARGB8` after it.
/// Text around that span is kept; literals without the pattern are
/// returned unchanged.
pub fn rewrite_color_literal(literal: &str) -> String {
    let Some(start) = literal.find(COLOR_PREFIX) else {
        return literal.to_string();
    };
    let name_start = start + COLOR_PREFIX.len();
    let Some(name_len) = literal[name_start..].rfind(COLOR_SUFFIX) else {
        return literal.to_string();
    };
    let name_end = name_start + name_len;

    format!(
        "{}{}.{}{}",
        &literal[..start],
        COLOR_PREFIX,
        &literal[name_start..name_end],
        &literal[name_end + COLOR_SUFFIX.len()..]
    )
}
