use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// an activation directive for a generator extension
///
/// whether `name` resolves to an installed plugin is checked by the
/// generator itself, not here
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Plugin {
    pub name: String,

    /// options passed to the plugin verbatim
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, toml::Value>,
}
