use ahash::AHashMap;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1 {
    pub version: u8,
    #[serde(default)]
    pub latch: Option<String>,
    #[serde(default)]
    pub movement: ProfileV1Movement,
    #[serde(default)]
    pub buttons: AHashMap<String, Option<String>>, // button -> key, null unbinds
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct ProfileV1Movement {
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
    #[serde(default)]
    pub up: Option<String>,
}
