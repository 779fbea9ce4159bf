use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Spelling of an unbounded size in serialized output. JSON has no infinity,
/// so emitters that produce a JS module turn this back into `Infinity`.
pub const INFINITY: &str = "Infinity";

/// Minimum chunk size before the splitter creates a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinSize {
    Bytes(u64),
    /// Never split on size alone
    Infinite,
}

impl Serialize for MinSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MinSize::Bytes(bytes) => serializer.serialize_u64(*bytes),
            MinSize::Infinite => serializer.serialize_str(INFINITY),
        }
    }
}

impl<'de> Deserialize<'de> for MinSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bytes(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bytes(bytes) => Ok(MinSize::Bytes(bytes)),
            Repr::Text(text) if text == INFINITY => Ok(MinSize::Infinite),
            Repr::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a byte count or \"{INFINITY}\", got {text:?}"
            ))),
        }
    }
}

/// `optimization.splitChunks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SplitChunksOptions {
    pub chunks: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<MinSize>,

    #[serde(default)]
    pub cache_groups: IndexMap<String, CacheGroup>,
}

/// Named grouping policy inside `cacheGroups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CacheGroup {
    pub name: String,
    pub chunks: String,
    pub min_size: MinSize,
}
