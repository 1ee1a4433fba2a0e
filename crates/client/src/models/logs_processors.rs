//! Logs pipeline processor models.
//!
//! Responsibilities:
//! - Model the processor kinds a logs pipeline can run, one enum variant per
//!   `type` discriminator.
//! - Convert between the flat wire object (`type`, `name`, `is_enabled` and
//!   the definition's own keys) and [`LogsProcessor`].
//!
//! Does NOT handle:
//! - Pipeline-level fields (see `logs_pipelines`).
//!
//! Invariants:
//! - The five source remappers share one shape but keep distinct variants, so
//!   the discriminator read on decode is the one written on encode.
//! - Nested `pipeline` processors decode through the same codec, to any depth.
//! - Category order is preserved.
//! - List fields (`sources`, `categories`, nested `processors`) are optional:
//!   an absent key stays absent on re-encode and `[]` stays `[]`.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::codec::{self, DISCRIMINATOR_KEY, tagged_definitions};
use crate::models::common::FilterQuery;

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ArithmeticProcessor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_replace_missing: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeRemapper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_on_conflict: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CategoryProcessor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Evaluated in order; the first matching category wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Category {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterQuery>,
}

impl Category {
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            filter: Some(FilterQuery::new(query)),
        }
    }
}

/// Shape shared by the date, message, service, status and trace-id remappers.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SourceRemapper {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrokParser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grok: Option<GrokRule>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GrokRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_rules: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_rules: Option<String>,
}

/// A pipeline embedded as a processor of another pipeline.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NestedPipeline {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processors: Option<Vec<LogsProcessor>>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UrlParser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_ending_slashes: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserAgentParser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_encoded: Option<bool>,
}

tagged_definitions! {
    /// Discriminator of a logs processor (`type` on the wire).
    kind ProcessorType;
    /// Concrete payload of a logs processor.
    definition ProcessorDefinition;
    entity "logs processor";
    Arithmetic(ArithmeticProcessor) => "arithmetic-processor",
    AttributeRemapper(AttributeRemapper) => "attribute-remapper",
    Category(CategoryProcessor) => "category-processor",
    DateRemapper(SourceRemapper) => "date-remapper",
    GrokParser(GrokParser) => "grok-parser",
    MessageRemapper(SourceRemapper) => "message-remapper",
    Pipeline(NestedPipeline) => "pipeline",
    ServiceRemapper(SourceRemapper) => "service-remapper",
    StatusRemapper(SourceRemapper) => "status-remapper",
    TraceIdRemapper(SourceRemapper) => "trace-id-remapper",
    UrlParser(UrlParser) => "url-parser",
    UserAgentParser(UserAgentParser) => "user-agent-parser",
}

/// One step of a logs pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct LogsProcessor {
    pub name: Option<String>,
    pub is_enabled: Option<bool>,
    pub definition: ProcessorDefinition,
}

impl LogsProcessor {
    pub fn new(name: impl Into<String>, definition: ProcessorDefinition) -> Self {
        Self {
            name: Some(name.into()),
            is_enabled: Some(true),
            definition,
        }
    }

    pub fn kind(&self) -> ProcessorType {
        self.definition.kind()
    }
}

impl Serialize for LogsProcessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let definition = self.definition.to_value().map_err(ser::Error::custom)?;
        let mut extra = Map::new();
        extra.insert(
            DISCRIMINATOR_KEY.to_string(),
            Value::String(self.kind().as_str().to_string()),
        );
        if let Some(name) = &self.name {
            extra.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(is_enabled) = self.is_enabled {
            extra.insert("is_enabled".to_string(), Value::Bool(is_enabled));
        }
        codec::merge_flat(definition, extra)
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LogsProcessor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let tag =
            codec::take_discriminator(&mut map, "logs processor").map_err(de::Error::custom)?;
        let kind: ProcessorType = tag.parse().map_err(de::Error::custom)?;

        let name = match map.remove("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "logs processor `name` must be a string, found {other}"
                )));
            }
        };
        let is_enabled = match map.remove("is_enabled") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(flag)) => Some(flag),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "logs processor `is_enabled` must be a boolean, found {other}"
                )));
            }
        };

        let definition =
            ProcessorDefinition::from_value(kind, Value::Object(map)).map_err(de::Error::custom)?;
        Ok(Self {
            name,
            is_enabled,
            definition,
        })
    }
}
