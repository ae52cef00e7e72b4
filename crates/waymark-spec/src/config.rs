//! Collection configuration types.
//!
//! A [`CollectionConfig`] is the declarative input to a generation run: the
//! trait layers, the rarity scoring table, the tier ladder, the twelve
//! narrative stations, and the per-station allocation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::allocation::AllocationSpec;
use crate::error::SpecError;

/// Current config version.
pub const CONFIG_VERSION: u32 = 1;

/// Number of attribute layers every configuration declares.
pub const LAYER_COUNT: usize = 7;

/// Number of traits every layer declares.
pub const TRAITS_PER_LAYER: usize = 9;

/// Number of tiers in the score ladder.
pub const TIER_COUNT: usize = 7;

/// Number of narrative stations.
pub const STATION_COUNT: usize = 12;

/// Standard collection size.
pub const STANDARD_COLLECTION_SIZE: u32 = 333;

/// The bundled configuration document (JSON).
pub const BUILTIN_CONFIG: &str = include_str!("../data/default_collection.json");

/// Rarity class of a trait.
///
/// Variants are declared in ascending order; scoring weights must increase
/// along this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    /// Most common class.
    Chaos,
    /// Uncommon class.
    Threshold,
    /// Rare class.
    OrdealReward,
    /// Rarest class.
    Mythic,
}

impl Rarity {
    /// Returns the rarity as its configuration string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Chaos => "CHAOS",
            Rarity::Threshold => "THRESHOLD",
            Rarity::OrdealReward => "ORDEAL_REWARD",
            Rarity::Mythic => "MYTHIC",
        }
    }

    /// Returns all rarities in ascending order.
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Chaos,
            Rarity::Threshold,
            Rarity::OrdealReward,
            Rarity::Mythic,
        ]
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CHAOS" => Ok(Rarity::Chaos),
            "THRESHOLD" => Ok(Rarity::Threshold),
            "ORDEAL_REWARD" => Ok(Rarity::OrdealReward),
            "MYTHIC" => Ok(Rarity::Mythic),
            _ => Err(format!("unknown rarity: {}", s)),
        }
    }
}

/// Rarity → weight lookup table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringTable {
    weights: BTreeMap<Rarity, u32>,
}

impl ScoringTable {
    /// Builds a table from (rarity, weight) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Rarity, u32)>) -> Self {
        Self {
            weights: pairs.into_iter().collect(),
        }
    }

    /// Weight for a rarity, if declared.
    pub fn weight(&self, rarity: Rarity) -> Option<u32> {
        self.weights.get(&rarity).copied()
    }

    /// Smallest declared weight.
    pub fn min_weight(&self) -> Option<u32> {
        self.weights.values().copied().min()
    }

    /// Largest declared weight.
    pub fn max_weight(&self) -> Option<u32> {
        self.weights.values().copied().max()
    }

    /// Iterates declared (rarity, weight) pairs in rarity order.
    pub fn iter(&self) -> impl Iterator<Item = (Rarity, u32)> + '_ {
        self.weights.iter().map(|(r, w)| (*r, *w))
    }
}

/// One selectable value within a layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Trait {
    /// Display name; also the lookup key for asset resolution.
    pub name: String,
    /// Rarity class.
    pub category: Rarity,
    /// Explicit asset filename, overriding the normalized display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Trait {
    /// Creates a trait without a filename override.
    pub fn new(name: impl Into<String>, category: Rarity) -> Self {
        Self {
            name: name.into(),
            category,
            file: None,
        }
    }

    /// Asset filename for this trait.
    pub fn asset_file(&self) -> String {
        match &self.file {
            Some(file) => file.clone(),
            None => format!("{}.png", normalize_asset_name(&self.name)),
        }
    }
}

/// A named attribute dimension with its traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Layer {
    /// Layer name (e.g. "Background").
    pub name: String,
    /// Asset directory relative to the assets root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Ordered trait list.
    pub traits: Vec<Trait>,
}

impl Layer {
    /// Finds a trait by exact display name.
    pub fn trait_named(&self, name: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.name == name)
    }

    /// Asset directory for this layer.
    pub fn asset_directory(&self) -> String {
        match &self.directory {
            Some(dir) => dir.clone(),
            None => normalize_asset_name(&self.name),
        }
    }
}

/// A rung of the score ladder with an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tier {
    /// 1-based rank.
    pub rank: u32,
    /// Display name.
    pub name: String,
    /// Inclusive lower bound.
    pub min: u32,
    /// Inclusive upper bound.
    pub max: u32,
}

impl Tier {
    /// Returns true if the score lies within this tier's range.
    pub fn contains(&self, score: u32) -> bool {
        self.min <= score && score <= self.max
    }
}

/// One stage of the narrative sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Station {
    /// Station id, 1..=12.
    pub id: u32,
    /// Display name.
    pub name: String,
}

/// Collection display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionMeta {
    /// Collection name used in record display names.
    pub name: String,
    /// Short symbol.
    pub symbol: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared number of members.
    pub size: u32,
    /// Default seed when none is given on the command line.
    pub seed: String,
    /// Base URI prefixed to image file names in record provenance.
    pub image_base_uri: String,
    /// Creator identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
}

/// Output canvas settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Layer names bottom-to-top.
    pub render_order: Vec<String>,
}

/// The full collection configuration document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionConfig {
    /// Schema version; must be 1.
    pub config_version: u32,
    /// Display metadata.
    pub collection: CollectionMeta,
    /// Canvas and render order.
    pub canvas: CanvasConfig,
    /// Rarity weights.
    pub scoring: ScoringTable,
    /// Attribute layers in draw order.
    pub layers: Vec<Layer>,
    /// Score ladder.
    pub tiers: Vec<Tier>,
    /// Narrative stations.
    pub stations: Vec<Station>,
    /// Per-station allocation.
    pub allocation: AllocationSpec,
}

impl CollectionConfig {
    /// The configuration bundled with this crate.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CONFIG).expect("bundled collection config must parse")
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SpecError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the configuration to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Finds a layer by exact name.
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Finds a station by id.
    pub fn station(&self, id: u32) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    /// Lowest achievable total score.
    ///
    /// `None` if the scoring table is empty or the bound overflows `u32`.
    pub fn min_score(&self) -> Option<u32> {
        self.scoring.min_weight().and_then(|w| self.score_bound(w))
    }

    /// Highest achievable total score.
    ///
    /// `None` if the scoring table is empty or the bound overflows `u32`.
    pub fn max_score(&self) -> Option<u32> {
        self.scoring.max_weight().and_then(|w| self.score_bound(w))
    }

    fn score_bound(&self, weight: u32) -> Option<u32> {
        u32::try_from(self.layers.len())
            .ok()
            .and_then(|layers| weight.checked_mul(layers))
    }

    /// Number of digits in zero-padded record ids.
    pub fn id_width(&self) -> usize {
        id_width(self.collection.size)
    }
}

/// Number of digits needed to print every id of a collection of `size`.
pub fn id_width(size: u32) -> usize {
    size.max(1).to_string().len().max(3)
}

/// Normalizes a display name to a file stem.
///
/// Lowercases, collapses every run of non-alphanumeric characters to `_`, and
/// trims leading/trailing `_`.
///
/// ```
/// use waymark_spec::config::normalize_asset_name;
///
/// assert_eq!(normalize_asset_name("Star-Crowned Helm"), "star_crowned_helm");
/// assert_eq!(normalize_asset_name("  Void's Edge! "), "void_s_edge");
/// ```
pub fn normalize_asset_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    out
}
