//! Generated record schema.
//!
//! One [`GeneratedRecord`] is emitted per collection member. The layout is a
//! stable output format: field names and order are part of what downstream
//! consumers read.

use serde::{Deserialize, Serialize};

use crate::allocation::MemberKind;
use crate::config::Rarity;

/// Creator share carried in every record's provenance.
pub const CREATOR_SHARE: u32 = 100;

/// Station reference embedded in a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationRef {
    /// Station id.
    pub id: u32,
    /// Station display name.
    pub name: String,
}

/// One drafted (layer, trait) pair with its rarity and weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftedAttribute {
    /// Layer name.
    pub layer: String,
    /// Trait display name.
    pub value: String,
    /// Rarity class of the trait.
    pub rarity: Rarity,
    /// Weight of the rarity class.
    pub weight: u32,
}

/// Origin metadata for a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    /// Collection name.
    pub collection_name: String,
    /// Image reference for this record.
    pub image: String,
    /// Creator share (always 100).
    pub creator_share: u32,
}

/// A fully generated collection member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecord {
    /// 1-based id.
    pub id: u32,
    /// `"<collection> #<padded id>"`.
    pub display_name: String,
    /// Station the member belongs to.
    pub station: StationRef,
    /// Member kind.
    pub member_kind: MemberKind,
    /// One attribute per layer, in layer declaration order.
    pub attributes: Vec<DraftedAttribute>,
    /// Sum of attribute weights.
    pub total_score: u32,
    /// Name of the tier containing `total_score`.
    pub tier_name: String,
    /// Rank of the tier containing `total_score`.
    pub tier_rank: u32,
    /// Decorative 4-character code.
    pub short_code: String,
    /// Generation timestamp supplied by the caller.
    pub timestamp: String,
    /// Origin metadata.
    pub provenance: Provenance,
}

impl GeneratedRecord {
    /// Looks up the drafted value for a layer.
    pub fn attribute(&self, layer: &str) -> Option<&DraftedAttribute> {
        self.attributes.iter().find(|a| a.layer == layer)
    }

    /// Serializes the record to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the record with the timestamp blanked.
    ///
    /// Two runs with the same seed produce identical bytes here.
    pub fn to_json_without_timestamp(&self) -> Result<String, serde_json::Error> {
        let mut copy = self.clone();
        copy.timestamp.clear();
        serde_json::to_string(&copy)
    }
}

/// Zero-pads an id to `width` digits.
///
/// ```
/// use waymark_spec::record::pad_id;
///
/// assert_eq!(pad_id(7, 3), "007");
/// assert_eq!(pad_id(333, 3), "333");
/// ```
pub fn pad_id(id: u32, width: usize) -> String {
    format!("{:0width$}", id, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GeneratedRecord {
        GeneratedRecord {
            id: 12,
            display_name: "Waymark #012".to_string(),
            station: StationRef {
                id: 8,
                name: "The Ordeal".to_string(),
            },
            member_kind: MemberKind::Hybrid,
            attributes: vec![DraftedAttribute {
                layer: "Background".to_string(),
                value: "Starwell".to_string(),
                rarity: Rarity::OrdealReward,
                weight: 3,
            }],
            total_score: 3,
            tier_name: "Wanderer".to_string(),
            tier_rank: 1,
            short_code: "K7QZ".to_string(),
            timestamp: "2026-01-01T00:00:00Z".to_string(),
            provenance: Provenance {
                collection_name: "Waymark".to_string(),
                image: "ipfs://waymark/images/012.png".to_string(),
                creator_share: CREATOR_SHARE,
            },
        }
    }

    #[test]
    fn test_record_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["member_kind"], "Hybrid");
        assert_eq!(value["attributes"][0]["rarity"], "ORDEAL_REWARD");
        assert_eq!(value["station"]["name"], "The Ordeal");
        assert_eq!(value["provenance"]["creator_share"], 100);
    }

    #[test]
    fn test_without_timestamp_ignores_clock() {
        let a = sample();
        let mut b = sample();
        b.timestamp = "2030-06-01T12:00:00Z".to_string();
        assert_ne!(a.to_json_pretty().unwrap(), b.to_json_pretty().unwrap());
        assert_eq!(
            a.to_json_without_timestamp().unwrap(),
            b.to_json_without_timestamp().unwrap()
        );
    }

    #[test]
    fn test_attribute_lookup() {
        let record = sample();
        assert_eq!(record.attribute("Background").unwrap().value, "Starwell");
        assert!(record.attribute("Aura").is_none());
    }
}
