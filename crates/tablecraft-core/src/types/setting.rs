//! Table setting types: zones, item kinds, items, and the full setting.
//!
//! A `TableSetting` is created by a successful generation (or substituted
//! with the catalog default on failure) and replaced wholesale whenever the
//! triggering selection changes. Items are immutable once part of a setting.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// Named relative position around a place setting.
///
/// Every zone maps to exactly one fixed relative coordinate (see
/// [`crate::layout::zone_position`]). `CenterTop` is a reserved enumerant the
/// backend schema never produces; it doubles as the catch-all for unknown
/// wire values and renders at the center coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Center,
    #[serde(rename = "left_1")]
    Left1,
    #[serde(rename = "left_2")]
    Left2,
    #[serde(rename = "left_3")]
    Left3,
    #[serde(rename = "right_1")]
    Right1,
    #[serde(rename = "right_2")]
    Right2,
    #[serde(rename = "right_3")]
    Right3,
    TopLeft,
    TopRight,
    TopCenter,
    CenterTop,
}

impl<'de> Deserialize<'de> for Zone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Zone::from_wire(&value))
    }
}

impl Zone {
    /// Parse a wire value. Unknown values degrade to the reserved enumerant,
    /// which renders at the center coordinate.
    pub fn from_wire(value: &str) -> Zone {
        match value {
            "center" => Zone::Center,
            "left_1" => Zone::Left1,
            "left_2" => Zone::Left2,
            "left_3" => Zone::Left3,
            "right_1" => Zone::Right1,
            "right_2" => Zone::Right2,
            "right_3" => Zone::Right3,
            "top_left" => Zone::TopLeft,
            "top_right" => Zone::TopRight,
            "top_center" => Zone::TopCenter,
            _ => Zone::CenterTop,
        }
    }

    /// The ten zones the backend schema may produce, excluding the reserved
    /// `CenterTop` enumerant.
    pub const SCHEMA_ZONES: [Zone; 10] = [
        Zone::Center,
        Zone::Left1,
        Zone::Left2,
        Zone::Left3,
        Zone::Right1,
        Zone::Right2,
        Zone::Right3,
        Zone::TopLeft,
        Zone::TopRight,
        Zone::TopCenter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Center => "center",
            Zone::Left1 => "left_1",
            Zone::Left2 => "left_2",
            Zone::Left3 => "left_3",
            Zone::Right1 => "right_1",
            Zone::Right2 => "right_2",
            Zone::Right3 => "right_3",
            Zone::TopLeft => "top_left",
            Zone::TopRight => "top_right",
            Zone::TopCenter => "top_center",
            Zone::CenterTop => "center_top",
        }
    }
}

/// Category of a physical tableware object.
///
/// Unknown wire values degrade to `Accessory`, the kind that renders with
/// the fallback marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Plate,
    Cutlery,
    Glass,
    Napkin,
    Bowl,
    Accessory,
}

impl<'de> Deserialize<'de> for ItemKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ItemKind::from_wire(&value))
    }
}

impl ItemKind {
    /// Parse a wire value. Unknown values degrade to the accessory kind,
    /// which renders with the fallback marker shape.
    pub fn from_wire(value: &str) -> ItemKind {
        match value {
            "plate" => ItemKind::Plate,
            "cutlery" => ItemKind::Cutlery,
            "glass" => ItemKind::Glass,
            "napkin" => ItemKind::Napkin,
            "bowl" => ItemKind::Bowl,
            _ => ItemKind::Accessory,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Plate => "plate",
            ItemKind::Cutlery => "cutlery",
            ItemKind::Glass => "glass",
            ItemKind::Napkin => "napkin",
            ItemKind::Accessory => "accessory",
            ItemKind::Bowl => "bowl",
        }
    }
}

/// One tableware object within a setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableItem {
    /// Identifier, unique within its setting.
    pub id: String,
    /// Display name, e.g. "Dinner Fork".
    pub name: String,
    /// Declared kind. Name-substring rules may override it visually.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// Placement zone.
    pub zone: Zone,
    /// Human-readable placement description.
    pub description: String,
}

impl TableItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
        zone: Zone,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            zone,
            description: description.into(),
        }
    }
}

/// The full description of one table setting.
///
/// Item order does not affect placement, only rendering order and the
/// cosmetic entry-animation stagger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSetting {
    pub title: String,
    pub description: String,
    pub items: Vec<TableItem>,
    pub tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_wire_names() {
        assert_eq!(serde_json::to_string(&Zone::Left1).unwrap(), "\"left_1\"");
        assert_eq!(
            serde_json::to_string(&Zone::TopCenter).unwrap(),
            "\"top_center\""
        );
        let parsed: Zone = serde_json::from_str("\"right_3\"").unwrap();
        assert_eq!(parsed, Zone::Right3);
    }

    #[test]
    fn test_unknown_zone_degrades_to_reserved_enumerant() {
        let parsed: Zone = serde_json::from_str("\"under_the_table\"").unwrap();
        assert_eq!(parsed, Zone::CenterTop);
    }

    #[test]
    fn test_unknown_kind_degrades_to_accessory() {
        let parsed: ItemKind = serde_json::from_str("\"candelabra\"").unwrap();
        assert_eq!(parsed, ItemKind::Accessory);
    }

    #[test]
    fn test_item_wire_shape_uses_type_field() {
        let json = r#"{
            "id": "f1",
            "name": "Dinner Fork",
            "type": "cutlery",
            "zone": "left_1",
            "description": "Placed to the immediate left of the plate."
        }"#;
        let item: TableItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, ItemKind::Cutlery);
        assert_eq!(item.zone, Zone::Left1);
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "cutlery");
    }

    #[test]
    fn test_setting_wire_shape() {
        let json = r#"{
            "title": "Continental Breakfast",
            "description": "A light European morning table.",
            "items": [
                {"id": "p1", "name": "Breakfast Plate", "type": "plate", "zone": "center", "description": "Centered."}
            ],
            "tips": ["Butter knife rests on the bread plate."]
        }"#;
        let setting: TableSetting = serde_json::from_str(json).unwrap();
        assert_eq!(setting.items.len(), 1);
        assert_eq!(setting.tips.len(), 1);
    }
}
