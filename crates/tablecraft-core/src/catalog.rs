//! Static catalog: the hardcoded default setting.
//!
//! The default is substituted whenever a generation fails and serves as the
//! initial state before the first fetch resolves.

use crate::types::{ItemKind, TableItem, TableSetting, Zone};

/// The fallback table setting.
///
/// Five items, two tips, suitable for most dinner occasions.
pub fn default_setting() -> TableSetting {
    TableSetting {
        title: "Classic Dinner Setting".to_string(),
        description: "A standard setting suitable for most dinner occasions.".to_string(),
        items: vec![
            TableItem::new(
                "p1",
                "Dinner Plate",
                ItemKind::Plate,
                Zone::Center,
                "Placed in the center of the setting.",
            ),
            TableItem::new(
                "f1",
                "Dinner Fork",
                ItemKind::Cutlery,
                Zone::Left1,
                "Placed to the immediate left of the plate.",
            ),
            TableItem::new(
                "k1",
                "Dinner Knife",
                ItemKind::Cutlery,
                Zone::Right1,
                "Placed to the right of the plate, blade facing inward.",
            ),
            TableItem::new(
                "n1",
                "Napkin",
                ItemKind::Napkin,
                Zone::Left2,
                "Placed to the left of the forks.",
            ),
            TableItem::new(
                "g1",
                "Water Glass",
                ItemKind::Glass,
                Zone::TopRight,
                "Placed above the knife.",
            ),
        ],
        tips: vec![
            "Ensure knife blades always face the plate.".to_string(),
            "Space items evenly.".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_setting_shape() {
        let setting = default_setting();
        assert_eq!(setting.title, "Classic Dinner Setting");
        assert_eq!(setting.items.len(), 5);
        assert_eq!(setting.tips.len(), 2);
    }

    #[test]
    fn test_default_item_ids_are_unique() {
        let setting = default_setting();
        let mut ids: Vec<&str> = setting.items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), setting.items.len());
    }
}
