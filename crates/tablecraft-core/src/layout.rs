//! Layout engine
//!
//! Deterministically translates a setting's items into a spatial arrangement:
//! - `zone_position`: total static zone → relative-coordinate lookup
//! - `resolve_visual`: two-tier name-then-kind shape resolution
//! - `arrange`: pure mapping of an item sequence to placed items
//!
//! There is no layout algorithm here: no collision resolution, no dynamic
//! spacing. Every function is total over any well-formed input.

use serde::{Deserialize, Serialize};

use crate::types::{ItemKind, TableItem, Zone};

/// Relative coordinate, as percentages of canvas width (`x`) and height (`y`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Coordinate of the center zone, also the fallback for the reserved
/// enumerant.
pub const CENTER: Position = Position::new(50.0, 50.0);

/// Resolve a zone to its fixed relative coordinate.
///
/// Total and static: every enumerated zone has a defined coordinate, and the
/// reserved `CenterTop` enumerant falls back to the center.
pub fn zone_position(zone: Zone) -> Position {
    match zone {
        Zone::Center => CENTER,
        Zone::Left1 => Position::new(35.0, 50.0),
        Zone::Left2 => Position::new(25.0, 50.0),
        Zone::Left3 => Position::new(15.0, 50.0),
        Zone::Right1 => Position::new(65.0, 50.0),
        Zone::Right2 => Position::new(75.0, 50.0),
        Zone::Right3 => Position::new(85.0, 50.0),
        Zone::TopLeft => Position::new(30.0, 25.0),
        Zone::TopRight => Position::new(70.0, 25.0),
        Zone::TopCenter => Position::new(50.0, 30.0),
        Zone::CenterTop => CENTER,
    }
}

/// Shape class an item renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visual {
    Fork,
    Knife,
    Spoon,
    Plate,
    Bowl,
    Glass,
    Napkin,
    /// Generic cutlery shape, for cutlery whose name matches no rule.
    Cutlery,
    /// Fallback marker for accessories and unrecognised kinds.
    Marker,
}

/// Ordered name-substring rules, evaluated top-to-bottom before kind
/// dispatch. Matching is case-insensitive containment anywhere in the
/// display name.
const NAME_RULES: [(&str, Visual); 3] = [
    ("fork", Visual::Fork),
    ("knife", Visual::Knife),
    ("spoon", Visual::Spoon),
];

/// Resolve an item's visual representation.
///
/// Name-substring rules take precedence over the declared kind: an item
/// whose name contains "fork" renders as a fork regardless of kind. When no
/// rule matches, dispatch falls to the declared kind, with the marker shape
/// for accessories.
pub fn resolve_visual(item: &TableItem) -> Visual {
    let name = item.name.to_lowercase();
    for (pattern, visual) in NAME_RULES {
        if name.contains(pattern) {
            return visual;
        }
    }
    match item.kind {
        ItemKind::Plate => Visual::Plate,
        ItemKind::Bowl => Visual::Bowl,
        ItemKind::Glass => Visual::Glass,
        ItemKind::Napkin => Visual::Napkin,
        ItemKind::Cutlery => Visual::Cutlery,
        ItemKind::Accessory => Visual::Marker,
    }
}

/// One item placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedItem {
    pub item: TableItem,
    pub position: Position,
    pub visual: Visual,
    /// Input-order index. Cosmetic only: presentations may stagger entry
    /// animation by it.
    pub index: usize,
}

/// Arrange items in input order. Pure; no internal state, no failure modes.
pub fn arrange(items: &[TableItem]) -> Vec<PlacedItem> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| PlacedItem {
            item: item.clone(),
            position: zone_position(item.zone),
            visual: resolve_visual(item),
            index,
        })
        .collect()
}

/// Callback invoked when an item is selected on the canvas.
pub type SelectCallback = Box<dyn Fn(&TableItem) + Send + Sync>;

/// Interactive visual surface over an arranged setting.
///
/// Holds the arrangement, a label-visibility flag, and an optional selection
/// callback. Selection invokes the callback with the clicked item; it never
/// mutates internal state.
pub struct TableCanvas {
    placed: Vec<PlacedItem>,
    show_labels: bool,
    on_select: Option<SelectCallback>,
}

impl TableCanvas {
    pub fn new(items: &[TableItem], show_labels: bool) -> Self {
        Self {
            placed: arrange(items),
            show_labels,
            on_select: None,
        }
    }

    pub fn with_on_select(mut self, callback: SelectCallback) -> Self {
        self.on_select = Some(callback);
        self
    }

    /// The arranged items, in input order.
    pub fn placed(&self) -> &[PlacedItem] {
        &self.placed
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Label to present for a placed item, honoring the visibility flag.
    pub fn label<'a>(&self, placed: &'a PlacedItem) -> Option<&'a str> {
        self.show_labels.then(|| placed.item.name.as_str())
    }

    /// Select an item by id, invoking the callback with it.
    pub fn select(&self, id: &str) -> Option<&TableItem> {
        let item = self
            .placed
            .iter()
            .map(|p| &p.item)
            .find(|item| item.id == id)?;
        if let Some(callback) = &self.on_select {
            callback(item);
        }
        Some(item)
    }
}
