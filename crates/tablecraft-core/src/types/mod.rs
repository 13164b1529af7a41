//! Core type definitions for TableCraft
//!
//! This module contains the fundamental types used throughout the system:
//! - MealType / CultureStyle: the user's selection axes
//! - Zone: named relative position around a place setting
//! - TableItem / TableSetting: one generated configuration
//! - ChatMessage: one turn of the assistant conversation

mod chat;
mod selection;
mod setting;

pub use chat::{ChatMessage, ChatRole, ImageRef};
pub use selection::{CultureStyle, MealType};
pub use setting::{ItemKind, TableItem, TableSetting, Zone};
