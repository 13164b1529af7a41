//! Prompt and response-schema construction shared by provider calls.
//!
//! The instructions and the schema are fixed; only the (meal, culture) pair
//! and the image description vary per request.

use serde_json::{json, Value};

use tablecraft_core::types::{CultureStyle, MealType};

/// System instruction for the setting generator.
pub const GENERATOR_SYSTEM_INSTRUCTION: &str = r#"
You are an expert in dining etiquette and table setting.
When asked, you will provide a JSON configuration for a specific table setting (Meal + Culture).
The JSON must adhere to the following schema:
{
  "title": "string",
  "description": "string",
  "items": [
    {
      "id": "string",
      "name": "string",
      "type": "plate" | "cutlery" | "glass" | "napkin" | "accessory" | "bowl",
      "zone": "center" | "left_1" | "left_2" | "left_3" | "right_1" | "right_2" | "right_3" | "top_left" | "top_right" | "top_center",
      "description": "string"
    }
  ],
  "tips": ["string", "string"]
}

Zone Definitions:
- center: The main plate/charger
- left_1: Immediate left of plate (e.g., Dinner Fork)
- left_2: Left of left_1 (e.g., Salad Fork)
- left_3: Left of left_2 (e.g., Napkin if not on plate)
- right_1: Immediate right of plate (e.g., Dinner Knife)
- right_2: Right of right_1 (e.g., Soup Spoon)
- right_3: Right of right_2 (e.g., Oyster Fork)
- top_left: Bread plate area
- top_right: Glassware area
- top_center: Dessert cutlery area

IMPORTANT CULTURAL NUANCES:
- American: Forks on left, knives/spoons on right. Napkin often on left.
- European: Fork tines often facing down (optional visual), similar to American but often fork/knife remain in hands.
- Indian: Often uses a Thali (large platter) in center. Bowls (Katoris) arranged along the top rim of the Thali (top_center, top_left, top_right of the *plate* itself, but for this schema map them to zones closest). No cutlery usually, but if formal, spoon on right. Water on top right.
"#;

/// System instruction for the etiquette assistant.
pub const CHAT_SYSTEM_INSTRUCTION: &str = r#"
You are a helpful, sophisticated dining assistant named "Maître D'".
You answer questions about table manners, setting etiquette, wine pairings, and event planning.
Keep answers concise, polite, and helpful.
"#;

/// User prompt for a setting-generation request.
pub fn setting_prompt(meal: MealType, culture: CultureStyle) -> String {
    format!(
        "Generate a table setting configuration for a {} style {}. Return ONLY valid JSON matching the schema.",
        culture, meal
    )
}

/// User prompt for an image-rendering request.
pub fn image_prompt(description: &str) -> String {
    format!(
        "A photorealistic, high-quality, top-down view of a {} table setting. Perfect lighting, elegant tableware, neutral background. Highly detailed.",
        description
    )
}

/// Response schema for a setting-generation request, in the backend's
/// structured-output dialect. Keeps the model output parseable directly into
/// `TableSetting`.
pub fn setting_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "description": { "type": "STRING" },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING" },
                        "type": {
                            "type": "STRING",
                            "enum": ["plate", "cutlery", "glass", "napkin", "accessory", "bowl"]
                        },
                        "zone": {
                            "type": "STRING",
                            "enum": [
                                "center", "left_1", "left_2", "left_3",
                                "right_1", "right_2", "right_3",
                                "top_left", "top_right", "top_center"
                            ]
                        },
                        "description": { "type": "STRING" }
                    },
                    "required": ["id", "name", "type", "zone", "description"]
                }
            },
            "tips": { "type": "ARRAY", "items": { "type": "STRING" } }
        },
        "required": ["title", "description", "items", "tips"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_prompt_names_both_axes() {
        let prompt = setting_prompt(MealType::Dinner, CultureStyle::American);
        assert!(prompt.contains("American style Dinner"));
        assert!(prompt.contains("ONLY valid JSON"));
    }

    #[test]
    fn test_image_prompt_embeds_description() {
        let prompt = image_prompt("Indian style Lunch table setting");
        assert!(prompt.contains("Indian style Lunch"));
        assert!(prompt.contains("photorealistic"));
    }

    #[test]
    fn test_schema_constrains_zone_and_kind_enums() {
        let schema = setting_response_schema();
        let item_props = &schema["properties"]["items"]["items"]["properties"];
        let zones = item_props["zone"]["enum"].as_array().unwrap();
        assert_eq!(zones.len(), 10);
        assert!(zones.iter().any(|z| z == "top_center"));
        // The reserved enumerant never appears in the wire schema.
        assert!(!zones.iter().any(|z| z == "center_top"));
        let kinds = item_props["type"]["enum"].as_array().unwrap();
        assert_eq!(kinds.len(), 6);
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
    }
}
