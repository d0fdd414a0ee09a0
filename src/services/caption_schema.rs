//! JSON schema describing a caption set, derived from the template catalog.

use serde_json::{Value, json};

use crate::domain::TemplateDescriptor;

/// Guidance limit on caption length; not enforced on responses.
pub const MAX_CAPTION_LEN: usize = 100;

/// Build the schema the oracle's structured output must follow.
///
/// Per-template slot counts appear only in the `captions` description; they
/// are enforced after the response arrives.
pub fn caption_schema(templates: &[TemplateDescriptor]) -> Value {
    let ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
    let min_slots = templates.iter().map(|t| t.caption_slot_count()).min().unwrap_or(0);
    let max_slots = templates.iter().map(|t| t.caption_slot_count()).max().unwrap_or(0);

    json!({
        "type": "object",
        "properties": {
            "template": {
                "type": "string",
                "enum": ids,
                "description": "The meme template to use",
            },
            "captions": {
                "type": "array",
                "items": { "type": "string", "maxLength": MAX_CAPTION_LEN },
                "minItems": min_slots,
                "maxItems": max_slots,
                "description": captions_description(templates),
            }
        },
        "required": ["template", "captions"],
        "additionalProperties": false,
    })
}

fn captions_description(templates: &[TemplateDescriptor]) -> String {
    let per_template: Vec<String> = templates
        .iter()
        .map(|t| format!("{} takes {} ({})", t.id, t.caption_slot_count(), t.slots.join(", ")))
        .collect();
    format!("One caption per template slot, in slot order: {}", per_template.join("; "))
}
