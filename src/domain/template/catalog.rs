use super::{TemplateDescriptor, TemplateId};

const TOP_BOTTOM: &[&str] = &["top", "bottom"];

static CATALOG: [TemplateDescriptor; 7] = [
    TemplateDescriptor {
        id: TemplateId::Drake,
        name: "Drake Hotline Bling",
        description: "For comparing two things, where the first is rejected and second is preferred",
        slots: &["rejected", "preferred"],
        example: &["Manually writing prompts", "Using structured templates"],
    },
    TemplateDescriptor {
        id: TemplateId::DistractedBoyfriend,
        name: "Distracted Boyfriend",
        description: "For showing preference of one thing over another, especially when it's ironic",
        slots: &["distracted_by", "actor", "distracted_from"],
        example: &["New frameworks", "Me", "My unfinished projects"],
    },
    TemplateDescriptor {
        id: TemplateId::Yuno,
        name: "Y U NO",
        description: "For expressing frustration with someone for not doing something",
        slots: TOP_BOTTOM,
        example: &["Y U NO", "use this meme!?"],
    },
    TemplateDescriptor {
        id: TemplateId::Spiderman,
        name: "Spider-Man Pointing",
        description: "To highlight blame, similarity, irony, or confusion between identical or overlapping roles or entities, often humorously.",
        slots: TOP_BOTTOM,
        example: &["Frontend Developer", "Backend Developer"],
    },
    TemplateDescriptor {
        id: TemplateId::SadFrog,
        name: "Feels Bad Man",
        description: "For expressing sadness or depression",
        slots: TOP_BOTTOM,
        example: &["lost my keys", "feels bad man"],
    },
    TemplateDescriptor {
        id: TemplateId::JosephDucreux,
        name: "Joseph Ducreux",
        description: "For giving commands. Use archaic/Shakespearean language for humor.",
        slots: TOP_BOTTOM,
        example: &["Disregard Females", "Acquire Currency"],
    },
    TemplateDescriptor {
        id: TemplateId::Slap,
        name: "Slap",
        description: "For something that is interrupted suddenly and unpleasantly",
        slots: TOP_BOTTOM,
        example: &["Me trying to enjoy the weekend", "Monday"],
    },
];

/// All supported templates, in catalog order.
pub fn catalog() -> &'static [TemplateDescriptor] {
    &CATALOG
}

pub fn descriptor(id: TemplateId) -> &'static TemplateDescriptor {
    // CATALOG is declared in TemplateId::ALL order.
    &CATALOG[id as usize]
}
