//! Meme template catalog and URL encoding.

mod catalog;
mod encode;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use catalog::{catalog, descriptor};
pub(crate) use encode::build_url;
pub use encode::{FALLBACK_URL, MEMEGEN_IMAGES_BASE, encode, encode_captions, escape_caption};

/// Supported memegen.link templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TemplateId {
    #[serde(rename = "drake")]
    Drake,
    #[serde(rename = "db")]
    DistractedBoyfriend,
    #[serde(rename = "yuno")]
    Yuno,
    #[serde(rename = "spiderman")]
    Spiderman,
    #[serde(rename = "sadfrog")]
    SadFrog,
    #[serde(rename = "jd")]
    JosephDucreux,
    #[serde(rename = "slap")]
    Slap,
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Drake,
        TemplateId::DistractedBoyfriend,
        TemplateId::Yuno,
        TemplateId::Spiderman,
        TemplateId::SadFrog,
        TemplateId::JosephDucreux,
        TemplateId::Slap,
    ];

    /// Identifier used in memegen.link paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Drake => "drake",
            TemplateId::DistractedBoyfriend => "db",
            TemplateId::Yuno => "yuno",
            TemplateId::Spiderman => "spiderman",
            TemplateId::SadFrog => "sadfrog",
            TemplateId::JosephDucreux => "jd",
            TemplateId::Slap => "slap",
        }
    }

    pub fn descriptor(&self) -> &'static TemplateDescriptor {
        descriptor(*self)
    }

    pub fn caption_slot_count(&self) -> usize {
        self.descriptor().caption_slot_count()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| AppError::UnknownTemplate(s.to_string()))
    }
}

/// Static description of a template, surfaced to the oracle as selection guidance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Slot labels in URL order.
    pub slots: &'static [&'static str],
    /// One example caption per slot.
    pub example: &'static [&'static str],
}

impl TemplateDescriptor {
    pub fn caption_slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Example captions paired with their slot labels.
    pub fn labelled_example(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.slots.iter().copied().zip(self.example.iter().copied())
    }
}
