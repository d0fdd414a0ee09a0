//! Caption sets produced by the oracle.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::template::{TemplateId, build_url};

/// Untrusted structured output as returned by the oracle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionDraft {
    pub template: String,
    #[serde(default)]
    pub captions: Vec<String>,
}

/// A caption set whose template exists and whose captions fill every slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptionSet {
    template: TemplateId,
    captions: Vec<String>,
}

impl CaptionSet {
    pub fn new(template: TemplateId, captions: Vec<String>) -> Result<Self, AppError> {
        let expected = template.caption_slot_count();
        if captions.len() != expected {
            return Err(AppError::SlotCountMismatch {
                template: template.to_string(),
                expected,
                actual: captions.len(),
            });
        }
        Ok(Self { template, captions })
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }

    pub fn to_url(&self) -> String {
        // Slot count was checked on construction.
        build_url(self.template, &self.captions)
    }
}

impl TryFrom<CaptionDraft> for CaptionSet {
    type Error = AppError;

    fn try_from(draft: CaptionDraft) -> Result<Self, Self::Error> {
        let template: TemplateId = draft.template.trim().parse()?;
        CaptionSet::new(template, draft.captions)
    }
}
