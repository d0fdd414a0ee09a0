pub mod caption;
pub mod chat;
pub mod configuration;
pub mod error;
pub mod template;

pub use caption::{CaptionDraft, CaptionSet};
pub use chat::{ChatMessage, TriggerPolicy, build_transcript};
pub use configuration::{BotConfig, ChatConfig, OracleConfig, SelectorConfig};
pub use error::{AppError, OracleError};
pub use template::{FALLBACK_URL, TemplateDescriptor, TemplateId, catalog, encode, escape_caption};
