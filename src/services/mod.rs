pub mod caption_schema;
pub mod oracle_client_http;
pub mod prompt_assembly;

pub use caption_schema::{MAX_CAPTION_LEN, caption_schema};
pub use oracle_client_http::{API_KEY_ENV, HttpCaptionOracle};
pub use prompt_assembly::{render_system_prompt, render_user_prompt};
