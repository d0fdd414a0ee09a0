//! Prompt assembly service.
//!
//! Renders the embedded `src/assets/prompts` templates: the system guidance
//! listing the template catalog, and the user message wrapping a transcript.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, context};
use serde::Serialize;

use crate::domain::{AppError, TemplateDescriptor};
use crate::services::caption_schema::MAX_CAPTION_LEN;

static PROMPTS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/prompts");

const SYSTEM_TEMPLATE: &str = "system.md.j2";
const USER_TEMPLATE: &str = "user.md.j2";

#[derive(Serialize)]
struct TemplateGuide<'a> {
    id: &'a str,
    name: &'a str,
    description: &'a str,
    slots: &'a [&'a str],
    example: Vec<ExampleLine<'a>>,
}

#[derive(Serialize)]
struct ExampleLine<'a> {
    slot: &'a str,
    text: &'a str,
}

impl<'a> From<&'a TemplateDescriptor> for TemplateGuide<'a> {
    fn from(t: &'a TemplateDescriptor) -> Self {
        Self {
            id: t.id.as_str(),
            name: t.name,
            description: t.description,
            slots: t.slots,
            example: t.labelled_example().map(|(slot, text)| ExampleLine { slot, text }).collect(),
        }
    }
}

/// Render the system guidance for the given templates.
pub fn render_system_prompt(templates: &[TemplateDescriptor]) -> Result<String, AppError> {
    let guides: Vec<TemplateGuide> = templates.iter().map(TemplateGuide::from).collect();
    render(SYSTEM_TEMPLATE, context! { templates => guides, max_caption_len => MAX_CAPTION_LEN })
}

/// Render the user message carrying the conversation transcript.
pub fn render_user_prompt(transcript: &str) -> Result<String, AppError> {
    render(USER_TEMPLATE, context! { transcript => transcript })
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let env = environment()?;
    let template = env.get_template(name).map_err(|e| prompt_error(name, e))?;
    template.render(ctx).map_err(|e| prompt_error(name, e))
}

fn environment() -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);

    for name in [SYSTEM_TEMPLATE, USER_TEMPLATE] {
        let source = PROMPTS_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::PromptAssembly(format!("missing prompt template {}", name)))?;
        env.add_template(name, source).map_err(|e| prompt_error(name, e))?;
    }
    Ok(env)
}

fn prompt_error(name: &str, err: minijinja::Error) -> AppError {
    AppError::PromptAssembly(format!("{}: {}", name, err))
}
