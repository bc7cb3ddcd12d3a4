use serde::Serialize;

use crate::prompts::enums::display_lang::DisplayLang;

/// What the output viewer shows for one tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptOutput {
    pub lang: DisplayLang,
    pub prompt: String,
    pub placeholder: String,
    pub filename: String,
}
