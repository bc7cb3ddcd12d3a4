use serde::Deserialize;

use crate::prompts::enums::display_lang::DisplayLang;

#[derive(Debug, Clone, Deserialize)]
pub struct EditLangDto {
    pub lang: DisplayLang,
}
