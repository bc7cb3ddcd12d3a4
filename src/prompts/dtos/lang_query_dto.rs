use serde::Deserialize;

use crate::prompts::enums::display_lang::DisplayLang;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LangQueryDto {
    pub lang: Option<DisplayLang>,
}
