use crate::{
    info::models::info_overlay::InfoOverlay,
    prompts::{enums::display_lang::DisplayLang, models::prompt_form::PromptForm},
};

/// State of the one user session served by this process. Nothing here
/// outlives the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub form: PromptForm,
    pub lang: DisplayLang,
    pub overlay: InfoOverlay,
}
