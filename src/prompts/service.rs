use crate::AppState;

use super::{
    builder,
    dtos::form_update_dto::FormUpdate,
    enums::display_lang::DisplayLang,
    models::{prompt_form::PromptForm, prompt_output::PromptOutput},
};

pub async fn get_form(state: &AppState) -> PromptForm {
    state.session.read().await.form.clone()
}

pub async fn get_prompt(lang: Option<DisplayLang>, state: &AppState) -> PromptOutput {
    let session = state.session.read().await;

    builder::render(&session.form, lang.unwrap_or(session.lang))
}

pub async fn edit_form(update: FormUpdate, state: &AppState) -> PromptOutput {
    edit_form_batch(vec![update], state).await
}

/// Applies `updates` in order under one write lock.
pub async fn edit_form_batch(updates: Vec<FormUpdate>, state: &AppState) -> PromptOutput {
    let mut session = state.session.write().await;

    for update in updates {
        tracing::debug!(?update, "editing form");
        update.apply(&mut session.form);
    }

    builder::render(&session.form, session.lang)
}

pub async fn replace_form(form: PromptForm, state: &AppState) -> PromptOutput {
    let mut session = state.session.write().await;
    session.form = form;

    builder::render(&session.form, session.lang)
}

pub async fn reset_form(state: &AppState) -> PromptOutput {
    replace_form(PromptForm::default(), state).await
}

pub async fn edit_lang(lang: DisplayLang, state: &AppState) -> PromptOutput {
    let mut session = state.session.write().await;
    session.lang = lang;

    builder::render(&session.form, session.lang)
}
