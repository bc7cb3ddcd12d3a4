use tokio::task;

use crate::{
    prompts::{self, enums::display_lang::DisplayLang, models::prompt_output::PromptOutput},
    AppState,
};

/// Copies the current prompt to the clipboard. Failures are only logged.
pub async fn copy_prompt(state: &AppState) {
    let output = prompts::service::get_prompt(None, state).await;
    let clipboard = state.clipboard.clone();

    match task::spawn_blocking(move || clipboard.write_text(&output.prompt)).await {
        Ok(Ok(())) => tracing::debug!("copied prompt to clipboard"),
        Ok(Err(e)) => tracing::warn!("copy_prompt: {}", e),
        Err(e) => tracing::warn!("copy_prompt: {:?}", e),
    }
}

/// Writes the current prompt to the export directory under the active tab's
/// file name. Failures are only logged.
pub async fn save_prompt(state: &AppState) {
    let output = prompts::service::get_prompt(None, state).await;
    let file_saver = state.file_saver.clone();

    match task::spawn_blocking(move || file_saver.save(&output.filename, &output.prompt)).await {
        Ok(Ok(path)) => tracing::info!("saved prompt to {}", path.display()),
        Ok(Err(e)) => tracing::warn!("save_prompt: {}", e),
        Err(e) => tracing::warn!("save_prompt: {:?}", e),
    }
}

pub async fn download_prompt(lang: Option<DisplayLang>, state: &AppState) -> PromptOutput {
    prompts::service::get_prompt(lang, state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        app::test_util::test_state,
        prompts::dtos::form_update_dto::{FieldUpdate, FormUpdate},
    };

    async fn set_subject(subject: &str, state: &AppState) {
        prompts::service::edit_form(
            FormUpdate::Field(FieldUpdate::Subject(subject.to_string())),
            state,
        )
        .await;
    }

    #[tokio::test]
    async fn test_copy_passes_exact_prompt() {
        let (state, clipboard, _) = test_state();
        set_subject("a cat", &state).await;

        copy_prompt(&state).await;

        assert_eq!(clipboard.texts(), vec!["a cat".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_failure_is_swallowed() {
        let (state, clipboard, _) = test_state();
        clipboard.fail();

        copy_prompt(&state).await;

        assert!(clipboard.texts().is_empty());
    }

    #[tokio::test]
    async fn test_save_uses_active_tab_filename() {
        let (state, _, file_saver) = test_state();
        set_subject("a cat", &state).await;
        prompts::service::edit_lang(DisplayLang::En, &state).await;

        save_prompt(&state).await;

        assert_eq!(
            file_saver.saved(),
            vec![("prompt_en.txt".to_string(), "a cat".to_string())]
        );
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let (state, _, file_saver) = test_state();
        file_saver.fail();

        save_prompt(&state).await;

        assert!(file_saver.saved().is_empty());
    }
}
