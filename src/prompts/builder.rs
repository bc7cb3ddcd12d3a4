use super::{
    enums::{display_lang::DisplayLang, platform::Platform},
    models::{prompt_form::PromptForm, prompt_output::PromptOutput},
};

pub const SEGMENT_SEPARATOR: &str = ", ";

/// Joins the populated fields of `form` into a single prompt string.
///
/// `lang` does not affect the content: both tabs show the same segments, the
/// language only decides the surrounding labels (see [`render`]).
pub fn build_prompt(form: &PromptForm, _lang: DisplayLang) -> String {
    segments(form).join(SEGMENT_SEPARATOR)
}

pub fn render(form: &PromptForm, lang: DisplayLang) -> PromptOutput {
    PromptOutput {
        lang,
        prompt: build_prompt(form, lang),
        placeholder: lang.placeholder().to_string(),
        filename: lang.download_filename(),
    }
}

pub fn segments(form: &PromptForm) -> Vec<String> {
    let mut parts = Vec::new();

    push_text(&mut parts, &form.subject);
    push_text(&mut parts, &form.attribute);
    push_text(&mut parts, &form.style);
    push_text(&mut parts, &form.composition);
    for value in form.setting.values() {
        push_text(&mut parts, value);
    }
    push_text(&mut parts, &form.emotion);
    push_text(&mut parts, &form.color_scheme);
    if !form.negative_prompt.is_empty() {
        parts.push(format!("no: {}", form.negative_prompt));
    }

    if form.advanced {
        parts.extend(advanced_segments(form));
    }

    if form.platform == Platform::Midjourney {
        parts.extend(midjourney_segments(form));
    }

    parts
}

fn advanced_segments(form: &PromptForm) -> Vec<String> {
    let mut parts = vec![
        format!("--ar {}", form.aspect_ratio.value()),
        format!("--q {}", form.quality.flag_value()),
    ];
    if !form.seed.is_empty() {
        parts.push(format!("--seed {}", form.seed));
    }
    parts.push(format!("::{}", form.stylize_weight));

    parts
}

// Numbers go through f64 Display: 10.0 prints as "10", 0.5 as "0.5".
fn midjourney_segments(form: &PromptForm) -> Vec<String> {
    let mut parts = vec![
        format!("--v {}", form.mj_version.value()),
        format!("--style {}", form.mj_style.value()),
        format!("--chaos {}", form.chaos),
    ];
    if form.tile {
        parts.push("--tile".to_string());
    }
    parts.push(format!("--stop {}", form.stop));
    parts.push(format!("--iw {}", form.image_weight));

    parts
}

fn push_text(parts: &mut Vec<String>, value: &str) {
    if !value.is_empty() {
        parts.push(value.to_string());
    }
}
