use serde::{Deserialize, Serialize};

use crate::prompts::{
    enums::{
        aspect_ratio::AspectRatio, mj_style::MjStyle, mj_version::MjVersion, platform::Platform,
        quality::Quality, setting_key::SettingKey,
    },
    models::prompt_form::PromptForm,
};

/// A single edit coming from the form. Setting edits are addressed
/// separately so a setting key can never be mistaken for a top-level field.
///
/// ```json
/// {"scope": "field", "update": {"field": "subject", "value": "a cat"}}
/// {"scope": "setting", "update": {"key": "timeOfDay", "value": "dusk"}}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scope", content = "update", rename_all = "snake_case")]
pub enum FormUpdate {
    Field(FieldUpdate),
    Setting(SettingUpdate),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FieldUpdate {
    Subject(String),
    Attribute(String),
    Style(String),
    Composition(String),
    Emotion(String),
    ColorScheme(String),
    NegativePrompt(String),
    Advanced(bool),
    AspectRatio(AspectRatio),
    Quality(Quality),
    StylizeWeight(f64),
    Seed(String),
    Platform(Platform),
    MjVersion(MjVersion),
    MjStyle(MjStyle),
    Chaos(f64),
    ImageWeight(f64),
    Tile(bool),
    Stop(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingUpdate {
    pub key: SettingKey,
    pub value: String,
}

impl FormUpdate {
    pub fn apply(self, form: &mut PromptForm) {
        match self {
            Self::Field(update) => update.apply(form),
            Self::Setting(SettingUpdate { key, value }) => form.setting.set(key, value),
        }
    }
}

impl FieldUpdate {
    pub fn apply(self, form: &mut PromptForm) {
        match self {
            Self::Subject(value) => form.subject = value,
            Self::Attribute(value) => form.attribute = value,
            Self::Style(value) => form.style = value,
            Self::Composition(value) => form.composition = value,
            Self::Emotion(value) => form.emotion = value,
            Self::ColorScheme(value) => form.color_scheme = value,
            Self::NegativePrompt(value) => form.negative_prompt = value,
            Self::Advanced(value) => form.advanced = value,
            Self::AspectRatio(value) => form.aspect_ratio = value,
            Self::Quality(value) => form.quality = value,
            Self::StylizeWeight(value) => form.stylize_weight = value,
            Self::Seed(value) => form.seed = value,
            Self::Platform(value) => form.platform = value,
            Self::MjVersion(value) => form.mj_version = value,
            Self::MjStyle(value) => form.mj_style = value,
            Self::Chaos(value) => form.chaos = value,
            Self::ImageWeight(value) => form.image_weight = value,
            Self::Tile(value) => form.tile = value,
            Self::Stop(value) => form.stop = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_update_from_json() {
        let update: FormUpdate = serde_json::from_value(json!({
            "scope": "field",
            "update": { "field": "colorScheme", "value": "Pastel" }
        }))
        .unwrap();

        assert_eq!(
            update,
            FormUpdate::Field(FieldUpdate::ColorScheme("Pastel".to_string()))
        );
    }

    #[test]
    fn test_setting_update_from_json() {
        let update: FormUpdate = serde_json::from_value(json!({
            "scope": "setting",
            "update": { "key": "timeOfDay", "value": "dusk" }
        }))
        .unwrap();

        let mut form = PromptForm::default();
        update.apply(&mut form);

        assert_eq!(form.setting.time_of_day, "dusk");
        assert_eq!(form.subject, "");
    }

    #[test]
    fn test_setting_key_is_not_a_field() {
        let result = serde_json::from_value::<FormUpdate>(json!({
            "scope": "field",
            "update": { "field": "location", "value": "beach" }
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_typed_values_from_json() {
        let mut form = PromptForm::default();
        let updates: Vec<FormUpdate> = serde_json::from_value(json!([
            { "scope": "field", "update": { "field": "platform", "value": "Midjourney" } },
            { "scope": "field", "update": { "field": "mjVersion", "value": "5.1" } },
            { "scope": "field", "update": { "field": "imageWeight", "value": 0.3 } },
            { "scope": "field", "update": { "field": "tile", "value": true } },
            { "scope": "field", "update": { "field": "stop", "value": 5 } }
        ]))
        .unwrap();

        for update in updates {
            update.apply(&mut form);
        }

        assert_eq!(form.platform, Platform::Midjourney);
        assert_eq!(form.mj_version, MjVersion::V5_1);
        assert_eq!(form.image_weight, 0.3);
        assert!(form.tile);
        assert_eq!(form.stop, 5.0);
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let result = serde_json::from_value::<FormUpdate>(json!({
            "scope": "field",
            "update": { "field": "advanced", "value": "yes" }
        }));

        assert!(result.is_err());
    }
}
