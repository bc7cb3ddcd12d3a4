use serde::{Deserialize, Serialize};

use crate::prompts::enums::{
    aspect_ratio::AspectRatio, mj_style::MjStyle, mj_version::MjVersion, platform::Platform,
    quality::Quality, setting_key::SettingKey,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Setting {
    pub location: String,
    pub time_of_day: String,
    pub weather: String,
    pub season: String,
    pub lighting: String,
    pub atmosphere: String,
}

impl Setting {
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::Location => &self.location,
            SettingKey::TimeOfDay => &self.time_of_day,
            SettingKey::Weather => &self.weather,
            SettingKey::Season => &self.season,
            SettingKey::Lighting => &self.lighting,
            SettingKey::Atmosphere => &self.atmosphere,
        }
    }

    pub fn set(&mut self, key: SettingKey, value: String) {
        let slot = match key {
            SettingKey::Location => &mut self.location,
            SettingKey::TimeOfDay => &mut self.time_of_day,
            SettingKey::Weather => &mut self.weather,
            SettingKey::Season => &mut self.season,
            SettingKey::Lighting => &mut self.lighting,
            SettingKey::Atmosphere => &mut self.atmosphere,
        };
        *slot = value;
    }

    /// Values in emission order, empty ones included.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        SettingKey::ORDER.into_iter().map(move |key| self.get(key))
    }
}

/// Everything the user has entered in the form. Numeric fields carry the
/// widget ranges only as hints; whatever number arrives, fractional or out of
/// range, is stored and emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptForm {
    pub subject: String,
    pub attribute: String,
    pub style: String,
    pub composition: String,
    pub setting: Setting,
    pub emotion: String,
    pub color_scheme: String,
    pub negative_prompt: String,

    pub advanced: bool,
    pub aspect_ratio: AspectRatio,
    pub quality: Quality,
    pub stylize_weight: f64,
    pub seed: String,

    pub platform: Platform,
    pub mj_version: MjVersion,
    pub mj_style: MjStyle,
    pub chaos: f64,
    pub image_weight: f64,
    pub tile: bool,
    pub stop: f64,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            attribute: String::new(),
            style: String::new(),
            composition: String::new(),
            setting: Setting::default(),
            emotion: String::new(),
            color_scheme: String::new(),
            negative_prompt: String::new(),
            advanced: false,
            aspect_ratio: AspectRatio::default(),
            quality: Quality::default(),
            stylize_weight: 0.0,
            seed: String::new(),
            platform: Platform::default(),
            mj_version: MjVersion::default(),
            mj_style: MjStyle::default(),
            chaos: 0.0,
            image_weight: 1.0,
            tile: false,
            stop: 100.0,
        }
    }
}
