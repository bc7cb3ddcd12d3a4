use serde::Serialize;

use crate::prompts::enums::{
    aspect_ratio::AspectRatio, mj_style::MjStyle, mj_version::MjVersion, platform::Platform,
    quality::Quality, setting_key::SettingKey,
};

pub static STYLE_OPTIONS: [&str; 10] = [
    "사실주의 (Realism)",
    "수채화 (Watercolor)",
    "유화 (Oil Painting)",
    "픽셀 아트 (Pixel Art)",
    "사이버펑크 (Cyberpunk)",
    "애니메이션 (Anime)",
    "디즈니 3D (Disney 3D)",
    "반 고흐 (Van Gogh)",
    "미니멀리즘 (Minimalism)",
    "미래지향적 (Futuristic)",
];

pub static COMPOSITION_OPTIONS: [&str; 6] = [
    "정면 (Front view)",
    "측면 (Side view)",
    "클로즈업 (Close-up)",
    "버스트샷 (Burst shot)",
    "탑뷰 (Top-down)",
    "로우 앵글 (Low angle)",
];

pub static EMOTION_OPTIONS: [&str; 10] = [
    "행복한 (Happy)",
    "슬픈 (Sad)",
    "놀란 (Surprised)",
    "화난 (Angry)",
    "무서운 (Scary)",
    "신나는 (Excited)",
    "피곤한 (Tired)",
    "차분한 (Calm)",
    "당황한 (Embarrassed)",
    "사랑에 빠진 (In love)",
];

pub static COLOR_SCHEME_OPTIONS: [&str; 4] = [
    "단색 (Monochrome)",
    "파스텔 (Pastel)",
    "생생한 (Vivid)",
    "흑백 (Black & White)",
];

pub static NEGATIVE_PROMPT_PLACEHOLDER: &str =
    "텍스트나 워터마크 없이 깔끔하게, 글자나 로고 없이 순수한 이미지로";

#[derive(Debug, Clone, Serialize)]
pub struct SettingFieldOption {
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptions {
    pub platforms: Vec<&'static str>,
    pub styles: Vec<&'static str>,
    pub compositions: Vec<&'static str>,
    pub emotions: Vec<&'static str>,
    pub color_schemes: Vec<&'static str>,
    pub aspect_ratios: Vec<&'static str>,
    pub qualities: Vec<&'static str>,
    pub mj_versions: Vec<&'static str>,
    pub mj_styles: Vec<&'static str>,
    pub setting_fields: Vec<SettingFieldOption>,
    pub negative_prompt_placeholder: &'static str,
}

impl FormOptions {
    pub fn new() -> Self {
        Self {
            platforms: vec![Platform::General.value(), Platform::Midjourney.value()],
            styles: STYLE_OPTIONS.to_vec(),
            compositions: COMPOSITION_OPTIONS.to_vec(),
            emotions: EMOTION_OPTIONS.to_vec(),
            color_schemes: COLOR_SCHEME_OPTIONS.to_vec(),
            aspect_ratios: AspectRatio::ALL.iter().map(|ar| ar.value()).collect(),
            qualities: Quality::ALL.iter().map(|q| q.value()).collect(),
            mj_versions: MjVersion::ALL.iter().map(|v| v.value()).collect(),
            mj_styles: MjStyle::ALL.iter().map(|s| s.value()).collect(),
            setting_fields: SettingKey::ORDER
                .iter()
                .map(|key| SettingFieldOption {
                    key: key.value(),
                    label: key.label(),
                    placeholder: key.placeholder(),
                })
                .collect(),
            negative_prompt_placeholder: NEGATIVE_PROMPT_PLACEHOLDER,
        }
    }
}
