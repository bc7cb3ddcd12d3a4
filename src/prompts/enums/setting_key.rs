use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingKey {
    Location,
    TimeOfDay,
    Weather,
    Season,
    Lighting,
    Atmosphere,
}

impl SettingKey {
    /// Emission order inside the setting group.
    pub const ORDER: [SettingKey; 6] = [
        Self::Location,
        Self::TimeOfDay,
        Self::Weather,
        Self::Season,
        Self::Lighting,
        Self::Atmosphere,
    ];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Location => "location",
            Self::TimeOfDay => "timeOfDay",
            Self::Weather => "weather",
            Self::Season => "season",
            Self::Lighting => "lighting",
            Self::Atmosphere => "atmosphere",
        }
    }

    pub fn label(&self) -> &'static str {
        match *self {
            Self::Location => "배경 장소 / Location",
            Self::TimeOfDay => "시간대 / Time of Day",
            Self::Weather => "날씨 / Weather",
            Self::Season => "계절 / Season",
            Self::Lighting => "조명 / Lighting",
            Self::Atmosphere => "분위기 / Atmosphere",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match *self {
            Self::Location => "숲속, 해변, 미래 도시 등",
            Self::TimeOfDay => "새벽, 해질녘, 밤하늘",
            Self::Weather => "맑음, 안개, 비, 눈",
            Self::Season => "봄, 가을, 눈 덮인",
            Self::Lighting => "자연광, 역광, 부드러운 그림자",
            Self::Atmosphere => "신비로운, 밝고 생동감",
        }
    }
}
