use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "3:2")]
    Landscape,
    #[serde(rename = "4:5")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 4] = [Self::Square, Self::Wide, Self::Landscape, Self::Portrait];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Square => "1:1",
            Self::Wide => "16:9",
            Self::Landscape => "3:2",
            Self::Portrait => "4:5",
        }
    }
}
