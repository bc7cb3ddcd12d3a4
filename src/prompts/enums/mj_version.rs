use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MjVersion {
    #[serde(rename = "7")]
    V7,
    #[default]
    #[serde(rename = "6")]
    V6,
    #[serde(rename = "5.2")]
    V5_2,
    #[serde(rename = "5.1")]
    V5_1,
    #[serde(rename = "5")]
    V5,
}

impl MjVersion {
    pub const ALL: [MjVersion; 5] = [Self::V7, Self::V6, Self::V5_2, Self::V5_1, Self::V5];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::V7 => "7",
            Self::V6 => "6",
            Self::V5_2 => "5.2",
            Self::V5_1 => "5.1",
            Self::V5 => "5",
        }
    }
}
