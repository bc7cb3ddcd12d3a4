use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    General,
    Midjourney,
}

impl Platform {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::General => "General",
            Self::Midjourney => "Midjourney",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "General" => Some(Self::General),
            "Midjourney" => Some(Self::Midjourney),
            _ => None,
        }
    }
}
