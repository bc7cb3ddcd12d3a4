use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MjStyle {
    #[default]
    Raw,
    Stylize,
    Expressive,
}

impl MjStyle {
    pub const ALL: [MjStyle; 3] = [Self::Raw, Self::Stylize, Self::Expressive];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Raw => "raw",
            Self::Stylize => "stylize",
            Self::Expressive => "expressive",
        }
    }
}
