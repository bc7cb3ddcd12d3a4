use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Low,
    #[default]
    Normal,
    High,
}

impl Quality {
    pub const ALL: [Quality; 3] = [Self::Low, Self::Normal, Self::High];

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Low => "Low",
            Self::Normal => "Normal",
            Self::High => "High",
        }
    }

    /// Argument passed to `--q`.
    pub fn flag_value(&self) -> &'static str {
        match *self {
            Self::High => "2",
            Self::Low => "0.5",
            Self::Normal => "1",
        }
    }
}
