use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoKey {
    Platform,
    Subject,
    Attribute,
    Style,
    Composition,
    Setting,
}

impl InfoKey {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Platform => "platform",
            Self::Subject => "subject",
            Self::Attribute => "attribute",
            Self::Style => "style",
            Self::Composition => "composition",
            Self::Setting => "setting",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "platform" => Some(Self::Platform),
            "subject" => Some(Self::Subject),
            "attribute" => Some(Self::Attribute),
            "style" => Some(Self::Style),
            "composition" => Some(Self::Composition),
            "setting" => Some(Self::Setting),
            _ => None,
        }
    }
}
