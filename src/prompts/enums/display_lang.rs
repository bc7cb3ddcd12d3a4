use serde::{Deserialize, Serialize};

/// Active output tab. Only the labels around the prompt change with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayLang {
    #[default]
    Ko,
    En,
}

impl DisplayLang {
    pub fn value(&self) -> &'static str {
        match *self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match *self {
            Self::Ko => "여기에 생성된 프롬프트가 표시됩니다.",
            Self::En => "Generated prompt will appear here.",
        }
    }

    pub fn download_filename(&self) -> String {
        format!("prompt_{}.txt", self.value())
    }
}
