use serde::Serialize;

use crate::info::enums::info_key::InfoKey;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoEntry {
    pub key: InfoKey,
    pub title: &'static str,
    pub content: &'static str,
}
