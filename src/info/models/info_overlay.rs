use super::info_entry::InfoEntry;

/// The single help overlay of a session. Opening an entry replaces whatever
/// was shown before.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoOverlay {
    current: Option<InfoEntry>,
}

impl InfoOverlay {
    pub fn open(&mut self, entry: InfoEntry) -> &InfoEntry {
        self.current.insert(entry)
    }

    pub fn dismiss(&mut self) -> Option<InfoEntry> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&InfoEntry> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::enums::info_key::InfoKey;

    fn entry(key: InfoKey, title: &'static str) -> InfoEntry {
        InfoEntry {
            key,
            title,
            content: "content",
        }
    }

    #[test]
    fn test_open_replaces_previous_entry() {
        let mut overlay = InfoOverlay::default();
        overlay.open(entry(InfoKey::Subject, "대상"));
        overlay.open(entry(InfoKey::Style, "스타일"));

        assert_eq!(overlay.current().map(|e| e.key), Some(InfoKey::Style));
    }

    #[test]
    fn test_dismiss_clears_overlay() {
        let mut overlay = InfoOverlay::default();
        overlay.open(entry(InfoKey::Subject, "대상"));

        assert!(overlay.dismiss().is_some());
        assert!(overlay.current().is_none());
        assert!(overlay.dismiss().is_none());
    }
}
