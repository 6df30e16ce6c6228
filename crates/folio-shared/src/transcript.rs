//! Session-scoped chat transcript.
//!
//! Append-only: there is no way to remove or edit an entry. A transcript
//! lives exactly as long as the session that owns it.

use serde::Serialize;

use crate::types::TranscriptEntry;

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TranscriptEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranscriptEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a TranscriptEntry;
    type IntoIter = std::slice::Iter<'a, TranscriptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Speaker;

    #[test]
    fn test_push_keeps_order() {
        let mut t = Transcript::new();
        assert!(t.is_empty());
        t.push(TranscriptEntry::user("hi"));
        t.push(TranscriptEntry::bot("hello"));
        assert_eq!(t.len(), 2);
        assert_eq!(t.entries()[0].speaker, Speaker::User);
        assert_eq!(t.last().unwrap().text, "hello");
    }

    #[test]
    fn test_serializes_as_array() {
        let mut t = Transcript::new();
        t.push(TranscriptEntry::user("Skills?"));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"speaker":"user","text":"Skills?"}]"#);
    }
}
