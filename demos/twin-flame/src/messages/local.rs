/// Text shown when there is nothing else to show.
pub const FALLBACK_TEXT: &str = "TwinFlame";

/// The bundled message list. Always available, never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalMessages {
    messages: Vec<String>,
}

impl Default for LocalMessages {
    fn default() -> Self {
        Self::new(vec!["Goog".to_string(), "Goog".to_string()])
    }
}

impl LocalMessages {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Any integer maps into range, negatives included.
    pub fn message_for_index(&self, index: i64) -> String {
        if self.messages.is_empty() {
            return FALLBACK_TEXT.to_string();
        }
        let i = index.rem_euclid(self.messages.len() as i64) as usize;
        self.messages[i].clone()
    }
}
