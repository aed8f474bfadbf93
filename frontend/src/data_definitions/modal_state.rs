//! State of the document action modal.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalContent {
    Email { document_id: String, document_title: String },
}

impl ModalContent {
    pub fn heading(&self) -> String {
        match self {
            ModalContent::Email { .. } => "Email This".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ModalContent),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    pub fn open(&mut self, content: ModalContent) {
        *self = ModalState::Open(content);
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_and_closes() {
        let mut state = ModalState::default();
        assert!(!state.is_open());

        let content = ModalContent::Email { document_id: "2007020969".to_string(), document_title: "Strong medicine speaks".to_string() };
        state.open(content.clone());
        assert_eq!(state, ModalState::Open(content));

        state.close();
        assert_eq!(state, ModalState::Closed);
        state.close();
        assert!(!state.is_open());
    }
}
