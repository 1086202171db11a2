//! Local-only contact list (name + email), add and delete only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Ordered collection of contacts. Never synchronized with the remote
/// service.
#[derive(Debug, Default)]
pub struct ContactBook {
    contacts: Vec<Contact>,
    seq: u64,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with the two fixed example records.
    pub fn with_examples() -> Self {
        Self {
            contacts: vec![
                Contact {
                    id: "1".to_string(),
                    name: "John Doe".to_string(),
                    email: "john@example.com".to_string(),
                },
                Contact {
                    id: "2".to_string(),
                    name: "Jane Smith".to_string(),
                    email: "jane@example.com".to_string(),
                },
            ],
            seq: 0,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Appends a contact and returns its id.
    pub fn add(&mut self, name: impl Into<String>, email: impl Into<String>) -> String {
        self.seq += 1;
        let id = format!("{}-{}", chrono::Utc::now().timestamp_millis(), self.seq);
        self.contacts.push(Contact {
            id: id.clone(),
            name: name.into(),
            email: email.into(),
        });
        id
    }

    /// Removes the contact with the given id; idempotent when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_in_order() {
        let mut book = ContactBook::with_examples();
        book.add("Ada Lovelace", "ada@example.com");

        assert_eq!(book.len(), 3);
        assert_eq!(book.contacts().last().unwrap().name, "Ada Lovelace");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut book = ContactBook::with_examples();
        assert!(book.remove("1"));
        assert!(!book.remove("1"));
        assert_eq!(book.len(), 1);
    }
}
