//! Cards and the user records bound to them
//!
//! A card is identified by its display key (the username). Two cards with
//! the same key are the same card as far as the stack is concerned.

use std::fmt;

use crate::domain::core::CardVisualState;

/// Identity of a card within a stack
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardKey(String);

impl CardKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Data record supplied by the host application
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub avatar_url: Option<String>,
    pub display_name: String,
    pub username: String,
}

impl UserRecord {
    pub fn new(display_name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            avatar_url: None,
            display_name: display_name.into(),
            username: username.into(),
        }
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// Text and image fields currently displayed on a card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub display_name: String,
    pub username: String,
    /// Last avatar handed to the image loader
    pub avatar_url: Option<String>,
}

/// A card in the stack
#[derive(Debug, Clone)]
pub struct Card {
    key: CardKey,
    pub fields: CardFields,
    pub visual: CardVisualState,
}

impl Card {
    /// Creates an empty card with the given identity
    pub fn new(key: CardKey) -> Self {
        Self {
            key,
            fields: CardFields::default(),
            visual: CardVisualState::default(),
        }
    }

    /// Creates a card keyed by the record's username
    ///
    /// Fields are left empty; bind them with the card binder.
    pub fn for_record(record: &UserRecord) -> Self {
        Self::new(CardKey::new(record.username.clone()))
    }

    pub fn key(&self) -> &CardKey {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.fields.display_name
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Card {}
