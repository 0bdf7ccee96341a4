//! Binds user records to card fields
//!
//! Empty source strings leave the previous content in place rather than
//! clearing it. Image loading is handed to an [`ImageLoader`].

use log::debug;

use crate::domain::card::{Card, CardKey, UserRecord};

/// External image-loading service
///
/// Fire-and-forget: failures are the loader's business and leave the
/// card's placeholder visible.
pub trait ImageLoader {
    fn load(&mut self, url: &str, target: &CardKey);
}

/// Loader that drops every request
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopImageLoader;

impl ImageLoader for NoopImageLoader {
    fn load(&mut self, _url: &str, _target: &CardKey) {}
}

/// Writes user records into cards
#[derive(Debug)]
pub struct CardViewBinder<L: ImageLoader> {
    loader: L,
}

impl<L: ImageLoader> CardViewBinder<L> {
    pub fn new(loader: L) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Binds a record to a card; `None` leaves the card untouched
    pub fn bind(&mut self, card: &mut Card, record: Option<&UserRecord>) {
        let Some(record) = record else {
            return;
        };

        if let Some(url) = record.avatar_url.as_deref().filter(|url| !url.is_empty()) {
            self.loader.load(url, card.key());
            card.fields.avatar_url = Some(url.to_string());
        }
        if !record.display_name.is_empty() {
            card.fields.display_name = record.display_name.clone();
        }
        if !record.username.is_empty() {
            card.fields.username = record.username.clone();
        }
        debug!("bound record to card {}", card.key());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingLoader {
        requests: Vec<(String, CardKey)>,
    }

    impl ImageLoader for RecordingLoader {
        fn load(&mut self, url: &str, target: &CardKey) {
            self.requests.push((url.to_string(), target.clone()));
        }
    }

    #[test]
    fn bind_sets_all_fields() {
        let mut binder = CardViewBinder::new(RecordingLoader::default());
        let record = UserRecord::new("Jane", "jdoe").with_avatar("https://img/jdoe.png");
        let mut card = Card::for_record(&record);

        binder.bind(&mut card, Some(&record));

        assert_eq!(card.fields.display_name, "Jane");
        assert_eq!(card.fields.username, "jdoe");
        assert_eq!(card.fields.avatar_url.as_deref(), Some("https://img/jdoe.png"));
        assert_eq!(
            binder.loader().requests,
            vec![("https://img/jdoe.png".to_string(), CardKey::new("jdoe"))]
        );
    }

    #[test]
    fn empty_strings_keep_previous_content() {
        let mut binder = CardViewBinder::new(RecordingLoader::default());
        let mut card = Card::new(CardKey::new("jdoe"));
        binder.bind(&mut card, Some(&UserRecord::new("Jane", "jdoe")));

        let blank = UserRecord::new("", "").with_avatar("");
        binder.bind(&mut card, Some(&blank));

        assert_eq!(card.fields.display_name, "Jane");
        assert_eq!(card.fields.username, "jdoe");
        assert!(card.fields.avatar_url.is_none());
        assert!(binder.loader().requests.is_empty());
    }

    #[test]
    fn missing_record_is_ignored() {
        let mut binder = CardViewBinder::new(NoopImageLoader);
        let mut card = Card::new(CardKey::new("k"));
        card.fields.display_name = "Kept".to_string();

        binder.bind(&mut card, None);
        assert_eq!(card.fields.display_name, "Kept");
    }
}
