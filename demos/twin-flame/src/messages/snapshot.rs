//! In-memory copy of the remote message collection.
//!
//! The host fetches the collection out of band and hands it over as JSON:
//!
//! ```json
//! { "0": { "text": "first" }, "1": { "text": "second" } }
//! ```
//!
//! Writes are applied locally and queued in an outbox that the host drains
//! in the same format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MessageRepository, RepositoryError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct MessageDoc {
    text: String,
}

/// Document slot: readable text, or the reason it could not be read.
type Slot = Result<String, String>;

#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryState {
    /// Waiting for the host; fails with `TimedOut` once `waited >= timeout`.
    Pending { waited: f32, timeout: f32 },
    Loaded(BTreeMap<usize, Slot>),
    Failed(RepositoryError),
}

#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    state: RepositoryState,
    outbox: BTreeMap<usize, String>,
}

impl SnapshotRepository {
    pub fn new(timeout: f32) -> Self {
        Self {
            state: RepositoryState::Pending {
                waited: 0.0,
                timeout: timeout.max(0.0),
            },
            outbox: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> &RepositoryState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, RepositoryState::Loaded(_))
    }

    /// Replace the snapshot with a collection from the host. Accepted in any
    /// state, so a late answer still wins over a timeout. Returns the number
    /// of documents.
    pub fn load_json(&mut self, json: &str) -> Result<usize, RepositoryError> {
        let raw: BTreeMap<String, Value> = match serde_json::from_str(json) {
            Ok(raw) => raw,
            Err(err) => {
                let err = RepositoryError::Malformed(err.to_string());
                log::warn!("messages: rejecting snapshot: {err}");
                self.state = RepositoryState::Failed(err.clone());
                return Err(err);
            }
        };

        let mut docs = BTreeMap::new();
        for (key, value) in raw {
            let Ok(index) = key.parse::<usize>() else {
                log::warn!("messages: skipping non-numeric key {key:?}");
                continue;
            };
            let slot = serde_json::from_value::<MessageDoc>(value)
                .map(|doc| doc.text)
                .map_err(|err| err.to_string());
            docs.insert(index, slot);
        }

        let count = docs.len();
        log::debug!("messages: snapshot loaded with {count} documents");
        self.state = RepositoryState::Loaded(docs);
        Ok(count)
    }

    /// The host could not reach the store.
    pub fn fail(&mut self, reason: &str) {
        log::warn!("messages: remote unavailable: {reason}");
        self.state = RepositoryState::Failed(RepositoryError::Transport(reason.to_string()));
    }

    pub fn pending_writes(&self) -> usize {
        self.outbox.len()
    }

    /// Drain queued writes as a JSON object keyed by index.
    pub fn take_writes(&mut self) -> Result<String, serde_json::Error> {
        let out: BTreeMap<String, MessageDoc> = self
            .outbox
            .iter()
            .map(|(index, text)| (index.to_string(), MessageDoc { text: text.clone() }))
            .collect();
        let json = serde_json::to_string(&out)?;
        self.outbox.clear();
        Ok(json)
    }

    fn unavailable(&self) -> RepositoryError {
        match &self.state {
            RepositoryState::Pending { .. } | RepositoryState::Loaded(_) => RepositoryError::Pending,
            RepositoryState::Failed(err) => err.clone(),
        }
    }
}

impl MessageRepository for SnapshotRepository {
    fn messages_count(&self) -> Result<usize, RepositoryError> {
        match &self.state {
            RepositoryState::Loaded(docs) => Ok(docs.len()),
            _ => Err(self.unavailable()),
        }
    }

    fn fetch_message(&self, index: usize) -> Result<String, RepositoryError> {
        match &self.state {
            RepositoryState::Loaded(docs) => match docs.get(&index) {
                Some(Ok(text)) => Ok(text.clone()),
                Some(Err(reason)) => Err(RepositoryError::Malformed(reason.clone())),
                None => Err(RepositoryError::NotFound),
            },
            _ => Err(self.unavailable()),
        }
    }

    fn upsert_message(&mut self, index: usize, text: &str) -> Result<(), RepositoryError> {
        let RepositoryState::Loaded(docs) = &mut self.state else {
            return Err(self.unavailable());
        };
        docs.insert(index, Ok(text.to_string()));
        self.outbox.insert(index, text.to_string());
        Ok(())
    }

    fn poll(&mut self, dt: f32) {
        if let RepositoryState::Pending { waited, timeout } = &mut self.state {
            *waited += dt.max(0.0);
            if *waited >= *timeout {
                log::warn!("messages: no snapshot after {:.1}s", *timeout);
                self.state = RepositoryState::Failed(RepositoryError::TimedOut);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_pending() {
        let repo = SnapshotRepository::new(5.0);
        assert!(!repo.is_loaded());
        assert_eq!(repo.messages_count(), Err(RepositoryError::Pending));
        assert_eq!(repo.fetch_message(0), Err(RepositoryError::Pending));
    }

    #[test]
    fn times_out_after_bounded_wait() {
        let mut repo = SnapshotRepository::new(1.0);
        repo.poll(0.6);
        assert!(matches!(repo.state(), RepositoryState::Pending { .. }));
        repo.poll(0.6);
        assert_eq!(repo.state(), &RepositoryState::Failed(RepositoryError::TimedOut));
        assert_eq!(repo.messages_count(), Err(RepositoryError::TimedOut));
    }

    #[test]
    fn loads_documents_by_index() {
        let mut repo = SnapshotRepository::new(5.0);
        let n = repo
            .load_json(r#"{ "0": { "text": "hello" }, "1": { "text": "world" } }"#)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(repo.messages_count(), Ok(2));
        assert_eq!(repo.fetch_message(1), Ok("world".to_string()));
        assert_eq!(repo.fetch_message(7), Err(RepositoryError::NotFound));
    }

    #[test]
    fn document_without_text_is_malformed() {
        let mut repo = SnapshotRepository::new(5.0);
        repo.load_json(r#"{ "0": { "body": "x" }, "1": { "text": 3 } }"#)
            .unwrap();
        assert!(matches!(repo.fetch_message(0), Err(RepositoryError::Malformed(_))));
        assert!(matches!(repo.fetch_message(1), Err(RepositoryError::Malformed(_))));
    }

    #[test]
    fn non_numeric_keys_are_skipped() {
        let mut repo = SnapshotRepository::new(5.0);
        assert_eq!(repo.load_json(r#"{ "meta": {}, "2": { "text": "ok" } }"#), Ok(1));
        assert_eq!(repo.fetch_message(2), Ok("ok".to_string()));
    }

    #[test]
    fn garbage_json_fails_the_repository() {
        let mut repo = SnapshotRepository::new(5.0);
        assert!(repo.load_json("not json").is_err());
        assert!(matches!(repo.messages_count(), Err(RepositoryError::Malformed(_))));
    }

    #[test]
    fn late_snapshot_overrides_timeout() {
        let mut repo = SnapshotRepository::new(0.0);
        repo.poll(0.016);
        assert_eq!(repo.messages_count(), Err(RepositoryError::TimedOut));
        repo.load_json(r#"{ "0": { "text": "late" } }"#).unwrap();
        assert_eq!(repo.fetch_message(0), Ok("late".to_string()));
    }

    #[test]
    fn host_failure_is_transport() {
        let mut repo = SnapshotRepository::new(5.0);
        repo.fail("offline");
        assert_eq!(
            repo.fetch_message(0),
            Err(RepositoryError::Transport("offline".to_string()))
        );
        assert!(repo.upsert_message(0, "x").is_err());
    }

    #[test]
    fn upserts_update_snapshot_and_outbox() {
        let mut repo = SnapshotRepository::new(5.0);
        repo.load_json("{}").unwrap();
        repo.upsert_message(3, "seeded").unwrap();
        repo.upsert_message(3, "again").unwrap();
        assert_eq!(repo.fetch_message(3), Ok("again".to_string()));
        assert_eq!(repo.pending_writes(), 1);

        let json = repo.take_writes().unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["3"]["text"], "again");
        assert_eq!(repo.pending_writes(), 0);
        assert_eq!(repo.take_writes().unwrap(), "{}");
    }

    #[test]
    fn upsert_while_pending_is_refused() {
        let mut repo = SnapshotRepository::new(5.0);
        assert_eq!(repo.upsert_message(0, "x"), Err(RepositoryError::Pending));
        assert_eq!(repo.pending_writes(), 0);
    }
}
