//! Process-wide in-memory document store.

use std::collections::HashMap;
use std::sync::RwLock;

use dealscope_analysis::DocumentStore;
use dealscope_core::DocumentRecord;
use uuid::Uuid;

/// Exclusive-access map of immutable document records keyed by id.
///
/// Uploads write, analysis runs read; a plain `RwLock` suffices because
/// records never change after insertion. Nothing is ever evicted.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<Uuid, DocumentRecord>>,
}

impl InMemoryDocumentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: DocumentRecord) {
        self.documents
            .write()
            .expect("document store lock poisoned")
            .insert(record.id, record);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents
            .read()
            .expect("document store lock poisoned")
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for InMemoryDocumentStore {
    /// Resolves ids in request order, silently skipping unknown ids.
    fn get(&self, ids: &[Uuid]) -> Vec<DocumentRecord> {
        let documents = self
            .documents
            .read()
            .expect("document store lock poisoned");
        ids.iter()
            .filter_map(|id| documents.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(filename: &str) -> DocumentRecord {
        DocumentRecord {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            content_type: "text/plain".to_string(),
            extracted_text: "text".to_string(),
            metadata: HashMap::new(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_ids_are_skipped_silently() {
        let store = InMemoryDocumentStore::new();
        let known = record("a.txt");
        let known_id = known.id;
        store.insert(known);

        let resolved = store.get(&[Uuid::new_v4(), known_id, Uuid::new_v4()]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id, known_id);
    }

    #[test]
    fn resolution_preserves_request_order() {
        let store = InMemoryDocumentStore::new();
        let first = record("a.txt");
        let second = record("b.txt");
        let (first_id, second_id) = (first.id, second.id);
        store.insert(first);
        store.insert(second);

        let resolved = store.get(&[second_id, first_id]);
        let names: Vec<&str> = resolved.iter().map(|d| d.filename.as_str()).collect();
        assert_eq!(names, ["b.txt", "a.txt"]);
    }

    #[test]
    fn concurrent_reads_and_writes_do_not_corrupt() {
        let store = std::sync::Arc::new(InMemoryDocumentStore::new());

        let writers: Vec<_> = (0..4)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.insert(record("upload.txt"));
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = std::sync::Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let _ = store.get(&[Uuid::new_v4()]);
                    }
                })
            })
            .collect();

        for handle in writers.into_iter().chain(readers) {
            handle.join().expect("thread panicked");
        }
        assert_eq!(store.len(), 200);
    }
}
