//! Upload ingestion: persist bytes, extract text, record the document.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use dealscope_core::DocumentRecord;
use serde_json::json;
use uuid::Uuid;

use crate::extract::extract_text;
use crate::store::InMemoryDocumentStore;
use crate::IngestError;

/// Handles the document ingestion pipeline for uploads.
pub struct IngestionService {
    storage_dir: PathBuf,
    store: Arc<InMemoryDocumentStore>,
}

impl IngestionService {
    /// Creates the service, ensuring the storage directory exists.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] if the storage directory cannot be created.
    pub fn new(
        storage_dir: PathBuf,
        store: Arc<InMemoryDocumentStore>,
    ) -> Result<Self, IngestError> {
        std::fs::create_dir_all(&storage_dir).map_err(|source| IngestError::Io {
            path: storage_dir.display().to_string(),
            source,
        })?;
        Ok(Self { storage_dir, store })
    }

    /// Ingests one uploaded file: assigns an id, persists the raw bytes as
    /// `{id}{extension}` under the storage dir, extracts plain text, and
    /// records the document in the store.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] if the raw bytes cannot be persisted.
    pub fn save_upload(
        &self,
        filename: &str,
        content_type: Option<&str>,
        raw: &[u8],
    ) -> Result<DocumentRecord, IngestError> {
        let id = Uuid::new_v4();
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        let local_path = self.storage_dir.join(format!("{id}{extension}"));
        std::fs::write(&local_path, raw).map_err(|source| IngestError::Io {
            path: local_path.display().to_string(),
            source,
        })?;

        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .map_or_else(|| guess_content_type(&extension), ToOwned::to_owned);
        let extracted_text = extract_text(filename, raw);

        let record = DocumentRecord {
            id,
            filename: filename.to_string(),
            content_type,
            extracted_text,
            metadata: HashMap::from([(
                "local_path".to_string(),
                json!(local_path.display().to_string()),
            )]),
            uploaded_at: Utc::now(),
        };

        tracing::info!(
            document_id = %record.id,
            filename = %record.filename,
            content_type = %record.content_type,
            bytes = raw.len(),
            "ingested document"
        );

        self.store.insert(record.clone());
        Ok(record)
    }
}

/// Minimal extension → MIME mapping for uploads that omit a content type.
fn guess_content_type(extension: &str) -> String {
    match extension {
        ".txt" => "text/plain",
        ".md" => "text/markdown",
        ".csv" => "text/csv",
        ".json" => "application/json",
        ".pdf" => "application/pdf",
        _ => "application/octet-stream",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealscope_analysis::DocumentStore;

    fn service() -> (IngestionService, Arc<InMemoryDocumentStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = Arc::new(InMemoryDocumentStore::new());
        let service = IngestionService::new(dir.path().to_path_buf(), Arc::clone(&store))
            .expect("storage dir should be creatable");
        (service, store, dir)
    }

    #[test]
    fn save_upload_persists_and_records() {
        let (service, store, dir) = service();

        let record = service
            .save_upload("pitch.txt", None, b"we make robots")
            .expect("upload should succeed");

        assert_eq!(record.filename, "pitch.txt");
        assert_eq!(record.content_type, "text/plain");
        assert_eq!(record.extracted_text, "we make robots");

        // Raw bytes persisted under {id}.txt.
        let persisted = dir.path().join(format!("{}.txt", record.id));
        assert_eq!(std::fs::read(persisted).expect("file exists"), b"we make robots");

        // Record resolvable through the store.
        let resolved = store.get(&[record.id]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].extracted_text, "we make robots");
    }

    #[test]
    fn provided_content_type_wins_over_guess() {
        let (service, _store, _dir) = service();
        let record = service
            .save_upload("deck.txt", Some("text/x-custom"), b"text")
            .expect("upload should succeed");
        assert_eq!(record.content_type, "text/x-custom");
    }

    #[test]
    fn unknown_extension_defaults_to_octet_stream() {
        let (service, _store, _dir) = service();
        let record = service
            .save_upload("blob.xyz", None, b"\x00\x01")
            .expect("upload should succeed");
        assert_eq!(record.content_type, "application/octet-stream");
    }

    #[test]
    fn local_path_is_recorded_in_metadata() {
        let (service, _store, _dir) = service();
        let record = service
            .save_upload("pitch.md", None, b"# Deck")
            .expect("upload should succeed");
        let path = record
            .metadata
            .get("local_path")
            .and_then(|v| v.as_str())
            .expect("local_path metadata");
        assert!(path.ends_with(&format!("{}.md", record.id)));
    }
}
