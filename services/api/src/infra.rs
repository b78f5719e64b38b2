use metrics_exporter_prometheus::PrometheusHandle;
use scholar_studio::error::AppError;
use scholar_studio::workflows::authoring::{
    DocumentType, RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session registry. Sessions vanish on delete or restart;
/// one that is never deleted is held until the process exits.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl InMemorySessionRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<SessionId, SessionRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("session registry poisoned".to_string()))
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.session_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.session_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &SessionId) -> Result<(), RepositoryError> {
        let mut guard = self.lock()?;
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }
}

pub(crate) fn parse_document_type(raw: &str) -> Result<DocumentType, String> {
    raw.parse::<DocumentType>().map_err(|err| err.to_string())
}

/// Read a document from a path, or from stdin when the path is absent or `-`.
pub(crate) fn read_document(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use scholar_studio::workflows::authoring::GenerationSession;
    use std::time::Duration;

    fn record(id: &str) -> SessionRecord {
        SessionRecord {
            session_id: SessionId(id.to_string()),
            created_at: Utc::now(),
            session: Arc::new(tokio::sync::Mutex::new(
                GenerationSession::new(DocumentType::Sop).with_latency(Duration::ZERO),
            )),
        }
    }

    #[test]
    fn rejects_duplicate_session_ids() {
        let repository = InMemorySessionRepository::default();
        repository.insert(record("session-a")).expect("first insert");
        assert!(matches!(
            repository.insert(record("session-a")),
            Err(RepositoryError::Conflict)
        ));
        assert_eq!(repository.len().expect("len"), 1);
    }

    #[test]
    fn removing_unknown_session_reports_not_found() {
        let repository = InMemorySessionRepository::default();
        assert!(matches!(
            repository.remove(&SessionId("missing".to_string())),
            Err(RepositoryError::NotFound)
        ));
    }

    #[test]
    fn parses_document_type_arguments() {
        assert_eq!(parse_document_type("CV"), Ok(DocumentType::Cv));
        assert!(parse_document_type("letter")
            .unwrap_err()
            .contains("unknown document type"));
    }
}
