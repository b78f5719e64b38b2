use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use super::domain::{DocumentType, DocumentTypeError};
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::session::GenerationSession;
use super::views::SessionView;

/// Service owning the session registry used by the HTTP surface.
pub struct AuthoringService<R> {
    repository: Arc<R>,
    latency: Duration,
}

/// Session state plus its registry metadata.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub session: SessionView,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("session-{id:06}"))
}

impl<R> AuthoringService<R>
where
    R: SessionRepository + 'static,
{
    pub fn new(repository: Arc<R>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Open a new session for a raw document type tag.
    pub fn create(&self, document_type: &str) -> Result<SessionSnapshot, AuthoringServiceError> {
        let document_type: DocumentType = document_type.parse()?;
        let session = GenerationSession::new(document_type).with_latency(self.latency);
        let view = session.to_view();

        let record = SessionRecord {
            session_id: next_session_id(),
            created_at: Utc::now(),
            session: Arc::new(Mutex::new(session)),
        };
        let stored = self.repository.insert(record)?;
        info!(session = %stored.session_id, %document_type, "authoring session opened");

        Ok(SessionSnapshot {
            session_id: stored.session_id,
            created_at: stored.created_at,
            session: view,
        })
    }

    pub async fn snapshot(&self, id: &SessionId) -> Result<SessionSnapshot, AuthoringServiceError> {
        let record = self.record(id)?;
        let view = record.session.lock().await.to_view();
        Ok(snapshot_of(record, view))
    }

    pub async fn update_field(
        &self,
        id: &SessionId,
        field_id: &str,
        value: String,
    ) -> Result<SessionSnapshot, AuthoringServiceError> {
        let record = self.record(id)?;
        let view = {
            let mut session = record.session.lock().await;
            session.update_field(field_id, value);
            session.to_view()
        };
        Ok(snapshot_of(record, view))
    }

    pub async fn next_step(&self, id: &SessionId) -> Result<SessionSnapshot, AuthoringServiceError> {
        let record = self.record(id)?;
        let view = {
            let mut session = record.session.lock().await;
            session.next_step();
            session.to_view()
        };
        Ok(snapshot_of(record, view))
    }

    pub async fn prev_step(&self, id: &SessionId) -> Result<SessionSnapshot, AuthoringServiceError> {
        let record = self.record(id)?;
        let view = {
            let mut session = record.session.lock().await;
            session.prev_step();
            session.to_view()
        };
        Ok(snapshot_of(record, view))
    }

    /// Generate the document. The lock is released while the simulated
    /// backend call is pending, so an overlapping request for the same
    /// session is not rejected; the last one to complete wins.
    pub async fn generate(&self, id: &SessionId) -> Result<SessionSnapshot, AuthoringServiceError> {
        let record = self.record(id)?;
        let (ticket, latency) = {
            let mut session = record.session.lock().await;
            (session.begin_generation(), session.simulated_latency())
        };

        tokio::time::sleep(latency).await;

        let view = {
            let mut session = record.session.lock().await;
            session.complete_generation(ticket);
            session.to_view()
        };
        Ok(snapshot_of(record, view))
    }

    /// Drop a session. Nothing about it survives.
    pub fn discard(&self, id: &SessionId) -> Result<(), AuthoringServiceError> {
        self.repository.remove(id)?;
        info!(session = %id, "authoring session discarded");
        Ok(())
    }

    fn record(&self, id: &SessionId) -> Result<SessionRecord, AuthoringServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

fn snapshot_of(record: SessionRecord, session: SessionView) -> SessionSnapshot {
    SessionSnapshot {
        session_id: record.session_id,
        created_at: record.created_at,
        session,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthoringServiceError {
    #[error(transparent)]
    DocumentType(#[from] DocumentTypeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
