//! Persistence mirroring for the current resume.
//!
//! # Responsibility
//! - Mirror the current snapshot into the saved-resume store after
//!   mutations.
//! - Republish the stored list back into the session.
//!
//! # Invariants
//! - The stored list never contains two entries with the same resume ID;
//!   an existing entry is replaced, not duplicated.
//! - A snapshot identical to the last persisted one is not rewritten.

use crate::clock::Clock;
use crate::model::resume::Resume;
use crate::repo::resume_store::{ResumeStore, StoreResult};
use crate::session::resume_session::ResumeSession;
use log::info;

/// Result of one mirror attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Snapshot written and list republished.
    Saved,
    /// Snapshot equals the last persisted one; write skipped.
    SkippedUnchanged,
    /// Session has no current resume; nothing to mirror.
    NoCurrent,
}

/// Write-gate around a [`ResumeStore`].
///
/// The source behavior rewrote the whole stored list on every keystroke;
/// the gate compares against the last persisted snapshot and skips
/// identical writes instead.
#[derive(Default)]
pub struct Autosaver {
    last_saved: Option<Resume>,
}

impl Autosaver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrors the session's current resume into the store.
    ///
    /// Read-modify-write over the whole stored list: any entry with the
    /// snapshot's ID is dropped, the snapshot is appended, and the updated
    /// list is written back and republished into the session.
    pub fn mirror<C, S>(
        &mut self,
        session: &mut ResumeSession<C>,
        store: &S,
    ) -> StoreResult<SaveOutcome>
    where
        C: Clock,
        S: ResumeStore,
    {
        let Some(snapshot) = session.current().cloned() else {
            return Ok(SaveOutcome::NoCurrent);
        };

        if self.last_saved.as_ref() == Some(&snapshot) {
            return Ok(SaveOutcome::SkippedUnchanged);
        }

        let mut resumes = store.load_all()?;
        resumes.retain(|resume| resume.id != snapshot.id);
        resumes.push(snapshot.clone());
        store.save_all(&resumes)?;

        info!(
            "event=autosave module=session status=ok resume_id={} saved_count={}",
            snapshot.id,
            resumes.len()
        );

        self.last_saved = Some(snapshot);
        session.load_resumes(resumes);
        Ok(SaveOutcome::Saved)
    }
}
