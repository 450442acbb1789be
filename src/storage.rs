use crate::models::{ContactRequest, SubmissionRecord};
use anyhow::Result;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

const MAX_RECORDS: usize = 50;
const LOG_FILE: &str = "submissions.yaml";

/// Local log of sent inquiries, newest first
pub struct SubmissionLog {
    pub records: VecDeque<SubmissionRecord>,
    path: PathBuf,
}

impl SubmissionLog {
    /// Log under `~/.fenji`
    pub fn new() -> Self {
        let dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fenji");
        Self::open(dir)
    }

    /// Log in `dir`, loading whatever is already there
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        let mut log = SubmissionLog {
            records: VecDeque::with_capacity(MAX_RECORDS),
            path: dir.into().join(LOG_FILE),
        };

        if let Err(e) = log.load() {
            tracing::warn!(error = %e, path = %log.path.display(), "Could not read submission log");
        }
        log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let content = fs::read_to_string(&self.path)?;
        let records: Vec<SubmissionRecord> = serde_yaml::from_str(&content)?;
        self.records = records.into_iter().take(MAX_RECORDS).collect();
        Ok(())
    }

    fn save(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_yaml::to_string(&self.records)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Record a confirmed submission and persist the log
    pub fn record(&mut self, request: ContactRequest, confirmation: &str) -> Result<&SubmissionRecord> {
        let id = self.records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        if self.records.len() >= MAX_RECORDS {
            self.records.pop_back();
        }
        self.records.push_front(SubmissionRecord {
            id,
            request,
            confirmation: confirmation.to_string(),
            timestamp: chrono::Utc::now(),
        });
        self.save()?;
        Ok(&self.records[0])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for SubmissionLog {
    fn default() -> Self {
        Self::new()
    }
}
