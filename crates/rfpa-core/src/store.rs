//! SQLite-backed log of past analyses.
//!
//! Rows are only ever inserted; there is no update or delete.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::models::analysis::{AnalysisResult, AnalysisSummary, StoredAnalysis};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistent analysis store.
pub struct AnalysisStore {
    conn: Connection,
}

impl AnalysisStore {
    /// Open or create the store at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.init_schema()?;
        info!(path = %path.display(), "Analysis store opened");
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS analyses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                filename TEXT NOT NULL,
                title TEXT,
                organization TEXT,
                analysis_data TEXT,
                created_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_analyses_created_at ON analyses(created_at);",
        )?;
        Ok(())
    }

    /// Store an analysis stamped with the current time; returns its id.
    pub fn save_analysis(
        &self,
        filename: &str,
        title: &str,
        organization: &str,
        analysis: &AnalysisResult,
    ) -> Result<i64> {
        self.save_analysis_at(filename, title, organization, analysis, Utc::now())
    }

    /// Store an analysis with an explicit timestamp; returns its id.
    pub fn save_analysis_at(
        &self,
        filename: &str,
        title: &str,
        organization: &str,
        analysis: &AnalysisResult,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        let data = serde_json::to_string(analysis)?;
        self.conn.execute(
            "INSERT INTO analyses (filename, title, organization, analysis_data, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![filename, title, organization, data, format_timestamp(created_at)],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!(id, filename, "Analysis saved");
        Ok(id)
    }

    /// Fetch one analysis by id.
    pub fn get_analysis(&self, id: i64) -> Result<Option<StoredAnalysis>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, filename, title, organization, analysis_data, created_at
                 FROM analyses WHERE id = ?1",
                params![id],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<String>>(2)?,
                        row.get::<_, Option<String>>(3)?,
                        row.get::<_, Option<String>>(4)?,
                        row.get::<_, String>(5)?,
                    ))
                },
            )
            .optional()?;

        let Some((id, filename, title, organization, data, created_at)) = row else {
            return Ok(None);
        };

        let analysis = match data {
            Some(data) => serde_json::from_str(&data)?,
            None => AnalysisResult::default(),
        };

        Ok(Some(StoredAnalysis {
            id,
            filename,
            title: title.unwrap_or_default(),
            organization: organization.unwrap_or_default(),
            analysis,
            created_at: parse_timestamp(id, &created_at)?,
        }))
    }

    /// Most recent analyses, newest first.
    pub fn recent_analyses(&self, limit: usize) -> Result<Vec<AnalysisSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, title, organization, created_at
             FROM analyses ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, Option<String>>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(id, filename, title, organization, created_at)| {
                Ok(AnalysisSummary {
                    id,
                    filename,
                    title: title.unwrap_or_default(),
                    organization: organization.unwrap_or_default(),
                    created_at: parse_timestamp(id, &created_at)?,
                })
            })
            .collect()
    }

    /// Count all stored analyses.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM analyses", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(id: i64, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| StoreError::Timestamp {
            id,
            value: value.to_string(),
        })
}
