//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{InsertOutcome, LinkRepository};
use crate::error::AppError;

/// Table contents plus the two unique indexes.
#[derive(Default)]
struct LinkTable {
    next_id: i64,
    rows: BTreeMap<i64, Link>,
    by_code: HashMap<String, i64>,
    by_url: HashMap<String, i64>,
}

/// Link store kept in process memory.
///
/// Enforces the same constraints as the PostgreSQL schema: unique
/// `short_code`, unique `original_url`, and atomic click increments. Every
/// operation holds the lock for a single map update and never across
/// another await point. Data is lost on restart.
#[derive(Default)]
pub struct MemoryLinkRepository {
    table: RwLock<LinkTable>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<InsertOutcome, AppError> {
        let mut table = self.table.write().await;

        if table.by_code.contains_key(&new_link.short_code) {
            return Ok(InsertOutcome::ShortCodeTaken);
        }
        if table.by_url.contains_key(&new_link.original_url) {
            return Ok(InsertOutcome::OriginalUrlTaken);
        }

        table.next_id += 1;
        let link = Link::new(
            table.next_id,
            new_link.original_url,
            new_link.short_code,
            0,
            Utc::now(),
        );

        table.by_code.insert(link.short_code.clone(), link.id);
        table.by_url.insert(link.original_url.clone(), link.id);
        table.rows.insert(link.id, link.clone());

        Ok(InsertOutcome::Created(link))
    }

    async fn find_by_original_url(&self, original_url: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .by_url
            .get(original_url)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let table = self.table.read().await;

        Ok(table
            .by_code
            .get(short_code)
            .and_then(|id| table.rows.get(id))
            .cloned())
    }

    async fn list_newest_first(&self) -> Result<Vec<Link>, AppError> {
        let table = self.table.read().await;

        let mut links: Vec<Link> = table.rows.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(links)
    }

    async fn increment_clicks(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let mut table = self.table.write().await;

        let Some(id) = table.by_code.get(short_code).copied() else {
            return Ok(None);
        };

        Ok(table.rows.get_mut(&id).map(|link| {
            link.clicks += 1;
            link.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.write().await;

        let Some(link) = table.rows.remove(&id) else {
            return Ok(false);
        };

        table.by_code.remove(&link.short_code);
        table.by_url.remove(&link.original_url);

        Ok(true)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.rows.len() as i64)
    }

    async fn total_clicks(&self) -> Result<i64, AppError> {
        Ok(self.table.read().await.rows.values().map(|l| l.clicks).sum())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
