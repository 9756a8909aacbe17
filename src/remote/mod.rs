pub mod ideas;

use crate::core::idea::{Idea, IdeaError, validate_content};
use crate::pagination;
use ideas::{IdeasClient, RemoteError};
use thiserror::Error;
use uuid::Uuid;

/// Anything that can go wrong while working the idea feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Idea(#[from] IdeaError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// One loaded page of the feed, with the pagination facts a selector needs.
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub ideas: Vec<Idea>,
    pub page: u64,
    pub total_count: u64,
    pub total_pages: u64,
}

/// The idea feed: every mutation goes to the remote table and is followed
/// by a reload, so the caller always renders what the service actually
/// holds. Holds no state between calls beyond the client and page size.
pub struct IdeaFeed {
    client: IdeasClient,
    per_page: u64,
}

impl IdeaFeed {
    pub fn new(client: IdeasClient, per_page: u64) -> Self {
        Self {
            client,
            per_page: per_page.max(1),
        }
    }

    /// Load one page of ideas, newest first.
    pub async fn fetch_page(&self, page: u64) -> Result<FeedPage, FeedError> {
        let page = page.max(1);
        let (from, to) = pagination::page_window(page, self.per_page);
        let (ideas, total_count) = self.client.fetch_range(from, to).await?;
        let total_pages = pagination::total_pages(total_count, self.per_page);

        log::info!(
            "Fetched page {} of {}: {} ideas, {} total",
            page,
            total_pages,
            ideas.len(),
            total_count
        );

        Ok(FeedPage {
            ideas,
            page,
            total_count,
            total_pages,
        })
    }

    /// Look up one idea without touching the paged window.
    pub async fn fetch_idea(&self, id: Uuid) -> Result<Option<Idea>, FeedError> {
        Ok(self.client.fetch_one(id).await?)
    }

    /// Validate and store a new idea, then reload page 1 so the caller
    /// sees it at the top of the feed.
    pub async fn add(&self, content: &str) -> Result<FeedPage, FeedError> {
        let content = validate_content(content)?;
        let idea = self.client.insert(content).await?;
        log::info!("Added idea {}", idea.id);
        self.fetch_page(1).await
    }

    /// Validate and replace an idea's content, then reload the page the
    /// caller was looking at.
    pub async fn update(
        &self,
        id: Uuid,
        content: &str,
        current_page: u64,
    ) -> Result<FeedPage, FeedError> {
        let content = validate_content(content)?;
        self.client.update(id, content).await?;
        log::info!("Updated idea {}", id);
        self.fetch_page(current_page).await
    }

    /// Delete an idea and reload the current page. If the deletion emptied
    /// the page while ideas remain, step back to the last page that still
    /// has content.
    pub async fn delete(&self, id: Uuid, current_page: u64) -> Result<FeedPage, FeedError> {
        self.client.delete(id).await?;
        log::info!("Deleted idea {}", id);

        let reloaded = self.fetch_page(current_page).await?;
        if reloaded.ideas.is_empty() && reloaded.total_count > 0 {
            let last = pagination::clamp_page(current_page, reloaded.total_pages);
            if last != reloaded.page {
                return self.fetch_page(last).await;
            }
        }
        Ok(reloaded)
    }
}
