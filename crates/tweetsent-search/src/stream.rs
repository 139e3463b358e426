//! Lazy, capped record stream over paginated search results.

use std::collections::VecDeque;

use async_trait::async_trait;
use tweetsent_core::{RawRecord, RecordSource};

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::types::RulePayload;

/// Empty pages in a row, each still carrying a `next` token, before the
/// stream gives up instead of paging forever.
pub const MAX_CONSECUTIVE_EMPTY_PAGES: usize = 10;

/// Pulls records page by page until `max_results` have been yielded or the
/// service stops returning a `next` token.
///
/// The stream is single-use: once exhausted it keeps returning `None`, and a
/// fresh query needs a fresh stream from [`SearchClient::stream`].
pub struct ResultStream<'a> {
    client: &'a SearchClient,
    rule: RulePayload,
    bearer: Option<String>,
    buffer: VecDeque<RawRecord>,
    max_results: usize,
    yielded: usize,
    pages_fetched: usize,
    empty_streak: usize,
    exhausted: bool,
}

impl<'a> ResultStream<'a> {
    pub(crate) fn new(client: &'a SearchClient, rule: RulePayload, max_results: usize) -> Self {
        Self {
            client,
            rule,
            bearer: None,
            buffer: VecDeque::new(),
            max_results,
            yielded: 0,
            pages_fetched: 0,
            empty_streak: 0,
            exhausted: false,
        }
    }

    /// Returns the next record, fetching another page when the buffer runs dry.
    ///
    /// # Errors
    ///
    /// Propagates any [`SearchError`] from the token exchange or page fetch.
    /// Returns [`SearchError::PaginationLimit`] after
    /// [`MAX_CONSECUTIVE_EMPTY_PAGES`] empty pages in a row.
    pub async fn try_next(&mut self) -> Result<Option<RawRecord>, SearchError> {
        loop {
            if self.yielded >= self.max_results {
                return Ok(None);
            }
            if let Some(record) = self.buffer.pop_front() {
                self.yielded += 1;
                return Ok(Some(record));
            }
            if self.exhausted {
                return Ok(None);
            }
            self.fetch_next_page().await?;
        }
    }

    /// Records handed out so far.
    #[must_use]
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    async fn fetch_next_page(&mut self) -> Result<(), SearchError> {
        let bearer = match &self.bearer {
            Some(token) => token.clone(),
            None => {
                let token = self.client.fetch_bearer_token().await?;
                self.bearer = Some(token.clone());
                token
            }
        };

        let page = self.client.fetch_page(&bearer, &self.rule).await?;
        self.pages_fetched += 1;

        tracing::debug!(
            page = self.pages_fetched,
            count = page.results.len(),
            has_next = page.next.is_some(),
            "fetched search page"
        );

        if page.results.is_empty() {
            self.empty_streak += 1;
        } else {
            self.empty_streak = 0;
        }
        self.buffer.extend(page.results);
        match page.next {
            Some(token) if !token.is_empty() => self.rule.next = Some(token),
            _ => {
                self.exhausted = true;
                tracing::info!(
                    pages = self.pages_fetched,
                    "search results exhausted"
                );
            }
        }

        if !self.exhausted && self.empty_streak >= MAX_CONSECUTIVE_EMPTY_PAGES {
            return Err(SearchError::PaginationLimit {
                empty_pages: self.empty_streak,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl RecordSource for ResultStream<'_> {
    type Error = SearchError;

    async fn next_record(&mut self) -> Result<Option<RawRecord>, SearchError> {
        self.try_next().await
    }
}
