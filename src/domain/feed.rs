//! Infinite-scroll feed session.
//!
//! `FeedSession` owns the accumulated deals of one browsing pass and performs
//! no I/O itself. `load_more` hands out a [`PageRequest`] ticket when a fetch
//! should be issued; the caller runs the fetch and hands the result back via
//! `complete`. Tickets carry the session generation, so responses that arrive
//! after a `reset` or `close` are recognised and dropped.

use crate::domain::entities::deal::Deal;
use crate::domain::error::DomainError;
use crate::domain::values::category::DealCategory;
use crate::domain::values::sort_key::SortKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Opaque continuation token produced by the deal source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor(String);

impl Cursor {
    pub fn new(token: impl Into<String>) -> Self {
        Cursor(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query parameters shared by every page of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedFilter {
    pub category: Option<DealCategory>,
    pub sort: SortKey,
}

/// One page as returned by the deal source.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DealPage {
    pub deals: Vec<Deal>,
    pub next_cursor: Option<Cursor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedState {
    Idle,
    Loading,
    Exhausted,
    Error,
}

impl fmt::Display for FeedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedState::Idle => write!(f, "idle"),
            FeedState::Loading => write!(f, "loading"),
            FeedState::Exhausted => write!(f, "exhausted"),
            FeedState::Error => write!(f, "error"),
        }
    }
}

/// A fetch the caller must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub filter: FeedFilter,
    pub cursor: Option<Cursor>,
    pub page_size: usize,
}

/// What happened when a fetch result was handed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MergeOutcome {
    /// New deals were appended; `dropped` were already in the sequence.
    Merged { appended: usize, dropped: usize },
    /// The source has nothing more; `appended` deals arrived with the final page.
    Exhausted { appended: usize },
    /// The fetch failed. Accumulated items are kept.
    Failed,
    /// The response belongs to a superseded generation or no fetch was pending.
    StaleIgnored,
}

/// Notification sent to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    StateChanged(FeedState),
    ItemsAppended { count: usize, total: usize },
    Reset { generation: u64, filter: FeedFilter },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&FeedEvent) + Send>;

pub struct FeedSession {
    filter: FeedFilter,
    page_size: usize,
    state: FeedState,
    generation: u64,
    cursor: Option<Cursor>,
    items: Vec<Deal>,
    seen: HashSet<String>,
    last_error: Option<String>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl FeedSession {
    pub fn new(filter: FeedFilter, page_size: usize) -> Self {
        Self {
            filter,
            page_size: page_size.max(1),
            state: FeedState::Idle,
            generation: 0,
            cursor: None,
            items: Vec::new(),
            seen: HashSet::new(),
            last_error: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn items(&self) -> &[Deal] {
        &self.items
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn filter(&self) -> FeedFilter {
        self.filter
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Ask for the next page. Returns `None` unless the session is idle, so
    /// repeated triggers while a fetch is outstanding collapse into one.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.state != FeedState::Idle {
            return None;
        }
        self.set_state(FeedState::Loading);
        Some(PageRequest {
            generation: self.generation,
            filter: self.filter,
            cursor: self.cursor.clone(),
            page_size: self.page_size,
        })
    }

    /// Hand back the result of a fetch issued by `load_more`.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<DealPage, DomainError>,
    ) -> MergeOutcome {
        if request.generation != self.generation || self.state != FeedState::Loading {
            return MergeOutcome::StaleIgnored;
        }

        let page = match result {
            Ok(page) => page,
            Err(e) => {
                self.last_error = Some(e.to_string());
                self.set_state(FeedState::Error);
                return MergeOutcome::Failed;
            }
        };

        if page.deals.is_empty() {
            self.set_state(FeedState::Exhausted);
            return MergeOutcome::Exhausted { appended: 0 };
        }

        let received = page.deals.len();
        let mut appended = 0;
        for deal in page.deals {
            if self.seen.insert(deal.id.clone()) {
                self.items.push(deal);
                appended += 1;
            }
        }
        if appended > 0 {
            self.notify(FeedEvent::ItemsAppended {
                count: appended,
                total: self.items.len(),
            });
        }

        match page.next_cursor {
            Some(next) => {
                self.cursor = Some(next);
                self.set_state(FeedState::Idle);
                MergeOutcome::Merged {
                    appended,
                    dropped: received - appended,
                }
            }
            None => {
                self.set_state(FeedState::Exhausted);
                MergeOutcome::Exhausted { appended }
            }
        }
    }

    /// Leave the error state so the next `load_more` retries the same cursor.
    pub fn retry(&mut self) -> bool {
        if self.state != FeedState::Error {
            return false;
        }
        self.last_error = None;
        self.set_state(FeedState::Idle);
        true
    }

    /// Start a new pass under `filter`. Everything accumulated so far is
    /// discarded and any outstanding fetch becomes stale.
    pub fn reset(&mut self, filter: FeedFilter) {
        self.generation += 1;
        self.filter = filter;
        self.cursor = None;
        self.items.clear();
        self.seen.clear();
        self.last_error = None;
        self.state = FeedState::Idle;
        self.notify(FeedEvent::Reset {
            generation: self.generation,
            filter,
        });
    }

    /// Tear the session down: drop listeners and invalidate outstanding fetches.
    pub fn close(&mut self) {
        self.generation += 1;
        self.listeners.clear();
        self.state = FeedState::Idle;
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FeedEvent) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn set_state(&mut self, state: FeedState) {
        if self.state != state {
            self.state = state;
            self.notify(FeedEvent::StateChanged(state));
        }
    }

    fn notify(&mut self, event: FeedEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

impl fmt::Debug for FeedSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeedSession")
            .field("filter", &self.filter)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("cursor", &self.cursor)
            .field("items", &self.items.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
