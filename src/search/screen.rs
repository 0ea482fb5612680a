use std::{collections::HashMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{
    coordinate::Coordinate,
    error::SearchError,
    query::SearchQuery,
    record::{ResultRecord, SearchKind},
    selection::{Selection, SelectionState},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    LocationUnavailable,
    RemoteUnavailable,
}

/// What the user sees for the screen as a whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScreenStatus {
    Idle,
    Loading,
    Results { count: usize },
    Empty,
    Error { failure: FailureKind, message: String },
}

/// Issued per search; only the newest ticket may write into the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    pub id: Uuid,
    pub kind: SearchKind,
    #[serde(flatten)]
    pub status: ScreenStatus,
    pub results: Vec<ResultRecord>,
    pub selection: Selection,
    pub map_center: Coordinate,
    pub origin: Option<Coordinate>,
}

pub struct Screen {
    id: Uuid,
    kind: SearchKind,
    status: ScreenStatus,
    results: Vec<ResultRecord>,
    selection: SelectionState,
    origin: Option<Coordinate>,
    latest_seq: u64,
}

impl Screen {
    pub fn new(kind: SearchKind, map_center: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            status: ScreenStatus::Idle,
            results: Vec::new(),
            selection: SelectionState::new(map_center),
            origin: None,
            latest_seq: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> SearchKind {
        self.kind
    }

    /// Origin of the last search that resolved a location.
    pub fn previous_origin(&self) -> Option<Coordinate> {
        self.origin
    }

    /// Supersedes every earlier ticket.
    pub fn issue(&mut self) -> SearchTicket {
        self.latest_seq += 1;
        self.status = ScreenStatus::Loading;
        SearchTicket {
            seq: self.latest_seq,
        }
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.seq == self.latest_seq
    }

    /// Returns false and changes nothing when the ticket is stale.
    pub fn location_resolved(&mut self, ticket: SearchTicket, query: &SearchQuery) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.origin = Some(query.origin);
        self.results.clear();
        self.selection.new_search_issued(query.origin);
        true
    }

    /// Applies a finished search. A malformed response renders as an empty set.
    /// Returns false and changes nothing when the ticket is stale.
    pub fn commit(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<ResultRecord>, SearchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        match outcome {
            Ok(results) => {
                self.status = if results.is_empty() {
                    ScreenStatus::Empty
                } else {
                    ScreenStatus::Results {
                        count: results.len(),
                    }
                };
                self.results = results;
            }
            Err(SearchError::MalformedResponse(_)) => {
                self.status = ScreenStatus::Empty;
                self.results.clear();
            }
            Err(SearchError::LocationUnavailable) => {
                self.status = ScreenStatus::Error {
                    failure: FailureKind::LocationUnavailable,
                    message: "We could not determine your location. Enter an address and try again."
                        .to_string(),
                };
                self.results.clear();
            }
            Err(SearchError::RemoteUnavailable(_)) => {
                self.status = ScreenStatus::Error {
                    failure: FailureKind::RemoteUnavailable,
                    message: "The search service is unavailable. Please retry.".to_string(),
                };
                self.results.clear();
            }
        }
        true
    }

    /// Selects one of the current results by id.
    pub fn select_record(&mut self, record_id: &str) -> Option<&ResultRecord> {
        let record = self.results.iter().find(|r| r.id == record_id)?.clone();
        self.selection.select_record(record);
        self.selection.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear_selection();
    }

    pub fn view(&self) -> ScreenView {
        ScreenView {
            id: self.id,
            kind: self.kind,
            status: self.status.clone(),
            results: self.results.clone(),
            selection: self.selection.selection().clone(),
            map_center: self.selection.map_center(),
            origin: self.origin,
        }
    }
}

/// Screens are owned here and only ever touched under the lock; the lock is
/// never held across a remote call.
#[derive(Clone, Default)]
pub struct ScreenStore {
    screens: Arc<Mutex<HashMap<Uuid, Screen>>>,
}

impl ScreenStore {
    pub async fn create(&self, kind: SearchKind, map_center: Coordinate) -> ScreenView {
        let screen = Screen::new(kind, map_center);
        let view = screen.view();
        self.screens.lock().await.insert(screen.id(), screen);
        view
    }

    pub async fn with_screen<R>(&self, id: Uuid, f: impl FnOnce(&mut Screen) -> R) -> Option<R> {
        let mut screens = self.screens.lock().await;
        screens.get_mut(&id).map(f)
    }

    pub async fn view(&self, id: Uuid) -> Option<ScreenView> {
        self.with_screen(id, |screen| screen.view()).await
    }

    /// Drops the screen once its page view ends. A search still in flight for it
    /// finds no screen when it finishes and reports the screen as not found.
    pub async fn remove(&self, id: Uuid) -> bool {
        self.screens.lock().await.remove(&id).is_some()
    }
}
