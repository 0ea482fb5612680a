use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::{
    coordinate::Coordinate,
    error::SearchError,
    filters,
    location::{DeviceLocation, Geocoder, LocationResolver},
    query::{self, SearchQuery},
    record::{ResultRecord, SearchKind},
    screen::{ScreenStore, ScreenView, SearchTicket},
};
use crate::services::search_client::SearchClient;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("screen {0} not found")]
    ScreenNotFound(Uuid),

    #[error("screen is a {actual} screen, not {expected}")]
    WrongKind {
        expected: SearchKind,
        actual: SearchKind,
    },

    #[error(transparent)]
    Search(#[from] SearchError),
}

/// User input for one search, as typed into the form.
pub struct SearchRequest {
    pub address: Option<String>,
    pub device: DeviceLocation,
    pub radius_km: f64,
    pub category: Option<String>,
    pub time_filter: Option<String>,
}

#[derive(Debug)]
pub enum SearchOutcome {
    /// The search was the newest one and its results are now on the screen.
    Applied(ScreenView),
    /// A newer search was issued meanwhile; carries the screen as it is now.
    Stale(ScreenView),
}

pub struct SearchFlow<'a> {
    pub store: &'a ScreenStore,
    pub geocoder: &'a dyn Geocoder,
    pub client: &'a dyn SearchClient,
    pub default_origin: Coordinate,
}

impl<'a> SearchFlow<'a> {
    pub async fn run(
        &self,
        screen_id: Uuid,
        request: SearchRequest,
    ) -> Result<SearchOutcome, FlowError> {
        let kind = self.client.kind();

        let (ticket, previous) = self
            .store
            .with_screen(screen_id, |screen| {
                if screen.kind() != kind {
                    return Err(FlowError::WrongKind {
                        expected: kind,
                        actual: screen.kind(),
                    });
                }
                Ok((screen.issue(), screen.previous_origin()))
            })
            .await
            .ok_or(FlowError::ScreenNotFound(screen_id))??;

        let resolver = LocationResolver::new(self.geocoder, self.default_origin);
        let origin = match resolver
            .resolve(request.address.as_deref(), request.device, previous)
            .await
        {
            Ok(origin) => origin,
            Err(e) => return self.finish(screen_id, ticket, Err(e)).await,
        };

        let query = query::build(
            origin,
            request.radius_km,
            request.category.as_deref(),
            request.time_filter.as_deref(),
        );

        let current = self
            .store
            .with_screen(screen_id, |screen| screen.location_resolved(ticket, &query))
            .await
            .ok_or(FlowError::ScreenNotFound(screen_id))?;

        if !current {
            return self.stale(screen_id).await;
        }

        info!(
            "Searching {} around {}, {} within {} km",
            kind, query.origin.lat, query.origin.lng, query.radius_km
        );

        let outcome = self
            .client
            .search(&query)
            .await
            .map(|records| self.prepare(&query, records));

        self.finish(screen_id, ticket, outcome).await
    }

    fn prepare(&self, query: &SearchQuery, records: Vec<ResultRecord>) -> Vec<ResultRecord> {
        let mut results = filters::annotate(&query.origin, records);

        if self.client.filters_radius_locally() {
            results = filters::filter_by_radius(results, query.radius_km);
        }
        results = filters::filter_by_availability(results, query.time_filter.as_deref());

        for record in results.iter_mut() {
            record.highlighted = record.matches_category(query.category.as_deref());
        }
        filters::sort_by_distance(&mut results);

        results
    }

    async fn finish(
        &self,
        screen_id: Uuid,
        ticket: SearchTicket,
        outcome: Result<Vec<ResultRecord>, SearchError>,
    ) -> Result<SearchOutcome, FlowError> {
        let failure = match &outcome {
            Ok(_) => None,
            Err(SearchError::MalformedResponse(e)) => {
                warn!("Treating malformed {} response as empty: {}", self.client.kind(), e);
                None
            }
            Err(e) => {
                error!("{} search failed: {}", self.client.kind(), e);
                Some(e.clone())
            }
        };

        let (applied, view) = self
            .store
            .with_screen(screen_id, |screen| {
                let applied = screen.commit(ticket, outcome);
                (applied, screen.view())
            })
            .await
            .ok_or(FlowError::ScreenNotFound(screen_id))?;

        if !applied {
            debug!("Discarded stale response for screen {}", screen_id);
            return Ok(SearchOutcome::Stale(view));
        }

        match failure {
            Some(e) => Err(FlowError::Search(e)),
            None => Ok(SearchOutcome::Applied(view)),
        }
    }

    async fn stale(&self, screen_id: Uuid) -> Result<SearchOutcome, FlowError> {
        debug!("Discarded stale search for screen {}", screen_id);
        self.store
            .view(screen_id)
            .await
            .map(SearchOutcome::Stale)
            .ok_or(FlowError::ScreenNotFound(screen_id))
    }
}
