use serde::{Deserialize, Serialize};

use super::{coordinate::Coordinate, record::ResultRecord};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "record", rename_all = "snake_case")]
pub enum Selection {
    Idle,
    Selected(ResultRecord),
}

/// Which record is active on the map and in the list, plus where the map is centred.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    selection: Selection,
    map_center: Coordinate,
}

impl SelectionState {
    pub fn new(map_center: Coordinate) -> Self {
        Self {
            selection: Selection::Idle,
            map_center,
        }
    }

    pub fn select_record(&mut self, record: ResultRecord) {
        self.map_center = record.location;
        self.selection = Selection::Selected(record);
    }

    /// Leaves the map where it is.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Idle;
    }

    pub fn new_search_issued(&mut self, origin: Coordinate) {
        self.selection = Selection::Idle;
        self.map_center = origin;
    }

    pub fn selected(&self) -> Option<&ResultRecord> {
        match &self.selection {
            Selection::Idle => None,
            Selection::Selected(record) => Some(record),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn map_center(&self) -> Coordinate {
        self.map_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Coordinate {
        Coordinate::new(27.492413, 77.673676)
    }

    #[test]
    fn selecting_recenters_on_the_record() {
        let mut state = SelectionState::new(start());
        let record = ResultRecord::doctor_fixture("a", Coordinate::new(27.5, 77.7));

        state.select_record(record.clone());

        assert_eq!(state.selected(), Some(&record));
        assert_eq!(state.map_center(), record.location);
    }

    #[test]
    fn reselecting_replaces_the_selection() {
        let mut state = SelectionState::new(start());
        state.select_record(ResultRecord::doctor_fixture("a", Coordinate::new(27.5, 77.7)));
        let second = ResultRecord::doctor_fixture("b", Coordinate::new(27.6, 77.8));

        state.select_record(second.clone());

        assert_eq!(state.selected(), Some(&second));
        assert_eq!(state.map_center(), second.location);
    }

    #[test]
    fn select_then_clear_returns_to_idle_without_moving_the_map() {
        let mut state = SelectionState::new(start());
        let record = ResultRecord::doctor_fixture("a", Coordinate::new(27.5, 77.7));

        state.select_record(record.clone());
        let center_at_selection = state.map_center();
        state.clear_selection();

        assert_eq!(state.selection(), &Selection::Idle);
        assert_eq!(state.map_center(), center_at_selection);
    }

    #[test]
    fn new_search_clears_and_recenters_on_origin() {
        let mut state = SelectionState::new(start());
        state.select_record(ResultRecord::doctor_fixture("a", Coordinate::new(27.5, 77.7)));
        let origin = Coordinate::new(37.7749, -122.4194);

        state.new_search_issued(origin);

        assert_eq!(state.selected(), None);
        assert_eq!(state.map_center(), origin);
    }
}
