use super::{coordinate::Coordinate, record::ResultRecord};

/// Sets `distance_km` on every record relative to `origin`.
pub fn annotate(origin: &Coordinate, results: Vec<ResultRecord>) -> Vec<ResultRecord> {
    results
        .into_iter()
        .map(|mut record| {
            record.distance_km = Some(origin.distance_km(&record.location));
            record
        })
        .collect()
}

/// Keeps records with `distance_km <= radius_km`. Records that were never
/// annotated cannot be shown to be inside the radius and are dropped.
pub fn filter_by_radius(results: Vec<ResultRecord>, radius_km: f64) -> Vec<ResultRecord> {
    results
        .into_iter()
        .filter(|r| matches!(r.distance_km, Some(d) if d <= radius_km))
        .collect()
}

/// Compares zero-padded `HH:MM` strings, so hours running past midnight
/// (close "02:00") are treated as closing early.
pub fn is_open_until(record: &ResultRecord, time_filter: &str) -> bool {
    match &record.availability {
        Some(hours) => hours.open24 || hours.close.as_str() >= time_filter,
        None => true,
    }
}

pub fn filter_by_availability(
    results: Vec<ResultRecord>,
    time_filter: Option<&str>,
) -> Vec<ResultRecord> {
    match time_filter {
        None | Some("") => results,
        Some(time) => results
            .into_iter()
            .filter(|r| is_open_until(r, time))
            .collect(),
    }
}

pub fn sort_by_distance(results: &mut [ResultRecord]) {
    results.sort_by(|a, b| {
        a.distance_km
            .unwrap_or(f64::INFINITY)
            .total_cmp(&b.distance_km.unwrap_or(f64::INFINITY))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> Coordinate {
        Coordinate::new(0.0, 0.0)
    }

    fn spread() -> Vec<ResultRecord> {
        vec![
            ResultRecord::doctor_fixture("here", Coordinate::new(0.0, 0.0)),
            ResultRecord::doctor_fixture("near", Coordinate::new(0.0, 0.02)),
            ResultRecord::doctor_fixture("mid", Coordinate::new(0.0, 0.1)),
            ResultRecord::doctor_fixture("far", Coordinate::new(0.0, 1.0)),
        ]
    }

    #[test]
    fn annotates_every_record() {
        let annotated = annotate(&origin(), spread());

        assert!(annotated.iter().all(|r| r.distance_km.is_some()));
        assert_eq!(annotated[0].distance_km, Some(0.0));
        assert!((annotated[3].distance_km.unwrap() - 111.19).abs() < 0.5);
    }

    #[test]
    fn radius_filter_keeps_exactly_the_records_within_radius() {
        let annotated = annotate(&origin(), spread());

        for radius in [0.0, 1.0, 2.3, 5.0, 11.2, 50.0, 120.0] {
            let kept = filter_by_radius(annotated.clone(), radius);
            let expected: Vec<_> = annotated
                .iter()
                .filter(|r| r.distance_km.unwrap() <= radius)
                .cloned()
                .collect();

            assert_eq!(kept, expected, "radius {radius}");
        }
    }

    #[test]
    fn zero_radius_keeps_only_exact_origin_matches() {
        let kept = filter_by_radius(annotate(&origin(), spread()), 0.0);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "here");
    }

    #[test]
    fn unannotated_records_fail_the_radius_filter() {
        let kept = filter_by_radius(spread(), 1000.0);

        assert!(kept.is_empty());
    }

    #[test]
    fn empty_time_filter_passes_everything() {
        let results = vec![
            ResultRecord::pharmacy_fixture("a", origin(), "17:00", false),
            ResultRecord::pharmacy_fixture("b", origin(), "09:00", false),
        ];

        assert_eq!(filter_by_availability(results.clone(), None), results);
        assert_eq!(filter_by_availability(results.clone(), Some("")), results);
    }

    #[test]
    fn open24_always_passes() {
        let results = vec![ResultRecord::pharmacy_fixture("a", origin(), "00:00", true)];

        for time in ["00:00", "12:30", "23:59"] {
            assert_eq!(filter_by_availability(results.clone(), Some(time)).len(), 1);
        }
    }

    #[test]
    fn keeps_pharmacies_closing_at_or_after_requested_time() {
        let results = vec![
            ResultRecord::pharmacy_fixture("early", origin(), "18:00", false),
            ResultRecord::pharmacy_fixture("exact", origin(), "21:00", false),
            ResultRecord::pharmacy_fixture("late", origin(), "22:30", false),
            ResultRecord::pharmacy_fixture("overnight", origin(), "02:00", false),
        ];

        let ids: Vec<_> = filter_by_availability(results, Some("21:00"))
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec!["exact", "late"]);
    }

    #[test]
    fn records_without_hours_are_kept() {
        let results = vec![ResultRecord::doctor_fixture("d", origin())];

        assert_eq!(filter_by_availability(results, Some("23:00")).len(), 1);
    }

    #[test]
    fn sorts_nearest_first() {
        let mut results = annotate(&origin(), spread());
        results.reverse();
        sort_by_distance(&mut results);

        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["here", "near", "mid", "far"]);
    }
}
