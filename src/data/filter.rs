use super::model::{RestaurantRecord, RestaurantSet};

// ---------------------------------------------------------------------------
// Filter parameters
// ---------------------------------------------------------------------------

/// Active filter constraints, as supplied by the presentation layer.
///
/// The defaults constrain nothing: every record is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    /// Maximum distance magnitude.  `None` (no filter) and `Some(0.0)` both
    /// leave the listing untouched; records whose distance has no numeric
    /// prefix always pass.
    pub max_distance: Option<f64>,
    /// Minimum star rating; unparseable reviews count as `0.0`.
    pub min_rating: f64,
    /// Minimum review count; unparseable reviews count as `0`.
    pub min_reviews: u32,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            max_distance: None,
            min_rating: 0.0,
            min_reviews: 0,
        }
    }
}

/// Return indices of records that pass all active filters, in source order.
///
/// Pure function of its inputs: no reordering, no duplication, and the
/// source set is never touched.
pub fn filtered_indices(set: &RestaurantSet, params: &FilterParams) -> Vec<usize> {
    set.records
        .iter()
        .enumerate()
        .filter(|(_, r)| passes(r, params))
        .map(|(i, _)| i)
        .collect()
}

fn passes(record: &RestaurantRecord, params: &FilterParams) -> bool {
    let within_distance = match params.max_distance {
        None => true,
        Some(t) if t <= 0.0 => true,
        Some(t) => record.distance_magnitude().map_or(true, |d| d <= t),
    };
    within_distance
        && record.rating() >= params.min_rating
        && record.review_count() >= params.min_reviews
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Listing sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Distance,
    Rating,
    ReviewCount,
}

/// Listing sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Stable-sort an index list by the given key.
///
/// Kept separate from [`filtered_indices`] so filtering itself never
/// reorders.  Records without a parseable distance sort as `0.0`.
pub fn sort_indices(set: &RestaurantSet, indices: &mut [usize], key: SortKey, order: SortOrder) {
    let value = |i: usize| -> f64 {
        let r = &set.records[i];
        match key {
            SortKey::Distance => r.distance_magnitude().unwrap_or(0.0),
            SortKey::Rating => r.rating(),
            SortKey::ReviewCount => f64::from(r.review_count()),
        }
    };
    indices.sort_by(|&a, &b| {
        let ord = value(a).total_cmp(&value(b));
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(rows: &[(&str, &str)]) -> RestaurantSet {
        let records = rows
            .iter()
            .enumerate()
            .map(|(i, (distance, reviews))| RestaurantRecord {
                name: format!("r{i}"),
                distance: distance.to_string(),
                reviews: reviews.to_string(),
                ..Default::default()
            })
            .collect();
        RestaurantSet::from_records(records)
    }

    fn max_distance(t: f64) -> FilterParams {
        FilterParams {
            max_distance: Some(t),
            ..Default::default()
        }
    }

    #[test]
    fn threshold_excludes_farther_records() {
        let set = listing(&[("1.2 miles", ""), ("0.5 miles", ""), ("3.0 miles", "")]);
        assert_eq!(filtered_indices(&set, &max_distance(1.0)), [1]);
    }

    #[test]
    fn absent_and_zero_thresholds_keep_everything() {
        let set = listing(&[("1.2 miles", ""), ("0.5 miles", ""), ("3.0 miles", "")]);
        assert_eq!(filtered_indices(&set, &FilterParams::default()), [0, 1, 2]);
        assert_eq!(filtered_indices(&set, &max_distance(0.0)), [0, 1, 2]);
    }

    #[test]
    fn threshold_at_or_above_max_keeps_everything() {
        let set = listing(&[("1.2 miles", ""), ("0.5 miles", ""), ("3.0 miles", "")]);
        assert_eq!(filtered_indices(&set, &max_distance(3.0)), [0, 1, 2]);
        assert_eq!(filtered_indices(&set, &max_distance(10.0)), [0, 1, 2]);
    }

    #[test]
    fn unparseable_distance_always_passes() {
        let set = listing(&[("0.5 miles", ""), ("", ""), ("nearby", "")]);
        assert_eq!(filtered_indices(&set, &max_distance(0.1)), [1, 2]);
        assert_eq!(filtered_indices(&set, &max_distance(5.0)), [0, 1, 2]);
    }

    #[test]
    fn output_is_an_ordered_subsequence() {
        let set = listing(&[
            ("2.0 miles", ""),
            ("0.3 miles", ""),
            ("1.9 miles", ""),
            ("0.1 miles", ""),
        ]);
        let indices = filtered_indices(&set, &max_distance(1.95));
        assert_eq!(indices, [1, 2, 3]);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn filtering_is_idempotent() {
        let set = listing(&[("1.2 miles", ""), ("0.5 miles", ""), ("nearby", "")]);
        let params = max_distance(1.0);

        let once = filtered_indices(&set, &params);
        let survivors = RestaurantSet::from_records(
            once.iter().map(|&i| set.records[i].clone()).collect(),
        );
        let twice = filtered_indices(&survivors, &params);
        assert_eq!(twice, (0..survivors.len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_listing_stays_empty() {
        let set = RestaurantSet::default();
        assert!(filtered_indices(&set, &FilterParams::default()).is_empty());
        assert!(filtered_indices(&set, &max_distance(1.0)).is_empty());
    }

    #[test]
    fn min_rating_excludes_low_and_unrated() {
        let set = listing(&[
            ("", "4.5/5 (120 reviews)"),
            ("", "3.0/5 (40 reviews)"),
            ("", "no reviews yet"),
        ]);
        let params = FilterParams {
            min_rating: 4.0,
            ..Default::default()
        };
        assert_eq!(filtered_indices(&set, &params), [0]);
    }

    #[test]
    fn min_reviews_excludes_sparsely_reviewed() {
        let set = listing(&[
            ("", "4.5/5 (120 reviews)"),
            ("", "4.8/5 (3 reviews)"),
            ("", ""),
        ]);
        let params = FilterParams {
            min_reviews: 10,
            ..Default::default()
        };
        assert_eq!(filtered_indices(&set, &params), [0]);
    }

    #[test]
    fn sort_by_distance_both_orders() {
        let set = listing(&[("1.2 miles", ""), ("0.5 miles", ""), ("3.0 miles", "")]);
        let mut indices = vec![0, 1, 2];
        sort_indices(&set, &mut indices, SortKey::Distance, SortOrder::Ascending);
        assert_eq!(indices, [1, 0, 2]);
        sort_indices(&set, &mut indices, SortKey::Distance, SortOrder::Descending);
        assert_eq!(indices, [2, 0, 1]);
    }

    #[test]
    fn sort_treats_unparseable_distance_as_zero() {
        let set = listing(&[("1.2 miles", ""), ("nearby", "")]);
        let mut indices = vec![0, 1];
        sort_indices(&set, &mut indices, SortKey::Distance, SortOrder::Ascending);
        assert_eq!(indices, [1, 0]);
    }

    #[test]
    fn sort_by_rating_and_review_count() {
        let set = listing(&[
            ("", "3.5/5 (200 reviews)"),
            ("", "4.5/5 (10 reviews)"),
            ("", "4.0/5 (50 reviews)"),
        ]);
        let mut indices = vec![0, 1, 2];
        sort_indices(&set, &mut indices, SortKey::Rating, SortOrder::Descending);
        assert_eq!(indices, [1, 2, 0]);

        let mut indices = vec![0, 1, 2];
        sort_indices(&set, &mut indices, SortKey::ReviewCount, SortOrder::Descending);
        assert_eq!(indices, [0, 2, 1]);
    }
}
