use regex::Regex;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// RestaurantRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single restaurant (one row of the source CSV).
///
/// Every field arrives as free text and everything except `name` may be
/// empty.  Numeric views (distance magnitude, rating, review count) are
/// parsed on demand and never written back to the record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RestaurantRecord {
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub deals: String,
    #[serde(default)]
    pub menu_url: String,
    /// Free text, e.g. `"4.5/5 (120 reviews)"`.
    #[serde(default)]
    pub reviews: String,
    #[serde(default)]
    pub location: String,
    /// Free text, e.g. `"1.2 miles"`.
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub maps_url: String,
}

impl RestaurantRecord {
    /// Numeric prefix of the `distance` field (`"1.2 miles"` → `1.2`).
    ///
    /// `None` when the field has no numeric prefix ("nearby", empty, …).
    /// Such records are never excluded by the distance filter.
    pub fn distance_magnitude(&self) -> Option<f64> {
        parse_leading_number(&self.distance)
    }

    /// Star rating taken from the `reviews` field (`"4.5/5 …"` → `4.5`),
    /// `0.0` when absent.
    pub fn rating(&self) -> f64 {
        let re = Regex::new(r"(\d+\.\d+|\d+)/\d+").expect("valid rating regex");
        re.captures(&self.reviews)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(0.0)
    }

    /// Review count taken from the `reviews` field (`"(120 reviews)"` →
    /// `120`), `0` when absent.
    pub fn review_count(&self) -> u32 {
        let re = Regex::new(r"\((\d+)\s+reviews\)").expect("valid review count regex");
        re.captures(&self.reviews)
            .and_then(|c| c[1].parse().ok())
            .unwrap_or(0)
    }
}

/// Parse the leading `[0-9.]` run of a string as an `f64`.
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

// ---------------------------------------------------------------------------
// RestaurantSet – the complete loaded listing
// ---------------------------------------------------------------------------

/// The full loaded listing, immutable for the lifetime of a session.
#[derive(Debug, Clone, Default)]
pub struct RestaurantSet {
    /// All records, in source row order.
    pub records: Vec<RestaurantRecord>,
}

impl RestaurantSet {
    pub fn from_records(records: Vec<RestaurantRecord>) -> Self {
        RestaurantSet { records }
    }

    /// Number of restaurants.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the listing is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Largest parseable distance magnitude, used by the presentation layer
    /// to bound its distance slider.  `None` when no row has one.
    pub fn max_distance(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(RestaurantRecord::distance_magnitude)
            .fold(None, |acc, d| Some(acc.map_or(d, |m: f64| m.max(d))))
    }
}
