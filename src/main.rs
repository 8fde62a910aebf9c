mod data;
mod state;

use std::path::PathBuf;

use anyhow::{Context, Result};

use data::filter::{SortKey, SortOrder};
use state::SessionState;

/// Source used when no path is given, matching the bundled sample data.
const DEFAULT_SOURCE: &str = "sample_restaurants.csv";

/// Terminal stand-in for the presentation layer: load the listing, apply an
/// optional maximum-distance threshold, print one line per visible record.
///
/// Usage: `pronto [path] [max-distance]`
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_SOURCE.to_string()));
    let max_distance = args
        .next()
        .map(|raw| {
            raw.parse::<f64>()
                .with_context(|| format!("invalid max distance '{raw}'"))
        })
        .transpose()?;

    let dataset = data::loader::load_file(&path)?;
    log::info!("Loaded {} restaurants from {}", dataset.len(), path.display());
    if dataset.is_empty() {
        log::warn!("source {} has a header but no data rows", path.display());
    }
    if let Some(limit) = dataset.max_distance() {
        log::debug!("distance magnitudes up to {limit}");
    }

    let mut session = SessionState::default();
    session.set_dataset(dataset);
    session.set_max_distance(max_distance);
    session.sort = Some((SortKey::Distance, SortOrder::Ascending));
    session.refilter();

    let found = session.visible().count();
    if found == 0 {
        println!("No restaurants found. Check the data source or relax the filters.");
        return Ok(());
    }

    println!("Found {found} restaurants");
    for r in session.visible() {
        let distance = if r.distance.is_empty() { "?" } else { r.distance.as_str() };
        println!("  {:<20} {:>10}  {:<24} {}", r.name, distance, r.deals, r.location);
    }

    Ok(())
}
