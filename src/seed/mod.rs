//! Sample data for a fresh database.

mod fixtures;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::error::Result;
use crate::model::ModelsExt;
use crate::record::record_from;
use crate::store::RecordStore;

/// Load the sample fixtures through the model facades.
///
/// Each fixture set is inserted only when its collection is empty, so
/// running this against a populated store is a no-op. Returns the number
/// of records inserted per collection; collections that were skipped are
/// absent from the result.
pub async fn load_sample_data(store: &RecordStore) -> Result<IndexMap<String, usize>> {
    let mut loaded = IndexMap::new();
    for (spec, records) in fixtures::sample_sets() {
        if store.count(spec.collection).await? > 0 {
            debug!("Skipping sample data for non-empty {}", spec.collection);
            continue;
        }
        let model = store.model(spec);
        let count = records.len();
        for record in records {
            model.create(record_from(record)).await?;
        }
        loaded.insert(spec.collection.to_string(), count);
    }
    info!(
        "Loaded sample data into {} collections ({} records)",
        loaded.len(),
        loaded.values().sum::<usize>()
    );
    Ok(loaded)
}
