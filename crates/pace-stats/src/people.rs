//! Person lookups from `/people/{id}`.

use std::collections::BTreeSet;

use futures::{StreamExt, stream};
use serde::Deserialize;

use crate::{StatsClient, error::StatsError};
use pace_core::{
    ids::PersonId,
    names::{PersonName, StaticDirectory},
};

/// Concurrent person requests during prefetch.
const PREFETCH_CONCURRENCY: usize = 8;

#[derive(Deserialize)]
struct PeopleResponse {
    #[serde(default)]
    people: Vec<PersonRaw>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonRaw {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
}

fn first_person(data: PeopleResponse, id: PersonId) -> Result<PersonName, StatsError> {
    let person = data
        .people
        .into_iter()
        .next()
        .ok_or_else(|| StatsError::NotFound(format!("person {id}")))?;
    Ok(PersonName {
        first: person.first_name,
        last: person.last_name,
    })
}

impl StatsClient {
    /// Name parts for one person.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::NotFound`] for unknown ids, or any transport and
    /// parse error from the request.
    pub async fn person(&self, id: PersonId) -> Result<PersonName, StatsError> {
        let data: PeopleResponse = self.get_json(&format!("/people/{id}")).await?;
        first_person(data, id)
    }

    /// Look up every distinct id and collect the successes.
    ///
    /// Failed lookups are logged and left out, so the returned directory
    /// resolves them to the bare id.
    pub async fn prefetch_names<I>(&self, ids: I) -> StaticDirectory
    where
        I: IntoIterator<Item = PersonId>,
    {
        let wanted: BTreeSet<PersonId> = ids.into_iter().filter(|id| id.get() > 0).collect();
        let requested = wanted.len();

        let directory: StaticDirectory = stream::iter(wanted)
            .map(|id| async move { (id, self.person(id).await) })
            .buffer_unordered(PREFETCH_CONCURRENCY)
            .filter_map(|(id, result)| async move {
                match result {
                    Ok(name) => Some((id, name)),
                    Err(error) => {
                        tracing::warn!(%id, %error, "person lookup failed");
                        None
                    }
                }
            })
            .collect()
            .await;

        tracing::info!(requested, resolved = directory.len(), "prefetched person names");
        directory
    }
}
