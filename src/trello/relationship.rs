//! On-demand relationship traversal.
//!
//! A relationship is resolved with one GET against
//! `/{owner_plural}/{owner_key}/{relationship}` every time it is accessed;
//! nothing is cached.

use serde_json::Value;

use crate::trello::error::{Result, TrelloError};
use crate::trello::resource::Resource;
use crate::trello::transport::Transport;

/// Build the path of a relationship scoped to its owner's key.
pub fn relationship_path<O: Resource>(owner: &O, relationship: &str) -> Result<String> {
    let key = owner
        .path_key()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| TrelloError::Validation {
            resource: O::SCHEMA.name,
            missing: vec![O::SCHEMA.key],
        })?;

    Ok(format!(
        "/{}/{}/{}",
        O::SCHEMA.path,
        urlencoding::encode(key),
        relationship
    ))
}

/// Fetch a relationship and hydrate every element into `E`.
///
/// `filter` is the resolved query pair, if the relationship takes one.
pub async fn fetch<T, O, E>(
    transport: &T,
    owner: &O,
    relationship: &str,
    filter: Option<(&str, &str)>,
) -> Result<Vec<E>>
where
    T: Transport + ?Sized,
    O: Resource,
    E: Resource,
{
    let path = relationship_path(owner, relationship)?;
    let query: Vec<(&str, &str)> = filter.into_iter().collect();

    log::debug!("Fetching {} {:?}", path, query);

    let json = transport.get(&path, &query).await?;
    let entities = hydrate_all::<E>(&json)?;

    log::debug!("{} returned {} {}(s)", path, entities.len(), E::SCHEMA.name);

    Ok(entities)
}

/// Hydrate a JSON array into typed resources, preserving order.
///
/// One malformed element fails the whole batch.
pub fn hydrate_all<E: Resource>(json: &Value) -> Result<Vec<E>> {
    let items = json.as_array().ok_or_else(|| TrelloError::Deserialization {
        resource: E::SCHEMA.name,
        reason: format!("expected a JSON array, got {json}"),
    })?;

    items.iter().map(E::from_json).collect()
}
