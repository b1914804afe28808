use serde_json::Value;

use crate::config::ClientConfig;
use crate::trello::error::{Result, TrelloError};
use crate::trello::filter::FilterOption;
use crate::trello::httptransport::HttpTransport;
use crate::trello::record::{Attributes, Record};
use crate::trello::relationship;
use crate::trello::resource::Resource;
use crate::trello::transport::Transport;
use crate::trello::value::Value as FieldValue;

/// Entry point of the resource layer.
///
/// Owns the injected [`Transport`]; every lookup, save and relationship
/// fetch goes through it.
pub struct Client<T> {
    transport: T,
}

impl Client<HttpTransport> {
    /// Create a client talking to the Trello API described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}

impl<T: Transport> Client<T> {
    /// Create a client over an injected transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The transport every request goes through.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up a resource by id or alternate key (e.g. a username).
    ///
    /// A blank key matches nothing and fails without a request.
    pub async fn find<E: Resource>(&self, id_or_key: &str) -> Result<E> {
        let schema = E::SCHEMA;
        if id_or_key.trim().is_empty() {
            return Err(not_found::<E>(id_or_key));
        }
        let path = format!("/{}/{}", schema.path, urlencoding::encode(id_or_key));

        log::debug!("Finding {} at {}", schema.name, path);

        let json = match self.transport.get(&path, &[]).await {
            Ok(Value::Null) => return Err(not_found::<E>(id_or_key)),
            Ok(json) => json,
            Err(e) if e.is_not_found() => return Err(not_found::<E>(id_or_key)),
            Err(e) => return Err(e.into()),
        };

        E::from_json(&json)
    }

    /// Fetch a relationship of `owner` that takes no filter.
    pub async fn related<O: Resource, E: Resource>(
        &self,
        owner: &O,
        relationship: &str,
    ) -> Result<Vec<E>> {
        relationship::fetch(&self.transport, owner, relationship, None).await
    }

    /// Fetch a filtered relationship of `owner`; `None` uses the filter's default.
    pub async fn related_filtered<O: Resource, E: Resource, F: FilterOption>(
        &self,
        owner: &O,
        relationship: &str,
        filter: Option<F>,
    ) -> Result<Vec<E>> {
        let filter = F::resolve(filter);
        relationship::fetch(&self.transport, owner, relationship, Some(filter)).await
    }

    /// Validate and persist local changes.
    ///
    /// A persisted resource sends its pending diff with PUT; a new one is
    /// created with POST. The change tracker is committed only after the
    /// transport succeeds. An invalid resource fails before any request is
    /// made.
    ///
    /// The response replaces local values only when it decodes and carries
    /// the resource's identifier. Otherwise the save still succeeds, local
    /// values are kept and a warning is logged.
    pub async fn save<E: Resource>(&self, entity: &mut E) -> Result<()> {
        entity.validate()?;

        let schema = E::SCHEMA;
        let id = entity.identifier().map(str::to_owned);
        let response = match id.as_deref() {
            Some(id) => {
                let diff = entity.changes().diff();
                if diff.is_empty() {
                    log::debug!("{} {} has no pending changes", schema.name, id);
                    entity.record_mut().commit();
                    return Ok(());
                }

                let path = format!("/{}/{}", schema.path, urlencoding::encode(id));
                let body = schema.to_wire(diff.iter().map(|(name, value)| (*name, value)));
                log::debug!("Updating {} at {}", schema.name, path);
                self.transport.put(&path, &body).await?
            }
            None => {
                let path = format!("/{}", schema.path);
                let body = entity.record().to_json();
                log::debug!("Creating {} at {}", schema.name, path);
                self.transport.post(&path, &body).await?
            }
        };

        let confirmed = confirmed_values(entity.record(), &response, id.as_deref());

        let record = entity.record_mut();
        record.commit();
        if let Some(values) = confirmed {
            record.adopt(values);
        }

        Ok(())
    }
}

/// Decode a save response, accepting it only if it names the saved resource.
///
/// `expected_id` is `None` for a create, where any non-blank id is accepted.
fn confirmed_values(
    record: &Record,
    response: &Value,
    expected_id: Option<&str>,
) -> Option<Attributes> {
    let name = record.schema().name;
    if !response.is_object() {
        log::debug!("{} save returned no object, keeping local values", name);
        return None;
    }

    let values = match record.decode(response) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Ignoring {} save response: {}", name, e);
            return None;
        }
    };

    let returned_id = values
        .get("id")
        .and_then(FieldValue::as_str)
        .filter(|id| !id.trim().is_empty());

    match (returned_id, expected_id) {
        (Some(returned), Some(expected)) if returned == expected => Some(values),
        (Some(_), None) => Some(values),
        _ => {
            log::warn!(
                "Ignoring {} save response without a matching identifier",
                name
            );
            None
        }
    }
}

fn not_found<E: Resource>(key: &str) -> TrelloError {
    log::warn!("{} '{}' not found", E::SCHEMA.name, key);
    TrelloError::NotFound {
        resource: E::SCHEMA.name,
        key: key.to_string(),
    }
}
