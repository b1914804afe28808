use crate::trello::board::Board;
use crate::trello::client::Client;
use crate::trello::error::Result;
use crate::trello::filter::BoardFilter;
use crate::trello::resource::resource;
use crate::trello::transport::Transport;

resource! {
    /// An organization (workspace) owning boards.
    pub struct Organization {
        name: "organization",
        path: "organizations",
        key: "id",
        fields: {
            id: Id => "id",
            name: Text => "name" [required],
            display_name: Text => "displayName",
            description: Text => "desc",
            url: Url => "url",
        }
    }
}

impl Organization {
    /// Find an organization by id or short name.
    pub async fn find<T: Transport>(client: &Client<T>, id_or_name: &str) -> Result<Organization> {
        client.find(id_or_name).await
    }

    /// Boards of the organization. Defaults to [`BoardFilter::All`].
    pub async fn boards<T: Transport>(
        &self,
        client: &Client<T>,
        filter: Option<BoardFilter>,
    ) -> Result<Vec<Board>> {
        client.related_filtered(self, "boards", filter).await
    }
}
