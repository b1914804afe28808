use crate::trello::card::Card;
use crate::trello::client::Client;
use crate::trello::error::Result;
use crate::trello::filter::CardFilter;
use crate::trello::resource::resource;
use crate::trello::transport::Transport;

resource! {
    /// A board groups lists of cards.
    pub struct Board {
        name: "board",
        path: "boards",
        key: "id",
        fields: {
            id: Id => "id",
            name: Text => "name" [required],
            description: Text => "desc",
            closed: Flag => "closed",
            organization_id: Id => "idOrganization",
            url: Url => "url",
        }
    }
}

impl Board {
    /// Find a board by id.
    pub async fn find<T: Transport>(client: &Client<T>, id: &str) -> Result<Board> {
        client.find(id).await
    }

    /// Cards on the board. Defaults to [`CardFilter::Open`].
    pub async fn cards<T: Transport>(
        &self,
        client: &Client<T>,
        filter: Option<CardFilter>,
    ) -> Result<Vec<Card>> {
        client.related_filtered(self, "cards", filter).await
    }
}
