use crate::trello::client::Client;
use crate::trello::error::Result;
use crate::trello::resource::resource;
use crate::trello::transport::Transport;

resource! {
    /// A card on a list.
    pub struct Card {
        name: "card",
        path: "cards",
        key: "id",
        fields: {
            id: Id => "id",
            name: Text => "name" [required],
            description: Text => "desc",
            closed: Flag => "closed",
            board_id: Id => "idBoard",
            list_id: Id => "idList" [required],
            due: Date => "due",
            url: Url => "url",
        }
    }
}

impl Card {
    /// Find a card by id.
    pub async fn find<T: Transport>(client: &Client<T>, id: &str) -> Result<Card> {
        client.find(id).await
    }
}
