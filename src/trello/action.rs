use crate::trello::resource::resource;

resource! {
    /// Something a member did, e.g. creating a card or commenting.
    pub struct Action {
        name: "action",
        path: "actions",
        key: "id",
        fields: {
            id: Id => "id" [required],
            kind: Text => "type",
            date: Date => "date",
            creator_id: Id => "idMemberCreator",
        }
    }
}
