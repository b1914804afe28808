use crate::trello::resource::resource;

resource! {
    /// A notification delivered to a member.
    pub struct Notification {
        name: "notification",
        path: "notifications",
        key: "id",
        fields: {
            id: Id => "id" [required],
            kind: Text => "type",
            unread: Flag => "unread",
            date: Date => "date",
            creator_id: Id => "idMemberCreator",
        }
    }
}
