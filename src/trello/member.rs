use crate::trello::action::Action;
use crate::trello::board::Board;
use crate::trello::card::Card;
use crate::trello::client::Client;
use crate::trello::error::Result;
use crate::trello::filter::{BoardFilter, CardFilter, OrganizationFilter};
use crate::trello::notification::Notification;
use crate::trello::organization::Organization;
use crate::trello::resource::resource;
use crate::trello::transport::Transport;

const AVATAR_BASE_URL: &str = "https://trello-avatars.s3.amazonaws.com";

resource! {
    /// A Member is a user of the Trello service.
    ///
    /// Member relationships are addressed by username rather than id.
    pub struct Member {
        name: "member",
        path: "members",
        key: "username",
        fields: {
            id: Id => "id" [required],
            username: Text => "username" [required],
            full_name: Text => "fullName",
            avatar_id: Id => "avatarHash",
            bio: Text => "bio",
            url: Url => "url",
        }
    }
}

/// Rendered size of a member avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    /// 170x170
    #[default]
    Large,
    /// 30x30
    Small,
}

impl AvatarSize {
    /// Edge length of the square image.
    pub fn pixels(self) -> u32 {
        match self {
            AvatarSize::Large => 170,
            AvatarSize::Small => 30,
        }
    }
}

impl Member {
    /// Find a member by id or username.
    pub async fn find<T: Transport>(client: &Client<T>, id_or_username: &str) -> Result<Member> {
        client.find(id_or_username).await
    }

    /// URL of the member's avatar image, if they have one.
    pub fn avatar_url(&self, size: AvatarSize) -> Option<String> {
        let avatar_id = self.avatar_id().filter(|id| !id.trim().is_empty())?;
        Some(format!(
            "{}/{}/{}.png",
            AVATAR_BASE_URL,
            avatar_id,
            size.pixels()
        ))
    }

    /// The member's actions.
    pub async fn actions<T: Transport>(&self, client: &Client<T>) -> Result<Vec<Action>> {
        client.related(self, "actions").await
    }

    /// Boards the member belongs to. Defaults to [`BoardFilter::All`].
    pub async fn boards<T: Transport>(
        &self,
        client: &Client<T>,
        filter: Option<BoardFilter>,
    ) -> Result<Vec<Board>> {
        client.related_filtered(self, "boards", filter).await
    }

    /// Cards the member is assigned to. Defaults to [`CardFilter::Open`].
    pub async fn cards<T: Transport>(
        &self,
        client: &Client<T>,
        filter: Option<CardFilter>,
    ) -> Result<Vec<Card>> {
        client.related_filtered(self, "cards", filter).await
    }

    /// Organizations the member is part of. Defaults to [`OrganizationFilter::All`].
    pub async fn organizations<T: Transport>(
        &self,
        client: &Client<T>,
        filter: Option<OrganizationFilter>,
    ) -> Result<Vec<Organization>> {
        client.related_filtered(self, "organizations", filter).await
    }

    /// The member's notifications.
    pub async fn notifications<T: Transport>(
        &self,
        client: &Client<T>,
    ) -> Result<Vec<Notification>> {
        client.related(self, "notifications").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trello::resource::Resource;
    use serde_json::json;

    #[test]
    fn avatar_url_uses_requested_size() {
        let member = Member::from_json(&json!({
            "id": "abc123",
            "username": "jsmith",
            "avatarHash": "f00d"
        }))
        .unwrap();

        assert_eq!(
            member.avatar_url(AvatarSize::Small).as_deref(),
            Some("https://trello-avatars.s3.amazonaws.com/f00d/30.png")
        );
        assert_eq!(
            member.avatar_url(AvatarSize::default()).as_deref(),
            Some("https://trello-avatars.s3.amazonaws.com/f00d/170.png")
        );
    }

    #[test]
    fn avatar_url_requires_avatar_id() {
        assert_eq!(Member::new().avatar_url(AvatarSize::Large), None);
    }

    #[test]
    fn schema_requires_id_and_username() {
        let required: Vec<_> = Member::SCHEMA.required_fields().collect();
        assert_eq!(required, vec!["id", "username"]);
        assert_eq!(Member::SCHEMA.key, "username");
    }
}
