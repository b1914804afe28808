use serde_json::json;

use trello_client::trello::board::Board;
use trello_client::trello::client::Client;
use trello_client::trello::error::{TransportError, TrelloError};
use trello_client::trello::member::Member;
use trello_client::trello::mocktransport::MockTransport;
use trello_client::trello::resource::Resource;
use trello_client::trello::transport::Method;
use trello_client::trello::value::Value;

fn jsmith() -> Member {
    Member::from_json(&json!({ "id": "abc123", "username": "jsmith", "fullName": "J Smith" }))
        .unwrap()
}

#[tokio::test]
async fn invalid_entity_is_rejected_without_network_calls() {
    let client = Client::new(MockTransport::new());
    let mut member = Member::new();
    member.set_full_name("J Smith");

    let err = client.save(&mut member).await.unwrap_err();

    match err {
        TrelloError::Validation { resource, missing } => {
            assert_eq!(resource, "member");
            assert_eq!(missing, vec!["id", "username"]);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(client.transport().call_count().await, 0);
    assert!(member.changes().is_changed("full_name"));
    assert!(member.changes().previous_changes().is_empty());
}

#[tokio::test]
async fn save_sends_only_the_diff_and_commits() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put(
        "/members/abc123",
        json!({ "id": "abc123", "username": "jsmith", "fullName": "J Smith", "bio": "Writes code" }),
    );
    let client = Client::new(transport);
    let mut member = jsmith();

    member.set_bio("Drafts");
    member.set_bio("Writes code");
    let pending = member.changes().changes().clone();

    client.save(&mut member).await?;

    let requests = client.transport().requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Put);
    assert_eq!(requests[0].body, Some(json!({ "bio": "Writes code" })));

    assert!(member.changes().diff().is_empty());
    assert_eq!(member.changes().previous_changes(), &pending);
    assert_eq!(member.changes().previous_changes()["bio"].old, Value::Null);
    assert_eq!(member.bio(), Some("Writes code"));
    Ok(())
}

#[tokio::test]
async fn failed_update_keeps_changes_pending_for_retry() -> Result<(), TrelloError> {
    let transport = MockTransport::new()
        .fail(
            Method::Put,
            "/members/abc123",
            TransportError::Request("connection refused".to_string()),
        )
        .on_put("/members/abc123", json!({ "id": "abc123", "username": "jsmith", "fullName": "Jane" }));
    let client = Client::new(transport);
    let mut member = jsmith();
    member.set_full_name("Jane");

    let err = client.save(&mut member).await.unwrap_err();
    assert!(matches!(err, TrelloError::Transport(_)));
    assert!(member.changes().is_changed("full_name"));
    assert!(member.changes().previous_changes().is_empty());

    client.save(&mut member).await?;

    let requests = client.transport().requests().await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].body, requests[1].body);
    assert!(!member.changes().is_dirty());
    Ok(())
}

#[tokio::test]
async fn save_without_changes_skips_the_request() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put(
        "/members/abc123",
        json!({ "id": "abc123", "username": "jsmith" }),
    );
    let client = Client::new(transport);
    let mut member = jsmith();

    member.set_bio("hello");
    client.save(&mut member).await?;
    assert!(!member.changes().previous_changes().is_empty());

    client.save(&mut member).await?;

    assert_eq!(client.transport().call_count().await, 1);
    assert!(member.changes().previous_changes().is_empty());
    Ok(())
}

#[tokio::test]
async fn reverted_field_is_not_sent() -> Result<(), TrelloError> {
    let client = Client::new(MockTransport::new());
    let mut member = jsmith();

    member.set_full_name("Someone Else");
    member.set_full_name("J Smith");
    client.save(&mut member).await?;

    assert_eq!(client.transport().call_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn new_board_is_created_with_post() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_post(
        "/boards",
        json!({ "id": "b9", "name": "Launch", "closed": false, "url": "https://trello.com/b/b9" }),
    );
    let client = Client::new(transport);

    let mut board = Board::new();
    board.set_name("Launch");
    board.set_closed(false);
    client.save(&mut board).await?;

    let requests = client.transport().requests().await;
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Launch", "closed": false }))
    );
    assert_eq!(board.id(), Some("b9"));
    assert_eq!(board.url(), Some("https://trello.com/b/b9"));
    assert!(!board.changes().is_dirty());
    assert!(board.changes().previous_changes().contains_key("name"));
    Ok(())
}

#[tokio::test]
async fn non_object_response_keeps_local_values() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put("/members/abc123", json!(null));
    let client = Client::new(transport);
    let mut member = jsmith();
    member.set_bio("kept");

    client.save(&mut member).await?;

    assert_eq!(member.bio(), Some("kept"));
    assert!(!member.changes().is_dirty());
    Ok(())
}

#[tokio::test]
async fn dynamic_field_access_goes_through_the_schema() -> Result<(), TrelloError> {
    let mut member = jsmith();

    member.record_mut().set("bio", "via name")?;
    assert_eq!(member.bio(), Some("via name"));
    assert!(member.changes().is_changed("bio"));

    let err = member.record_mut().set("nickname", "js").unwrap_err();
    assert!(matches!(err, TrelloError::UnknownField { .. }));
    Ok(())
}

#[tokio::test]
async fn empty_object_response_keeps_local_values() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put("/members/abc123", json!({}));
    let client = Client::new(transport);
    let mut member = jsmith();
    member.set_bio("kept");

    client.save(&mut member).await?;

    assert_eq!(member.id(), Some("abc123"));
    assert_eq!(member.username(), Some("jsmith"));
    assert_eq!(member.bio(), Some("kept"));
    assert!(member.validate().is_ok());
    assert!(!member.changes().is_dirty());
    assert!(member.changes().previous_changes().contains_key("bio"));
    Ok(())
}

#[tokio::test]
async fn undecodable_response_does_not_fail_an_accepted_save() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put(
        "/members/abc123",
        json!({ "id": "abc123", "username": 5 }),
    );
    let client = Client::new(transport);
    let mut member = jsmith();
    member.set_bio("kept");

    client.save(&mut member).await?;

    assert_eq!(member.username(), Some("jsmith"));
    assert_eq!(member.bio(), Some("kept"));
    assert!(!member.changes().is_dirty());
    assert!(member.changes().previous_changes().contains_key("bio"));
    Ok(())
}

#[tokio::test]
async fn response_for_another_resource_is_ignored() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_put(
        "/members/abc123",
        json!({ "id": "zzz999", "username": "someone" }),
    );
    let client = Client::new(transport);
    let mut member = jsmith();
    member.set_bio("kept");

    client.save(&mut member).await?;

    assert_eq!(member.id(), Some("abc123"));
    assert_eq!(member.username(), Some("jsmith"));
    Ok(())
}

#[tokio::test]
async fn blank_id_is_treated_as_new() -> Result<(), TrelloError> {
    let transport = MockTransport::new().on_post("/boards", json!({ "id": "b9", "name": "Launch" }));
    let client = Client::new(transport);

    let mut board = Board::new();
    board.set_id("  ");
    board.set_name("Launch");
    client.save(&mut board).await?;

    let requests = client.transport().requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, "/boards");
    assert_eq!(board.id(), Some("b9"));
    Ok(())
}
