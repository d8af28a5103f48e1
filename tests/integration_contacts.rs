mod common;

use axum::http::StatusCode;
use common::{
    MockBehavior, auth_cookie, get, post_json, send_json, setup_offline_app, setup_test_app,
    spawn_mock_upstream,
};
use serde_json::{Value, json};

#[tokio::test]
async fn test_contacts_get_display_names() {
    let (url, recorded) = spawn_mock_upstream(MockBehavior::default()).await;
    let app = setup_test_app(&url);

    let (status, body) = send_json(app, get("/api/contacts", Some(&auth_cookie()))).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<Value> = body["contacts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].clone())
        .collect();
    assert_eq!(
        names,
        vec![
            json!("Jane Realtor"),
            json!("John Smith"),
            json!("Solo"),
            Value::Null
        ]
    );

    // Upstream fields survive untouched
    assert_eq!(body["contacts"][0]["firstName"], "Jane");
    assert_eq!(body["contacts"][3]["email"], "nobody@example.com");
    assert_eq!(body["meta"]["total"], 4);

    let recorded = recorded.lock().unwrap();
    assert_eq!(
        recorded.authorization,
        vec![Some("Bearer test-api-key".to_string())]
    );
}

#[tokio::test]
async fn test_odd_contact_records_do_not_fail_the_listing() {
    let (url, _) = spawn_mock_upstream(MockBehavior {
        contacts_body: json!({
            "contacts": [
                { "id": 17, "firstName": 42, "lastName": "Doe" },
                { "id": "c9", "contactName": null, "firstName": { "given": "Ann" } },
                "garbage"
            ],
            "meta": { "total": 3 }
        }),
        ..Default::default()
    })
    .await;
    let app = setup_test_app(&url);

    let (status, body) = send_json(app, get("/api/contacts", Some(&auth_cookie()))).await;

    assert_eq!(status, StatusCode::OK);
    let contacts = body["contacts"].as_array().unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0]["id"], "17");
    assert_eq!(contacts[0]["name"], "42 Doe");
    assert_eq!(contacts[1]["name"], Value::Null);
    assert_eq!(body["meta"]["total"], 3);
}

#[tokio::test]
async fn test_force_refresh_still_fetches_without_cache() {
    let (url, recorded) = spawn_mock_upstream(MockBehavior::default()).await;

    for uri in ["/api/contacts?forceRefresh=true", "/api/contacts?forceRefresh=1"] {
        let app = setup_test_app(&url);
        let (status, _) = send_json(app, get(uri, Some(&auth_cookie()))).await;
        assert_eq!(status, StatusCode::OK);
    }

    assert_eq!(recorded.lock().unwrap().authorization.len(), 2);
}

#[tokio::test]
async fn test_backend_status_is_passed_through() {
    let (url, _) = spawn_mock_upstream(MockBehavior {
        contacts_status: StatusCode::UNAUTHORIZED,
        ..Default::default()
    })
    .await;
    let app = setup_test_app(&url);

    let (status, body) = send_json(app, get("/api/contacts", Some(&auth_cookie()))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid API key" }));
}

#[tokio::test]
async fn test_unreachable_backend_is_500() {
    let app = setup_offline_app();

    let (status, body) = send_json(app, get("/api/contacts", Some(&auth_cookie()))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch contacts" }));
}

#[tokio::test]
async fn test_add_lead_forwards_to_backend() {
    let (url, recorded) = spawn_mock_upstream(MockBehavior::default()).await;
    let app = setup_test_app(&url);

    let lead = json!({
        "name": "Carlos Rodriguez",
        "email": "carlos@example.com",
        "phone": "(305) 555-0199",
        "source": "Website"
    });
    let (status, body) = send_json(
        app,
        post_json("/api/contacts/add-lead", Some(&auth_cookie()), &lead),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["contact"]["id"], "new-contact-1");
    assert_eq!(body["contact"]["name"], "Carlos Rodriguez");

    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.created.len(), 1);
    assert_eq!(recorded.created[0]["email"], "carlos@example.com");
    assert_eq!(recorded.created[0]["source"], "Website");
}

#[tokio::test]
async fn test_add_lead_validation() {
    let (url, recorded) = spawn_mock_upstream(MockBehavior::default()).await;

    let app = setup_test_app(&url);
    let (status, body) = send_json(
        app,
        post_json(
            "/api/contacts/add-lead",
            Some(&auth_cookie()),
            &json!({ "email": "carlos@example.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "name is required");

    let app = setup_test_app(&url);
    let (status, body) = send_json(
        app,
        post_json(
            "/api/contacts/add-lead",
            Some(&auth_cookie()),
            &json!({ "name": "Carlos", "email": "not-an-email" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "email must be a valid email address");

    assert!(recorded.lock().unwrap().created.is_empty());
}

#[tokio::test]
async fn test_add_lead_backend_rejection_is_passed_through() {
    let (url, _) = spawn_mock_upstream(MockBehavior {
        create_status: StatusCode::CONFLICT,
        ..Default::default()
    })
    .await;
    let app = setup_test_app(&url);

    let (status, body) = send_json(
        app,
        post_json(
            "/api/contacts/add-lead",
            Some(&auth_cookie()),
            &json!({ "name": "Carlos" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Duplicate contact");
}

#[tokio::test]
async fn test_add_lead_requires_session() {
    let app = setup_offline_app();
    let (status, body) = send_json(
        app,
        post_json("/api/contacts/add-lead", None, &json!({ "name": "Carlos" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentication required");
}
