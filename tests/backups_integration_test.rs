use planetscale_client::{
    AuthenticatedTransport, CreateBackupRequest, CreateBackupResponse, DeleteBackupResponse,
    GetBackupResponse, ListBackupsResponse, NoAuth, OperationResponse, PlanetScaleClient,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const BACKUPS: &str = "/v1/organizations/acme/databases/db1/branches/main/backups";

/// Helper to create a test client against a mock server
async fn create_test_client() -> (MockServer, PlanetScaleClient) {
    let _ = env_logger::try_init();

    let server = MockServer::start().await;
    let transport = AuthenticatedTransport::new(NoAuth).expect("Failed to create transport");
    let client = PlanetScaleClient::with_transport(transport, Some(&format!("{}/v1", server.uri())))
        .expect("Failed to create client");
    (server, client)
}

/// Test deleting a missing backup with a bodiless 404
#[tokio::test]
async fn test_delete_backup_not_found_empty_body() {
    let (server, client) = create_test_client().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/bk-missing", BACKUPS)))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .backups()
        .delete_backup("acme", "db1", "main", "bk-missing")
        .await
        .expect("A documented 404 is not a failure");

    assert_eq!(resp.status(), 404);
    match resp {
        DeleteBackupResponse::NotFound(body) => {
            assert_eq!(body.code, "");
            assert_eq!(body.message, "");
        }
        other => panic!("Expected 404 response, got {:?}", other),
    }
}

/// Test deleting a backup
#[tokio::test]
async fn test_delete_backup() {
    let (server, client) = create_test_client().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/bk1", BACKUPS)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client
        .backups()
        .delete_backup("acme", "db1", "main", "bk1")
        .await
        .expect("Failed to delete backup");
    assert!(matches!(resp, DeleteBackupResponse::NoContent(_)));
}

/// Test creating a backup with retention
#[tokio::test]
async fn test_create_backup() {
    let (server, client) = create_test_client().await;

    Mock::given(method("POST"))
        .and(path(BACKUPS))
        .and(body_json(json!({
            "name": "before-migration",
            "retention_unit": "day",
            "retention_value": 7.0
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "bk2",
            "name": "before-migration",
            "state": "pending",
            "size": 0,
            "required": false,
            "expires_at": "2024-01-08T00:00:00Z",
            "actor": {"id": "u1", "display_name": "Ada", "avatar_url": "https://a.test/u1"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateBackupRequest {
        name: Some("before-migration".to_string()),
        retention_unit: Some("day".to_string()),
        retention_value: Some(7.0),
    };
    let resp = client
        .backups()
        .create_backup("acme", "db1", "main", &request)
        .await
        .expect("Failed to create backup");

    match resp {
        CreateBackupResponse::Created(backup) => {
            assert_eq!(backup.state, "pending");
            assert_eq!(backup.expires_at, "2024-01-08T00:00:00Z");
            assert_eq!(backup.actor.unwrap().display_name, "Ada");
            assert_eq!(backup.completed_at, None);
        }
        other => panic!("Expected 201 response, got {:?}", other),
    }
}

/// Test listing backups with a policy attached
#[tokio::test]
async fn test_list_backups() {
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path(BACKUPS))
        .and(query_param("per_page", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "current_page": 1,
            "next_page": 2,
            "data": [{
                "id": "bk1",
                "state": "success",
                "size": 1048576,
                "backup_policy": {
                    "id": "p1",
                    "frequency_unit": "hour",
                    "frequency_value": 12,
                    "retention_unit": "day",
                    "retention_value": 2
                }
            }]
        })))
        .mount(&server)
        .await;

    let resp = client
        .backups()
        .list_backups("acme", "db1", "main", None, Some(100))
        .await
        .expect("Failed to list backups");

    match resp {
        ListBackupsResponse::Ok(page) => {
            assert_eq!(page.next_page, Some(2.0));
            let backup = &page.data[0];
            assert_eq!(backup.size, 1048576.0);
            let policy = backup.backup_policy.as_ref().unwrap();
            assert_eq!(policy.frequency_value, 12.0);
            assert_eq!(policy.retention_unit, "day");
        }
        other => panic!("Expected 200 response, got {:?}", other),
    }
}

/// Test getting a backup answered with 500
#[tokio::test]
async fn test_get_backup_server_error() {
    let (server, client) = create_test_client().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/bk1", BACKUPS)))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "internal",
            "message": "Internal Server Error"
        })))
        .mount(&server)
        .await;

    let resp = client
        .backups()
        .get_backup("acme", "db1", "main", "bk1")
        .await
        .expect("A documented 500 is not a failure");

    match resp {
        GetBackupResponse::InternalServerError(body) => assert_eq!(body.code, "internal"),
        other => panic!("Expected 500 response, got {:?}", other),
    }
}
