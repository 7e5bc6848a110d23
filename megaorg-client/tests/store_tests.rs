/// Integration tests for the HTTP stores
///
/// Each test runs the real client against an in-process axum server that
/// serves canned envelope responses, so the round trip (URL, method, body,
/// envelope unwrapping, error surfacing) is exercised end to end without a
/// backend.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use megaorg_client::{ApiClient, ApiTaskStore, ApiUserStore, ClientConfig, TaskStore, UserStore};
use megaorg_shared::models::task::{CreateTask, TaskPriority, TaskStatus};
use megaorg_shared::models::user::{CreateUser, UpdateUser};

/// Bodies received by the fake backend, in arrival order
type Received = Arc<Mutex<Vec<Value>>>;

fn sample_user(id: i64) -> Value {
    json!({
        "id": id,
        "user": "mgarcia",
        "fullname": "María García",
        "role": "user",
        "createdAt": "2025-01-10T09:00:00Z",
        "updatedAt": "2025-01-10T09:00:00Z"
    })
}

fn sample_task(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Fix login bug",
        "dueDate": "2025-03-01",
        "status": "new",
        "priority": "high",
        "assignedTo": sample_user(7),
        "createdAt": "2025-01-10T09:00:00Z",
        "updatedAt": "2025-01-10T09:00:00Z"
    })
}

async fn spawn_server() -> (SocketAddr, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/tasks",
            get(|| async { Json(json!({ "success": true, "data": [sample_task(12)] })) }).post(
                |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    Json(json!({ "success": true, "data": sample_task(12) }))
                },
            ),
        )
        .route(
            "/api/tasks/:id",
            get(|Path(id): Path<i64>| async move {
                if id == 12 {
                    Json(json!({ "success": true, "data": sample_task(12) })).into_response()
                } else if id == 13 {
                    Json(json!({
                        "success": false,
                        "data": Value::Null,
                        "message": "Tarea bloqueada"
                    }))
                    .into_response()
                } else {
                    (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "message": "Tarea no encontrada" })),
                    )
                        .into_response()
                }
            })
            .delete(|Path(_id): Path<i64>| async {
                Json(json!({ "success": true, "data": Value::Null }))
            }),
        )
        .route(
            "/api/users",
            get(|| async { Json(json!({ "success": true, "data": [sample_user(7)] })) }).post(
                |State(received): State<Received>, Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    Json(json!({ "success": true, "data": [sample_user(8)] }))
                },
            ),
        )
        .route(
            "/api/users/:id",
            put(
                |Path(_id): Path<i64>,
                 State(received): State<Received>,
                 Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    Json(json!({ "success": true, "data": [sample_user(7)] }))
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received)
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig {
        base_url: format!("http://{addr}/api"),
    };
    ApiClient::new(&config).unwrap()
}

#[tokio::test]
async fn task_list_unwraps_envelope() {
    let (addr, _) = spawn_server().await;
    let store = ApiTaskStore::new(client_for(addr));

    let tasks = store.list().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, 12);
    assert_eq!(tasks[0].status, TaskStatus::New);
    assert_eq!(tasks[0].assigned_to.id, 7);
}

#[tokio::test]
async fn task_create_sends_exact_payload() {
    let (addr, received) = spawn_server().await;
    let store = ApiTaskStore::new(client_for(addr));

    let created = store
        .create(CreateTask {
            title: "Fix login bug".to_string(),
            description: None,
            notes: None,
            due_date: "2025-03-01".to_string(),
            status: TaskStatus::New,
            priority: TaskPriority::High,
            assigned_to_id: Some(7),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 12);

    let bodies = received.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(
        body,
        &json!({
            "title": "Fix login bug",
            "dueDate": "2025-03-01",
            "status": "new",
            "priority": "high",
            "assignedToId": 7
        })
    );
    assert!(body.get("id").is_none());
}

#[tokio::test]
async fn task_get_missing_surfaces_server_message() {
    let (addr, _) = spawn_server().await;
    let store = ApiTaskStore::new(client_for(addr));

    let err = store.get(99).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Tarea no encontrada"));
}

#[tokio::test]
async fn rejected_envelope_surfaces_message() {
    let (addr, _) = spawn_server().await;
    let store = ApiTaskStore::new(client_for(addr));

    let err = store.get(13).await.unwrap_err();
    assert_eq!(err.server_message(), Some("Tarea bloqueada"));
}

#[tokio::test]
async fn task_delete_succeeds() {
    let (addr, _) = spawn_server().await;
    let store = ApiTaskStore::new(client_for(addr));

    store.delete(12).await.unwrap();
}

#[tokio::test]
async fn user_create_unwraps_first_array_element() {
    let (addr, received) = spawn_server().await;
    let store = ApiUserStore::new(client_for(addr));

    let created = store
        .create(
            CreateUser {
                user: "jlopez".to_string(),
                fullname: "Juan López".to_string(),
                password: "secreto".to_string(),
                role: "user".to_string(),
            },
            None,
        )
        .await
        .unwrap();
    assert_eq!(created.id, 8);

    let bodies = received.lock().unwrap();
    assert_eq!(bodies[0]["user"], json!("jlopez"));
    assert_eq!(bodies[0]["password"], json!("secreto"));
}

#[tokio::test]
async fn user_update_without_password_omits_field() {
    let (addr, received) = spawn_server().await;
    let store = ApiUserStore::new(client_for(addr));

    store
        .update(
            7,
            UpdateUser {
                user: Some("mgarcia".to_string()),
                fullname: Some("María García".to_string()),
                password: None,
                role: Some("admin".to_string()),
            },
            None,
        )
        .await
        .unwrap();

    let bodies = received.lock().unwrap();
    assert!(bodies[0].get("password").is_none());
    assert_eq!(bodies[0]["role"], json!("admin"));
}

/// One multipart field as the fake backend saw it: name, filename, bytes
type FormPart = (String, Option<String>, Vec<u8>);
type ReceivedParts = Arc<Mutex<Vec<Vec<FormPart>>>>;

async fn collect_parts(received: ReceivedParts, mut multipart: Multipart) {
    let mut parts = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(|f| f.to_string());
        let bytes = field.bytes().await.unwrap().to_vec();
        parts.push((name, filename, bytes));
    }
    received.lock().unwrap().push(parts);
}

/// Serves `/users` accepting multipart bodies, recording every part
async fn spawn_multipart_server() -> (SocketAddr, ReceivedParts) {
    let received: ReceivedParts = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .route(
            "/api/users",
            post(
                |State(received): State<ReceivedParts>, multipart: Multipart| async move {
                    collect_parts(received, multipart).await;
                    Json(json!({ "success": true, "data": [sample_user(8)] }))
                },
            ),
        )
        .route(
            "/api/users/:id",
            put(
                |Path(_id): Path<i64>,
                 State(received): State<ReceivedParts>,
                 multipart: Multipart| async move {
                    collect_parts(received, multipart).await;
                    Json(json!({ "success": true, "data": [sample_user(7)] }))
                },
            ),
        )
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, received)
}

fn part_named<'a>(parts: &'a [FormPart], name: &str) -> &'a FormPart {
    parts
        .iter()
        .find(|(n, _, _)| n == name)
        .unwrap_or_else(|| panic!("missing part {name}"))
}

fn write_avatar(name: &str) -> (PathBuf, &'static [u8]) {
    let bytes: &'static [u8] = b"\x89PNG fake avatar bytes";
    let path = std::env::temp_dir().join(name);
    std::fs::write(&path, bytes).unwrap();
    (path, bytes)
}

#[tokio::test]
async fn user_create_with_avatar_goes_multipart_with_equivalent_fields() {
    let (addr, received) = spawn_multipart_server().await;
    let store = ApiUserStore::new(client_for(addr));
    let (avatar_path, avatar_bytes) = write_avatar("megaorg-avatar-create.png");

    let created = store
        .create(
            CreateUser {
                user: "jlopez".to_string(),
                fullname: "Juan López".to_string(),
                password: "secreto".to_string(),
                role: "user".to_string(),
            },
            Some(avatar_path),
        )
        .await
        .unwrap();
    assert_eq!(created.id, 8);

    let requests = received.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let parts = &requests[0];

    // Field-equivalent to the JSON body
    assert_eq!(part_named(parts, "user").2, b"jlopez");
    assert_eq!(part_named(parts, "fullname").2, "Juan López".as_bytes());
    assert_eq!(part_named(parts, "password").2, b"secreto");
    assert_eq!(part_named(parts, "role").2, b"user");

    // Plus the file part
    let (_, filename, bytes) = part_named(parts, "avatar");
    assert_eq!(filename.as_deref(), Some("megaorg-avatar-create.png"));
    assert_eq!(bytes, avatar_bytes);
}

#[tokio::test]
async fn user_update_with_avatar_omits_blank_password_part() {
    let (addr, received) = spawn_multipart_server().await;
    let store = ApiUserStore::new(client_for(addr));
    let (avatar_path, avatar_bytes) = write_avatar("megaorg-avatar-update.png");

    store
        .update(
            7,
            UpdateUser {
                user: Some("mgarcia".to_string()),
                fullname: Some("María García".to_string()),
                password: None,
                role: Some("admin".to_string()),
            },
            Some(avatar_path),
        )
        .await
        .unwrap();

    let requests = received.lock().unwrap();
    let parts = &requests[0];

    assert_eq!(part_named(parts, "user").2, b"mgarcia");
    assert_eq!(part_named(parts, "role").2, b"admin");
    assert_eq!(part_named(parts, "avatar").2, avatar_bytes);
    assert!(
        parts.iter().all(|(name, _, _)| name != "password"),
        "unchanged password must not travel as a form field"
    );
}
