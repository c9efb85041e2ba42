//! HTTP tests against an in-process mock backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use labdesk_client::{Config, LabdeskClient};
use labdesk_core::area::{
    Area, AreaCatalog, AreaSource, CreateAreaRequest, Section, UpdateAreaRequest,
};
use labdesk_core::FetchError;
use serde_json::{json, Value};
use tokio::net::TcpListener;

const NOT_FOUND_AREA: u64 = 404;
const BROKEN_AREA: u64 = 500;
const MALFORMED_AREA: u64 = 777;

struct Backend {
    areas: Mutex<Vec<Area>>,
    sections: HashMap<u64, Vec<Section>>,
    paged: bool,
    area_hits: AtomicUsize,
    section_hits: Mutex<Vec<u64>>,
    last_auth: Mutex<Option<String>>,
    last_body: Mutex<Option<Value>>,
}

impl Backend {
    fn new(areas: Vec<Area>) -> Self {
        Self {
            areas: Mutex::new(areas),
            sections: HashMap::new(),
            paged: false,
            area_hits: AtomicUsize::new(0),
            section_hits: Mutex::new(Vec::new()),
            last_auth: Mutex::new(None),
            last_body: Mutex::new(None),
        }
    }

    fn with_sections(mut self, area_id: u64, sections: Vec<Section>) -> Self {
        self.sections.insert(area_id, sections);
        self
    }

    fn paged(mut self) -> Self {
        self.paged = true;
        self
    }

    fn area_hits(&self) -> usize {
        self.area_hits.load(Ordering::SeqCst)
    }

    fn section_hits(&self) -> Vec<u64> {
        let mut hits = self.section_hits.lock().unwrap().clone();
        hits.sort();
        hits
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}

async fn list_areas(State(backend): State<Arc<Backend>>, headers: HeaderMap) -> Json<Vec<Area>> {
    backend.area_hits.fetch_add(1, Ordering::SeqCst);
    *backend.last_auth.lock().unwrap() = bearer(&headers);
    Json(backend.areas.lock().unwrap().clone())
}

async fn list_sections(
    State(backend): State<Arc<Backend>>,
    Path(area_id): Path<u64>,
) -> Response {
    backend.section_hits.lock().unwrap().push(area_id);

    match area_id {
        NOT_FOUND_AREA => StatusCode::NOT_FOUND.into_response(),
        BROKEN_AREA => (StatusCode::INTERNAL_SERVER_ERROR, "database down").into_response(),
        MALFORMED_AREA => (
            [(header::CONTENT_TYPE, "application/json")],
            r#"[{"id": "ten", "name": "x"}]"#,
        )
            .into_response(),
        _ => {
            let sections = backend
                .sections
                .get(&area_id)
                .cloned()
                .unwrap_or_default();
            if backend.paged {
                let total = sections.len();
                Json(json!({ "data": sections, "total": total, "page": 1 })).into_response()
            } else {
                Json(sections).into_response()
            }
        }
    }
}

async fn create_area(
    State(backend): State<Arc<Backend>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Area>) {
    *backend.last_body.lock().unwrap() = Some(body.clone());
    let req: CreateAreaRequest = serde_json::from_value(body).unwrap();

    let mut areas = backend.areas.lock().unwrap();
    let id = areas.iter().map(|a| a.id).max().unwrap_or(0) + 1;
    let area = Area::new(id, req.name, req.kind, req.branch_id).with_external(req.is_external);
    areas.push(area.clone());
    (StatusCode::CREATED, Json(area))
}

async fn update_area(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateAreaRequest>,
) -> Response {
    let mut areas = backend.areas.lock().unwrap();
    match areas.iter_mut().find(|a| a.id == id) {
        Some(area) => {
            if let Some(is_active) = req.is_active {
                area.is_active = is_active;
            }
            Json(area.clone()).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn spawn_backend(backend: Arc<Backend>) -> String {
    let app = Router::new()
        .route("/areas", get(list_areas).post(create_area))
        .route("/areas/{id}", put(update_area))
        .route("/areas/{id}/sections", get(list_sections))
        .with_state(backend);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn client_for(base_url: &str, token: Option<&str>) -> LabdeskClient {
    let config = Config::new(base_url)
        .unwrap()
        .with_token(token.map(String::from));
    LabdeskClient::new(&config).unwrap()
}

fn scenario_backend() -> Backend {
    Backend::new(vec![
        Area::new(1, "Hematology", "clinical", 1),
        Area::new(2, "Archive", "clinical", 1).with_active(false),
        Area::new(3, "Microbiology", "clinical", 1),
    ])
    .with_sections(
        1,
        vec![
            Section::new(10, "Coagulation"),
            Section::new(11, "Legacy").with_active(false),
        ],
    )
    .with_sections(2, vec![Section::new(20, "Storage")])
    .with_sections(3, vec![Section::new(30, "Cultures")])
}

#[tokio::test]
async fn test_list_areas_sends_bearer_token() {
    let backend = Arc::new(scenario_backend());
    let url = spawn_backend(backend.clone()).await;
    let client = client_for(&url, Some("s3cret"));

    let areas = client.list_areas().await.unwrap();

    assert_eq!(areas.len(), 3);
    assert_eq!(areas[1], Area::new(2, "Archive", "clinical", 1).with_active(false));
    assert_eq!(
        backend.last_auth.lock().unwrap().as_deref(),
        Some("Bearer s3cret")
    );
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let backend = Arc::new(scenario_backend());
    let url = spawn_backend(backend.clone()).await;
    let client = client_for(&url, None);

    client.list_areas().await.unwrap();

    assert_eq!(*backend.last_auth.lock().unwrap(), None);
}

#[tokio::test]
async fn test_list_sections_unwraps_paged_envelope() {
    let backend = Arc::new(scenario_backend().paged());
    let url = spawn_backend(backend).await;
    let client = client_for(&url, None);

    let sections = client.list_sections(1).await.unwrap();

    assert_eq!(
        sections,
        vec![
            Section::new(10, "Coagulation"),
            Section::new(11, "Legacy").with_active(false),
        ]
    );
}

#[tokio::test]
async fn test_not_found_maps_to_not_found() {
    let url = spawn_backend(Arc::new(scenario_backend())).await;
    let client = client_for(&url, None);

    let result = client.list_sections(NOT_FOUND_AREA).await;

    assert_eq!(
        result,
        Err(FetchError::NotFound {
            resource: "/areas/404/sections".to_string()
        })
    );
}

#[tokio::test]
async fn test_server_error_keeps_status_and_message() {
    let url = spawn_backend(Arc::new(scenario_backend())).await;
    let client = client_for(&url, None);

    let result = client.list_sections(BROKEN_AREA).await;

    assert_eq!(
        result,
        Err(FetchError::Status {
            status: 500,
            message: "database down".to_string()
        })
    );
}

#[tokio::test]
async fn test_malformed_payload_is_decode_error() {
    let url = spawn_backend(Arc::new(scenario_backend())).await;
    let client = client_for(&url, None);

    let result = client.list_sections(MALFORMED_AREA).await;

    assert!(matches!(result, Err(FetchError::Decode(_))));
}

#[tokio::test]
async fn test_connection_refused_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = client_for(&format!("http://{}", addr), None);

    let result = client.list_areas().await;

    assert!(matches!(result, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn test_catalog_active_sections_over_http() {
    let backend = Arc::new(scenario_backend());
    let url = spawn_backend(backend.clone()).await;
    let catalog = AreaCatalog::new(Arc::new(client_for(&url, None)));

    let sections = catalog.active_sections().await.unwrap();
    let again = catalog.active_sections().await.unwrap();

    let ids: Vec<u64> = sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 30]);
    assert_eq!(sections, again);
    assert_eq!(backend.area_hits(), 1);
    assert_eq!(backend.section_hits(), vec![1, 3]);
}

#[tokio::test]
async fn test_catalog_fails_when_one_area_fails() {
    let backend = Arc::new(
        Backend::new(vec![
            Area::new(1, "Hematology", "clinical", 1),
            Area::new(BROKEN_AREA, "Broken", "clinical", 1),
        ])
        .with_sections(1, vec![Section::new(10, "Coagulation")]),
    );
    let url = spawn_backend(backend).await;
    let catalog = AreaCatalog::new(Arc::new(client_for(&url, None)));

    let result = catalog.active_sections().await;

    assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_create_area_posts_camel_case_and_invalidates() {
    let backend = Arc::new(scenario_backend());
    let url = spawn_backend(backend.clone()).await;
    let catalog = AreaCatalog::new(Arc::new(client_for(&url, None)));

    assert_eq!(catalog.areas().await.unwrap().len(), 3);

    let created = catalog
        .create_area(&CreateAreaRequest::new("Serology", "reference", 2).external(true))
        .await
        .unwrap();
    assert_eq!(created.id, 4);
    assert!(created.is_external);

    let body = backend.last_body.lock().unwrap().clone().unwrap();
    assert_eq!(
        body,
        json!({
            "name": "Serology",
            "type": "reference",
            "branchId": 2,
            "isExternal": true
        })
    );

    let areas = catalog.areas().await.unwrap();
    assert_eq!(areas.len(), 4);
    assert_eq!(backend.area_hits(), 2);
}

#[tokio::test]
async fn test_update_area_changes_active_sections() {
    let backend = Arc::new(scenario_backend());
    let url = spawn_backend(backend.clone()).await;
    let catalog = AreaCatalog::new(Arc::new(client_for(&url, None)));

    catalog.active_sections().await.unwrap();

    let req = UpdateAreaRequest {
        is_active: Some(false),
        ..Default::default()
    };
    let updated = catalog.update_area(3, &req).await.unwrap();
    assert!(!updated.is_active);

    let ids: Vec<u64> = catalog
        .active_sections()
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(ids, vec![10]);
    assert_eq!(backend.area_hits(), 2);
}
