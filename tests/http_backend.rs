//! End-to-end tests against a mock `/lugares` backend served by axum

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

use lugares::client::{ClientError, LIST_FAILED_MESSAGE};
use lugares::config::ApiConfig;
use lugares::controller::containers;
use lugares::view::{AdminListView, DetailView};
use lugares::{
    AlertLevel, HtmlRenderer, HttpTransport, Page, PageController, PageView, PlaceEdit,
    PlaceForm, PlaceId, PlaceTransport, ResourceClient,
};

type Db = Arc<Mutex<Vec<Value>>>;

fn id_of(place: &Value) -> String {
    match &place["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

async fn list(State(db): State<Db>) -> Json<Vec<Value>> {
    Json(db.lock().unwrap().clone())
}

async fn create(State(db): State<Db>, Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut places = db.lock().unwrap();
    let next = places.iter().filter_map(|p| p["id"].as_i64()).max().unwrap_or(0) + 1;
    body["id"] = json!(next);
    places.push(body.clone());
    (StatusCode::CREATED, Json(body))
}

async fn fetch(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    db.lock()
        .unwrap()
        .iter()
        .find(|p| id_of(p) == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn replace(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let mut places = db.lock().unwrap();
    let slot = places
        .iter_mut()
        .find(|p| id_of(p) == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = body.clone();
    Ok(Json(body))
}

async fn remove(State(db): State<Db>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    let mut places = db.lock().unwrap();
    let before = places.len();
    places.retain(|p| id_of(p) != id);
    if places.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({})))
}

fn seed() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "nome": "Mercado Central",
            "descricao": "Mercado tradicional",
            "categoria": "Compras",
            "destaque": true,
            "telefone": "111",
            "data": "2026-10-18",
            "coordenadas": { "latitude": -19.92, "longitude": -43.94 },
            "atracoes": [{ "nome": "Queijos", "descricao": "Queijos mineiros", "imagem": "q.jpg" }],
            "avaliacao": 5
        }),
        json!({
            "id": 2,
            "nome": "Lagoa da Pampulha",
            "categoria": "Natureza",
            "destaque": false,
            "coordenadas": { "latitude": -19.85, "longitude": -43.97 }
        }),
    ]
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn backend(places: Vec<Value>) -> (String, Db) {
    let db: Db = Arc::new(Mutex::new(places));
    let app = Router::new()
        .route("/lugares", get(list).post(create))
        .route("/lugares/:id", get(fetch).put(replace).delete(remove))
        .with_state(db.clone());
    (serve(app).await, db)
}

async fn failing_backend() -> String {
    let app = Router::new()
        .route(
            "/lugares",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/lugares/:id",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
    serve(app).await
}

fn api(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

fn controller(base_url: &str) -> PageController {
    let mut config = lugares::Config::default();
    config.api = api(base_url);
    PageController::from_config(&config).unwrap()
}

#[tokio::test]
async fn test_transport_crud_roundtrip() {
    let (url, db) = backend(seed()).await;
    let transport = HttpTransport::new(&api(&url)).unwrap();

    let places = transport.list().await.unwrap();
    assert_eq!(places.len(), 2);
    assert_eq!(places[0].extra["avaliacao"], json!(5));

    let found = transport.get(&PlaceId::Number(2)).await.unwrap().unwrap();
    assert_eq!(found.nome, "Lagoa da Pampulha");
    assert!(transport.get(&PlaceId::Number(9)).await.unwrap().is_none());

    transport.delete(&PlaceId::Number(2)).await.unwrap();
    assert_eq!(db.lock().unwrap().len(), 1);

    let err = transport.delete(&PlaceId::Number(2)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let url = failing_backend().await;
    let transport = HttpTransport::new(&api(&url)).unwrap();

    match transport.list().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_degrades_reads() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let transport = Arc::new(HttpTransport::new(&api(&url)).unwrap());
    let mut client = ResourceClient::with_transport(transport);

    assert!(client.list().await.is_empty());
    let notice = client.notifier().current().unwrap();
    assert_eq!(notice.message, LIST_FAILED_MESSAGE);
    assert_eq!(notice.level, AlertLevel::Danger);
}

#[tokio::test]
async fn test_index_page_renders_backend_data() {
    let (url, _db) = backend(seed()).await;
    let mut controller = controller(&url);

    let view = controller.load(&Page::resolve("index.html")).await;
    let output = controller.render(&view, &HtmlRenderer);

    let carousel = output.container(containers::CAROUSEL).unwrap();
    assert!(carousel.contains("Mercado Central"));
    assert!(!carousel.contains("Lagoa da Pampulha"));

    let listing = output.container(containers::LISTING).unwrap();
    assert!(listing.contains("Lagoa da Pampulha"));
    assert!(output.container(containers::ALERT).is_none());
}

#[tokio::test]
async fn test_detail_page_found_and_missing() {
    let (url, _db) = backend(seed()).await;
    let mut controller = controller(&url);

    let view = controller.load(&Page::resolve("detalhes.html?id=1")).await;
    let PageView::Detail { detail: DetailView::Found(detail) } = &view else {
        panic!("expected a found detail, got {:?}", view);
    };
    assert_eq!(detail.title, "Mercado Central - BH Experiências");
    assert_eq!(detail.atracoes.len(), 1);
    assert!(controller.store().is_empty());

    let view = controller.load(&Page::resolve("detalhes.html?id=42")).await;
    assert_eq!(
        view,
        PageView::Detail {
            detail: DetailView::NotFound
        }
    );
    assert!(controller.client().notifier().current().is_none());
}

#[tokio::test]
async fn test_dashboard_page_builds_widgets() {
    let (url, _db) = backend(seed()).await;
    let mut controller = controller(&url);

    let view = controller.load(&Page::Dashboard).await;
    let PageView::Dashboard(dashboard) = &view else {
        panic!("expected dashboard, got {:?}", view);
    };
    assert_eq!(dashboard.stats.total, 2);
    assert_eq!(dashboard.stats.featured, 1);
    assert_eq!(dashboard.stats.attractions, 1);
    assert_eq!(dashboard.stats.categories, 2);
    assert_eq!(dashboard.map.markers.len(), 2);

    let output = controller.render(&view, &HtmlRenderer);
    assert!(output.chart.is_some());
    assert!(output.map.is_some());
}

#[tokio::test]
async fn test_dashboard_unavailable_on_server_error() {
    let url = failing_backend().await;
    let mut controller = controller(&url);

    let view = controller.load(&Page::Dashboard).await;
    assert_eq!(view, PageView::DashboardUnavailable);

    let output = controller.render(&view, &HtmlRenderer);
    assert!(output.container(containers::STATS).is_some());
    assert!(output.chart.is_none());
}

#[tokio::test]
async fn test_admin_create_edit_delete() {
    let (url, db) = backend(seed()).await;
    let mut controller = controller(&url);
    controller.load(&Page::Admin).await;

    let form = PlaceForm {
        nome: "Feira Hippie".into(),
        descricao: "Artesanato".into(),
        conteudo: "Domingos".into(),
        categoria: "Compras".into(),
        endereco: "Av. Afonso Pena".into(),
        horarios: "Dom 7h-14h".into(),
        telefone: "".into(),
        destaque: "true".into(),
        imagem_principal: "feira.jpg".into(),
    };
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let list = controller.submit_create(form, today).await.unwrap();
    let AdminListView::Rows(rows) = list else {
        panic!("expected rows");
    };
    assert_eq!(rows.len(), 3);
    assert_eq!(db.lock().unwrap()[2]["data"], json!("2026-10-18"));
    assert!(controller.store().contains(&PlaceId::Number(3)));

    let edit = PlaceEdit {
        telefone: Some("999".into()),
        ..Default::default()
    };
    controller.save_edit(&PlaceId::Number(1), edit).await.unwrap();
    {
        let stored = db.lock().unwrap();
        assert_eq!(stored[0]["telefone"], json!("999"));
        assert_eq!(stored[0]["nome"], json!("Mercado Central"));
        assert_eq!(stored[0]["avaliacao"], json!(5));
    }

    let mut accept = |_: &str| true;
    controller
        .delete_place(&PlaceId::Number(3), &mut accept)
        .await
        .unwrap();
    assert_eq!(db.lock().unwrap().len(), 2);
    assert_eq!(controller.store().len(), 2);
}
