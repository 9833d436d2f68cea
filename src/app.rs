use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::config::AppConfig;
use crate::downloader;
use crate::loader::{self, StrainTable};
use crate::query::{self, TableQuery, TableView};
use crate::strain::{Column, StrainRecord};

/// Shared, read-only state of the dashboard.
pub struct AppState {
    table: StrainTable,
    page_size: usize,
    title: String,
}

impl AppState {
    pub fn new(table: StrainTable, page_size: usize, title: &str) -> Self {
        AppState {
            table,
            page_size,
            title: title.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct SearchQuery {
    target: Option<String>,
    column: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    records: usize,
}

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl ToString) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Load the table once; every request derives a view from it
    let table = loader::load_strains(&config.data_path)?;
    log::info!(
        "loaded {} strains from {}",
        table.len(),
        config.data_path.display()
    );

    let app_state = Arc::new(AppState::new(table, config.page_size, &config.title));
    let app = router(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the dashboard routes over the given state.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(serve_dashboard))
        .route("/health", get(health))
        .route("/api/columns", get(get_columns))
        .route("/api/strains", get(get_strains))
        .route("/api/search", get(search))
        .route("/api/export.csv", get(export_csv))
        .route("/api/export.xlsx", get(export_xlsx))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(app_state)
}

async fn serve_dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let title = escape_html(&state.title);
    Html(include_str!("./static/dashboard.html").replace("{{title}}", &title))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        records: state.table.len(),
    })
}

async fn get_columns() -> Json<Vec<&'static str>> {
    Json(Column::ALL.iter().map(|c| c.as_str()).collect())
}

async fn get_strains(
    Query(mut params): Query<TableQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<TableView> {
    params.page_size = params.page_size.or(Some(state.page_size));
    log::debug!(
        "view sort_by={:?} order={:?} search={:?} page={:?}",
        params.sort_by,
        params.order,
        params.search,
        params.page
    );
    Json(query::build_view(&state.table, &params))
}

async fn search(
    Query(params): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StrainRecord>>, ApiError> {
    let target = params.target.unwrap_or_default();
    query::search_strains(&state.table, &target, params.column.as_deref())
        .map(Json)
        .map_err(|e| {
            log::debug!("search rejected: {}", e);
            api_error(StatusCode::BAD_REQUEST, e)
        })
}

async fn export_csv(
    Query(params): Query<TableQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let records = query::select_records(&state.table, &params);
    let body = downloader::to_csv(&records)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"strains.csv\""),
        ],
        body,
    )
        .into_response())
}

async fn export_xlsx(
    Query(params): Query<TableQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let records = query::select_records(&state.table, &params);
    let body = downloader::to_xlsx(&records)
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ),
            (header::CONTENT_DISPOSITION, "attachment; filename=\"strains.xlsx\""),
        ],
        body,
    )
        .into_response())
}
