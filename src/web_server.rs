use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    serve, Form, Router,
};
use minijinja::{path_loader, Environment};
use minijinja_autoreload::AutoReloader;
use serde::Serialize;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::constants::{self, SESSION_COOKIE};
use crate::error::AdvisorError;
use crate::llm_interaction::GeminiClient;
use crate::models::RequestForm;
use crate::pipeline::{recommend, Advice, SessionState};
use crate::variant::{ApiKeySource, Variant};
use crate::view::{FormView, ResultsView};

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub default_variant: Variant,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    /// Key for the variants that read it from configuration.
    pub api_key: Option<String>,
}

struct SessionEntry {
    state: SessionState,
    touched: Instant,
}

/// Per-session state, keyed by the session cookie. The lock is only ever
/// held for a map operation, never across an await.
///
/// Only sessions with a run in flight or advice to show are kept. Idle ones
/// expire after `ttl`, and the oldest idle one makes room once `capacity` is
/// reached.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(
            Duration::from_secs(*constants::SESSION_TTL_SECS),
            *constants::MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: Uuid) -> SessionState {
        let sessions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        sessions
            .get(&id)
            .filter(|entry| entry.state.is_in_flight() || entry.touched.elapsed() < self.ttl)
            .map(|entry| entry.state.clone())
            .unwrap_or_default()
    }

    /// Applies `f` to the session and stores whatever it returns, unless
    /// that is an idle session with nothing to show.
    pub fn update<T>(&self, id: Uuid, f: impl FnOnce(SessionState) -> (SessionState, T)) -> T {
        let mut sessions = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let current = sessions
            .remove(&id)
            .map(|entry| entry.state)
            .unwrap_or_default();
        let (next, out) = f(current);
        if next.is_in_flight() || next.advice().is_some() {
            let now = Instant::now();
            self.evict(&mut sessions, now);
            sessions.insert(
                id,
                SessionEntry {
                    state: next,
                    touched: now,
                },
            );
        }
        out
    }

    /// Drops expired idle sessions, then the oldest idle ones until one more
    /// entry fits. Running sessions are never dropped.
    fn evict(&self, sessions: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        sessions.retain(|_, entry| {
            entry.state.is_in_flight() || now.duration_since(entry.touched) < self.ttl
        });
        while sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .filter(|(_, entry)| !entry.state.is_in_flight())
                .min_by_key(|(_, entry)| entry.touched)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    debug!(session = %id, "Evicting oldest idle session");
                    sessions.remove(&id);
                }
                None => break,
            }
        }
    }
}

/// Clears the session's in-flight flag if the handler is dropped mid-run
/// (client disconnect) so the session does not stay busy forever.
struct InFlight {
    sessions: SessionStore,
    id: Uuid,
    finished: bool,
}

impl InFlight {
    fn finish(mut self, outcome: Option<Advice>) -> SessionState {
        self.finished = true;
        self.sessions.update(self.id, |state| {
            let next = match outcome {
                Some(advice) => state.complete(advice),
                None => state.abort(),
            };
            (next.clone(), next)
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if !self.finished {
            warn!(session = %self.id, "Recommendation run cancelled");
            self.sessions.update(self.id, |state| (state.abort(), ()));
        }
    }
}

// Shared application state
#[derive(Clone)]
pub struct AppState {
    templates: Arc<AutoReloader>,
    client: GeminiClient,
    sessions: SessionStore,
    default_variant: Variant,
    api_key: Option<String>,
}

impl AppState {
    pub fn new(config: &ServerConfig, client: GeminiClient) -> Self {
        Self {
            templates: Arc::new(create_minijinja_env(config.templates_dir.clone())),
            client,
            sessions: SessionStore::default(),
            default_variant: config.default_variant,
            api_key: config.api_key.clone(),
        }
    }

    fn api_key_for(&self, variant: Variant, form: &RequestForm) -> String {
        match variant.api_key_source() {
            ApiKeySource::Environment => self.api_key.clone().unwrap_or_default(),
            ApiKeySource::Form => form.api_key.clone().unwrap_or_default(),
        }
    }
}

// Minijinja Environment setup
fn create_minijinja_env(templates_dir: PathBuf) -> AutoReloader {
    // Use AutoReloader for development convenience
    AutoReloader::new(move |notifier| {
        let mut env = Environment::new();
        env.set_loader(path_loader(&templates_dir));
        // Watch the templates directory for changes
        notifier.watch_path(&templates_dir, true);
        Ok(env)
    })
}

#[derive(Serialize)]
struct Flash {
    kind: &'static str,
    text: String,
}

#[derive(Serialize)]
struct VariantLink {
    code: &'static str,
    label: &'static str,
    active: bool,
}

fn render_page(
    state: &AppState,
    variant: Variant,
    session: &SessionState,
    flash: Option<Flash>,
) -> Result<Html<String>, Html<String>> {
    // Only show results produced by this variant's form.
    let results = session
        .advice()
        .filter(|advice| advice.variant == variant)
        .map(ResultsView::new);
    let form = FormView::new(variant, session.last_request());
    let variants: Vec<VariantLink> = Variant::ALL
        .into_iter()
        .map(|v| VariantLink {
            code: v.code(),
            label: v.display_name(),
            active: v == variant,
        })
        .collect();

    state
        .templates
        .acquire_env()
        .and_then(|env| {
            env.get_template("index.html").and_then(|tmpl| {
                tmpl.render(minijinja::context! {
                    variant => variant.code(),
                    texts => variant.texts(),
                    variants => variants,
                    form => form,
                    results => results,
                    flash => flash,
                })
            })
        })
        .map(Html)
        .map_err(|e| {
            error!("Failed to get or render template: {}", e);
            Html(format!("Internal Server Error: {}", e))
        })
}

fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

fn respond(status: StatusCode, id: Uuid, page: Result<Html<String>, Html<String>>) -> Response {
    let (status, body) = match page {
        Ok(body) => (status, body),
        Err(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
    };
    let mut response = (status, body).into_response();
    let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
    if let Ok(value) = HeaderValue::from_str(&cookie) {
        response.headers_mut().insert(header::SET_COOKIE, value);
    }
    response
}

fn status_for(error: &AdvisorError) -> StatusCode {
    match error {
        AdvisorError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AdvisorError::Busy => StatusCode::CONFLICT,
        _ if error.is_configuration() => StatusCode::INTERNAL_SERVER_ERROR,
        AdvisorError::Model(_) => StatusCode::BAD_GATEWAY,
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    show_variant(&state, state.default_variant, &headers)
}

async fn variant_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
) -> Response {
    match code.parse::<Variant>() {
        Ok(variant) => show_variant(&state, variant, &headers),
        Err(_) => not_found(),
    }
}

fn show_variant(state: &AppState, variant: Variant, headers: &HeaderMap) -> Response {
    let id = session_id(headers).unwrap_or_else(Uuid::new_v4);
    let session = state.sessions.get(id);
    respond(StatusCode::OK, id, render_page(state, variant, &session, None))
}

async fn recommend_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    headers: HeaderMap,
    Form(form): Form<RequestForm>,
) -> Response {
    let Ok(variant) = code.parse::<Variant>() else {
        return not_found();
    };
    let id = session_id(&headers).unwrap_or_else(Uuid::new_v4);

    let request = match form.to_request(variant) {
        Ok(request) => request,
        Err(e) => {
            info!(session = %id, error = %e, "Rejected recommendation form");
            let error = AdvisorError::from(e);
            let session = state.sessions.get(id);
            let flash = Flash {
                kind: "error",
                text: variant.error_message(&error),
            };
            return respond(
                status_for(&error),
                id,
                render_page(&state, variant, &session, Some(flash)),
            );
        }
    };

    let begun = state.sessions.update(id, |session| match session.begin(&request) {
        Ok(next) => (next, Ok(())),
        Err((current, e)) => (current, Err(e)),
    });
    if let Err(error) = begun {
        warn!(session = %id, "Resubmission while a run is in flight");
        let flash = Flash {
            kind: "error",
            text: variant.error_message(&error),
        };
        let session = state.sessions.get(id);
        return respond(
            status_for(&error),
            id,
            render_page(&state, variant, &session, Some(flash)),
        );
    }
    let guard = InFlight {
        sessions: state.sessions.clone(),
        id,
        finished: false,
    };

    let api_key = state.api_key_for(variant, &form);
    match recommend(&state.client, variant, &api_key, request).await {
        Ok(advice) => {
            let session = guard.finish(Some(advice));
            let flash = Flash {
                kind: "success",
                text: variant.texts().success.to_string(),
            };
            respond(
                StatusCode::OK,
                id,
                render_page(&state, variant, &session, Some(flash)),
            )
        }
        Err(error) => {
            error!(session = %id, error = %error, "Recommendation run failed");
            let session = guard.finish(None);
            let flash = Flash {
                kind: "error",
                text: variant.error_message(&error),
            };
            respond(
                status_for(&error),
                id,
                render_page(&state, variant, &session, Some(flash)),
            )
        }
    }
}

async fn health_handler() -> &'static str {
    "ok"
}

/// Builds the application router; split out so tests can drive it directly.
pub fn router(state: AppState, static_dir: PathBuf) -> Router {
    // Serve static files from the configured directory
    let static_files_service = ServeDir::new(static_dir).not_found_service(tower::service_fn(
        |_req: Request| async { Ok::<_, std::convert::Infallible>(not_found()) },
    ));

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/:variant", get(variant_handler))
        .route("/:variant/recommend", post(recommend_handler))
        // Static files must be nested under a path or they would conflict
        // with the variant routes.
        .nest_service("/static", static_files_service)
        .with_state(state)
        .layer(TraceLayer::new_for_http()) // Add request logging
}

pub async fn start_web_server(config: ServerConfig, client: GeminiClient) -> Result<()> {
    if config.api_key.as_deref().map_or(true, |key| key.trim().is_empty()) {
        warn!("GEMINI_API_KEY is not set; only the sidebar variant can reach the model");
    }
    let state = AppState::new(&config, client);
    let app = router(state, config.static_dir.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Web server listening on http://{}", addr);

    // Bind using tokio::net::TcpListener
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind to address {}", addr))?;

    // Use axum::serve to run the application
    serve(listener, app.into_make_service())
        .await
        .context("Web server failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_read_from_cookie_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {SESSION_COOKIE}={id}")).unwrap(),
        );
        assert_eq!(session_id(&headers), Some(id));
    }

    #[test]
    fn test_garbage_session_cookie_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("advisor_session=not-a-uuid"),
        );
        assert_eq!(session_id(&headers), None);
        assert_eq!(session_id(&HeaderMap::new()), None);
    }

    #[test]
    fn test_status_mapping() {
        use crate::error::{ModelError, RequestError};
        assert_eq!(
            status_for(&AdvisorError::from(RequestError::EmptyLocation)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(status_for(&AdvisorError::Busy), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&AdvisorError::from(ModelError::MissingApiKey)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&AdvisorError::from(ModelError::AllModelsFailed(vec![]))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_dropped_run_clears_in_flight_flag() {
        let sessions = SessionStore::default();
        let id = Uuid::new_v4();
        let request = crate::models::RecommendationRequest::new(
            Variant::English,
            crate::models::Month::May,
            "Goa",
            10_000,
            crate::models::ExperienceLevel::Novice,
            crate::models::FarmSize::Small,
            false,
        )
        .unwrap();
        sessions.update(id, |s| (s.begin(&request).unwrap(), ()));
        assert!(sessions.get(id).is_in_flight());

        drop(InFlight {
            sessions: sessions.clone(),
            id,
            finished: false,
        });
        assert!(!sessions.get(id).is_in_flight());
    }
    fn goa() -> crate::models::RecommendationRequest {
        crate::models::RecommendationRequest::new(
            Variant::English,
            crate::models::Month::May,
            "Goa",
            10_000,
            crate::models::ExperienceLevel::Novice,
            crate::models::FarmSize::Small,
            false,
        )
        .unwrap()
    }

    fn advice() -> Advice {
        let request = goa();
        Advice {
            variant: Variant::English,
            set: crate::extract::fallback_set("raw", &request, Variant::English),
            request,
            model: "gemini-1.5-flash".to_string(),
            source: crate::extract::ExtractionSource::Fallback,
        }
    }

    fn store_completed(sessions: &SessionStore, id: Uuid) {
        sessions.update(id, |s| (s.begin(&goa()).unwrap().complete(advice()), ()));
    }

    #[tokio::test]
    async fn test_cookieless_failed_posts_leave_no_sessions() {
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let config = ServerConfig {
            port: 0,
            default_variant: Variant::English,
            templates_dir: manifest.join("templates"),
            static_dir: manifest.join("static"),
            api_key: None,
        };
        let client = GeminiClient::new(crate::llm_interaction::ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            models: vec!["gemini-1.5-flash".to_string()],
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        let state = AppState::new(&config, client);
        let sessions = state.sessions.clone();
        let server = axum_test::TestServer::new(router(state, config.static_dir.clone())).unwrap();

        let form = RequestForm {
            location: "Goa".to_string(),
            ..RequestForm::default()
        };
        for _ in 0..200 {
            let response = server.post("/en/recommend").form(&form).await;
            assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_session_store_is_capped() {
        let sessions = SessionStore::with_limits(Duration::from_secs(3600), 3);
        let ids: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            store_completed(&sessions, *id);
        }
        assert_eq!(sessions.len(), 3);
        assert!(sessions.get(ids[9]).advice().is_some());
    }

    #[test]
    fn test_expired_sessions_are_dropped_on_insert() {
        let sessions = SessionStore::with_limits(Duration::ZERO, 100);
        let first = Uuid::new_v4();
        store_completed(&sessions, first);
        store_completed(&sessions, Uuid::new_v4());
        assert_eq!(sessions.len(), 1);
        assert!(sessions.get(first).advice().is_none());
    }

    #[test]
    fn test_running_sessions_are_never_evicted() {
        let sessions = SessionStore::with_limits(Duration::ZERO, 1);
        let running = Uuid::new_v4();
        sessions.update(running, |s| (s.begin(&goa()).unwrap(), ()));
        store_completed(&sessions, Uuid::new_v4());
        assert_eq!(sessions.len(), 2);
        assert!(sessions.get(running).is_in_flight());
    }
}

