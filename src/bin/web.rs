//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, REVEAL_DELAY_MS,
//! EDIT_STORE_DIR, SESSION_TTL_HOURS, ROSTER_MODE.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, post, put,
    web::{self, Bytes, Data, Json, Path, Query},
    App, HttpRequest, HttpResponse, HttpServer, Responder,
};
use mock_auction_web::{
    begin_selection, cancel_selection, draw_log_csv, edit_details, edit_photo, enter_auction,
    finish_reveal, flat_roster, load_or_empty, persist_in_background, reset_auction,
    reveal_identity, round_roster, roster_summary, select_round, snapshot, submit_number,
    submit_text, suggest_number, AuctionError, AuctionId, AuctionSession, Config, DetailsForm,
    EditRecord, EditStore, JsonFileStore, Phase, PhotoSource, RosterMode, Round, Unprovisioned,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Per-auction entry: session snapshot + last activity time (for auto-cleanup).
struct AuctionEntry {
    session: AuctionSession,
    last_activity: Instant,
    /// Bumped by every accepted draw; a reveal only completes if its ticket is still current.
    reveal_ticket: u64,
}

struct AppState {
    auctions: RwLock<HashMap<AuctionId, AuctionEntry>>,
    store: Arc<dyn EditStore>,
    config: Config,
}

type State = Data<AppState>;

fn app_state(config: Config, store: Arc<dyn EditStore>) -> State {
    Data::new(AppState {
        auctions: RwLock::new(HashMap::new()),
        store,
        config,
    })
}

/// Cookie-session key holding the most recently created auction.
const CURRENT_AUCTION_KEY: &str = "auction_id";

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateAuctionBody {
    mode: Option<RosterMode>,
}

#[derive(Deserialize)]
struct SelectRoundBody {
    round: Round,
}

/// Number as typed: JSON number or raw text from the input box.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberInput {
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
struct DrawBody {
    number: NumberInput,
}

#[derive(Deserialize)]
struct PhotoUrlBody {
    url: String,
}

#[derive(Deserialize)]
struct SummaryQuery {
    round: Option<Round>,
}

/// Path segment: auction id (e.g. /api/auctions/{id})
#[derive(Deserialize)]
struct AuctionPath {
    id: AuctionId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No auction" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

fn auction_error(e: AuctionError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        AuctionError::RevealInProgress | AuctionError::Complete => {
            HttpResponse::Conflict().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

/// Apply one action to a stored auction and keep the new snapshot. Refreshes last_activity.
fn update_auction<F>(
    state: &AppState,
    id: AuctionId,
    action: F,
) -> Result<AuctionSession, HttpResponse>
where
    F: FnOnce(&AuctionSession) -> Result<AuctionSession, AuctionError>,
{
    let mut g = state.auctions.write().map_err(|_| lock_error())?;
    let entry = g.get_mut(&id).ok_or_else(not_found)?;
    entry.last_activity = Instant::now();
    let next = action(&entry.session).map_err(auction_error)?;
    entry.session = next.clone();
    Ok(next)
}

/// Like `update_auction` for actions that cannot fail; hands back the edit to persist.
fn edit_auction<F>(state: &AppState, id: AuctionId, edit: F) -> HttpResponse
where
    F: FnOnce(&AuctionSession) -> (AuctionSession, Option<EditRecord>),
{
    let mut record = None;
    let result = update_auction(state, id, |s| {
        let (next, r) = edit(s);
        record = r;
        Ok(next)
    });
    match result {
        Ok(session) => {
            if let Some(record) = record {
                persist_in_background(state.store.clone(), record);
            }
            HttpResponse::Ok().json(snapshot(&session))
        }
        Err(resp) => resp,
    }
}

fn respond<F>(state: &AppState, id: AuctionId, action: F) -> HttpResponse
where
    F: FnOnce(&AuctionSession) -> Result<AuctionSession, AuctionError>,
{
    match update_auction(state, id, action) {
        Ok(session) => HttpResponse::Ok().json(snapshot(&session)),
        Err(resp) => resp,
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "mock-auction-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[get("/placeholder.svg")]
async fn placeholder() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("image/svg+xml")
        .body(include_str!("../../static/placeholder.svg"))
}

/// Create a new auction at the intro screen, seeded with saved edits when the store has any.
#[post("/api/auctions")]
async fn api_create_auction(
    state: State,
    cookie: Session,
    body: Option<Json<CreateAuctionBody>>,
) -> HttpResponse {
    let mode = body
        .and_then(|b| b.mode)
        .unwrap_or(state.config.default_mode);
    let store = state.store.clone();
    let edits = web::block(move || load_or_empty(store.as_ref()))
        .await
        .unwrap_or_default();
    let session = AuctionSession::new(mode).with_edits(edits);
    let id = session.id;
    let view = snapshot(&session);
    {
        let mut g = match state.auctions.write() {
            Ok(guard) => guard,
            Err(_) => return lock_error(),
        };
        g.insert(
            id,
            AuctionEntry {
                session,
                last_activity: Instant::now(),
                reveal_ticket: 0,
            },
        );
    }
    if let Err(e) = cookie.insert(CURRENT_AUCTION_KEY, id) {
        log::warn!("Could not remember auction {} in cookie: {}", id, e);
    }
    log::info!("Created auction {} ({:?} mode)", id, mode);
    HttpResponse::Ok().json(view)
}

/// The auction remembered in this browser's cookie (404 if none or expired).
#[get("/api/auctions/current")]
async fn api_current_auction(state: State, cookie: Session) -> HttpResponse {
    match cookie.get::<AuctionId>(CURRENT_AUCTION_KEY) {
        Ok(Some(id)) => respond(&state, id, |s| Ok(s.clone())),
        _ => not_found(),
    }
}

/// Get an auction by id. Touching it refreshes last_activity.
#[get("/api/auctions/{id}")]
async fn api_get_auction(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, |s| Ok(s.clone()))
}

/// Leave the intro screen.
#[post("/api/auctions/{id}/enter")]
async fn api_enter(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, enter_auction)
}

/// Pick a round (round mode).
#[post("/api/auctions/{id}/round")]
async fn api_select_round(
    state: State,
    path: Path<AuctionPath>,
    body: Json<SelectRoundBody>,
) -> HttpResponse {
    respond(&state, path.id, |s| select_round(s, body.round))
}

/// Open number input.
#[post("/api/auctions/{id}/begin")]
async fn api_begin(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, begin_selection)
}

/// Close number input without drawing.
#[post("/api/auctions/{id}/cancel")]
async fn api_cancel(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, cancel_selection)
}

/// Accept the drawn number (→ `Revealing`) and hand out the ticket of the reveal it starts.
fn start_reveal(state: &AppState, id: AuctionId, input: &NumberInput) -> Result<u64, HttpResponse> {
    let mut g = state.auctions.write().map_err(|_| lock_error())?;
    let entry = g.get_mut(&id).ok_or_else(not_found)?;
    entry.last_activity = Instant::now();
    let next = match input {
        NumberInput::Int(n) => submit_number(&entry.session, *n),
        NumberInput::Text(t) => submit_text(&entry.session, t),
    }
    .map_err(auction_error)?;
    entry.session = next;
    entry.reveal_ticket += 1;
    Ok(entry.reveal_ticket)
}

/// Show the card behind `ticket`. If a reset or a newer draw came first, the board is
/// returned as it is.
fn complete_reveal(state: &AppState, id: AuctionId, ticket: u64) -> HttpResponse {
    let mut g = match state.auctions.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let Some(entry) = g.get_mut(&id) else {
        return not_found();
    };
    if entry.reveal_ticket == ticket && entry.session.phase == Phase::Revealing {
        match finish_reveal(&entry.session) {
            Ok(next) => entry.session = next,
            Err(e) => return auction_error(e),
        }
    }
    HttpResponse::Ok().json(snapshot(&entry.session))
}

/// Draw a number: validate, hold the suspense delay without the lock, then show the card.
/// The delay and the final transition run on a detached task, so they complete even when
/// the client goes away mid-reveal.
#[post("/api/auctions/{id}/draw")]
async fn api_draw(state: State, path: Path<AuctionPath>, body: Json<DrawBody>) -> HttpResponse {
    let id = path.id;
    let ticket = match start_reveal(&state, id, &body.number) {
        Ok(ticket) => ticket,
        Err(resp) => return resp,
    };
    let finisher = state.clone();
    let reveal = actix_web::rt::spawn(async move {
        let delay = finisher.config.reveal_delay;
        if !delay.is_zero() {
            actix_web::rt::time::sleep(delay).await;
        }
        complete_reveal(&finisher, id, ticket)
    });
    match reveal.await {
        Ok(resp) => resp,
        Err(e) => {
            log::error!("Reveal task for auction {} failed: {}", id, e);
            HttpResponse::InternalServerError().body("reveal failed")
        }
    }
}

/// Reveal the identity of the hidden player on the board.
#[post("/api/auctions/{id}/reveal-identity")]
async fn api_reveal_identity(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, reveal_identity)
}

/// Reset draw state (round mode returns to round selection).
#[post("/api/auctions/{id}/reset")]
async fn api_reset(state: State, path: Path<AuctionPath>) -> HttpResponse {
    respond(&state, path.id, |s| Ok(reset_auction(s)))
}

/// Replace the current player's portrait with an image URL.
#[put("/api/auctions/{id}/photo")]
async fn api_photo_url(
    state: State,
    path: Path<AuctionPath>,
    body: Json<PhotoUrlBody>,
) -> HttpResponse {
    let source = PhotoSource::Url(body.into_inner().url);
    edit_auction(&state, path.id, move |s| edit_photo(s, source))
}

/// Replace the current player's portrait with an uploaded file (raw body, image content type).
#[put("/api/auctions/{id}/photo/upload")]
async fn api_photo_upload(
    state: State,
    path: Path<AuctionPath>,
    req: HttpRequest,
    body: Bytes,
) -> HttpResponse {
    let content_type = req
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let source = PhotoSource::Upload {
        content_type,
        bytes: body.to_vec(),
    };
    edit_auction(&state, path.id, move |s| edit_photo(s, source))
}

/// Overlay edited details on the current player.
#[put("/api/auctions/{id}/details")]
async fn api_details(
    state: State,
    path: Path<AuctionPath>,
    body: Json<DetailsForm>,
) -> HttpResponse {
    edit_auction(&state, path.id, |s| edit_details(s, &body))
}

/// Suggest a random unused number (does not draw).
#[get("/api/auctions/{id}/lucky-number")]
async fn api_lucky_number(state: State, path: Path<AuctionPath>) -> HttpResponse {
    match update_auction(&state, path.id, |s| Ok(s.clone())) {
        Ok(session) => {
            let number = suggest_number(&session, &mut rand::thread_rng());
            HttpResponse::Ok().json(serde_json::json!({ "number": number }))
        }
        Err(resp) => resp,
    }
}

/// Draw log as CSV.
#[get("/api/auctions/{id}/draws.csv")]
async fn api_draws_csv(state: State, path: Path<AuctionPath>) -> HttpResponse {
    let session = match update_auction(&state, path.id, |s| Ok(s.clone())) {
        Ok(session) => session,
        Err(resp) => return resp,
    };
    match draw_log_csv(&session) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Card counts for the intro screen: one round, or the flat roster when no round is given.
#[get("/api/roster/summary")]
async fn api_roster_summary(query: Query<SummaryQuery>) -> HttpResponse {
    let roster = match query.round {
        Some(round) => round_roster(round),
        None => flat_roster(),
    };
    HttpResponse::Ok().json(roster_summary(&roster))
}

fn edit_store(config: &Config) -> Arc<dyn EditStore> {
    match &config.edit_store_dir {
        Some(dir) => {
            log::info!("Saving edits under {}", dir.display());
            Arc::new(JsonFileStore::new(dir.clone()))
        }
        None => {
            log::info!("EDIT_STORE_DIR not set; edits stay in memory");
            Arc::new(Unprovisioned)
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let store = edit_store(&config);
    let state = app_state(config, store);

    // Background task: every 30 minutes, remove auctions idle longer than the TTL
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let ttl = state_cleanup.config.session_ttl;
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.auctions.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive auction(s)", removed);
            }
        }
    });

    let cookie_key = Key::generate();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                cookie_key.clone(),
            ))
            .configure(routes)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

/// Index page and the REST API.
fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(serve_index_async))
        .service(api_health)
        .service(favicon)
        .service(placeholder)
        .service(api_create_auction)
        .service(api_current_auction)
        .service(api_get_auction)
        .service(api_enter)
        .service(api_select_round)
        .service(api_begin)
        .service(api_cancel)
        .service(api_draw)
        .service(api_reveal_identity)
        .service(api_reset)
        .service(api_photo_url)
        .service(api_photo_upload)
        .service(api_details)
        .service(api_lucky_number)
        .service(api_draws_csv)
        .service(api_roster_summary);
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
