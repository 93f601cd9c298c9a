//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_files::Files;
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;
use volley_mix_web::{
    admit_player, balance_teams, remove_and_refill, resolve_match, storage, Gender, Roster,
    RosterId, TeamSide,
};

/// Per-roster entry: roster data + last activity time (for auto-cleanup).
struct RosterEntry {
    roster: Roster,
    last_activity: Instant,
}

/// In-memory state: many rosters by ID (sessioned). Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<RosterId, RosterEntry>>>;

/// Inactivity threshold: rosters not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Optional create body: a saved payload (browser storage export) to restore.
#[derive(Deserialize)]
struct CreateRosterBody {
    #[serde(default)]
    players: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct PlayerBody {
    name: String,
    gender: Gender,
}

#[derive(Deserialize)]
struct MatchResultBody {
    winner: TeamSide,
}

/// Path segment: roster id (e.g. /api/rosters/{id})
#[derive(Deserialize)]
struct RosterPath {
    id: RosterId,
}

/// Path segments: roster id and player id (e.g. /api/rosters/{id}/players/{player_id})
#[derive(Deserialize)]
struct RosterPlayerPath {
    id: RosterId,
    player_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "volley-mix-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Create a new roster (returns it with id; client stores id for subsequent requests).
/// An optional `players` payload restores a saved roster through the tolerant parser.
#[post("/api/rosters")]
async fn api_create_roster(state: AppState, body: Option<Json<CreateRosterBody>>) -> HttpResponse {
    let players = body
        .and_then(|b| b.into_inner().players)
        .map(storage::players_from_value)
        .unwrap_or_default();
    let roster = Roster::with_players(players);
    let id = roster.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        RosterEntry {
            roster,
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&g.get(&id).unwrap().roster)
}

/// Get a roster by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/rosters/{id}")]
async fn api_get_roster(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.roster)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    }
}

/// Admit a player: A fills first, then B, then the waiting line.
#[post("/api/rosters/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<RosterPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    if body.name.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Name is empty" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster = admit_player(&entry.roster, body.name.trim(), body.gender);
    HttpResponse::Ok().json(&entry.roster)
}

/// Admit a player with a random name and gender (demo/testing convenience).
#[post("/api/rosters/{id}/players/random")]
async fn api_add_random_player(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    const MALE_NAMES: &[&str] = &[
        "Bruno", "Carlos", "Daniel", "Eduardo", "Felipe", "Gabriel", "Henrique", "Igor", "João",
        "Lucas", "Mateus", "Pedro", "Rafael", "Thiago", "Vitor", "Arthur", "Bernardo", "Caio",
        "Davi", "Enzo",
    ];
    const FEMALE_NAMES: &[&str] = &[
        "Amanda", "Beatriz", "Camila", "Daniela", "Fernanda", "Gabriela", "Helena", "Isabela",
        "Julia", "Larissa", "Mariana", "Natália", "Patrícia", "Rafaela", "Sofia", "Alice",
        "Bianca", "Clara", "Diana", "Elisa",
    ];

    let mut rng = rand::thread_rng();
    let (gender, names) = if rng.gen_bool(0.5) {
        (Gender::Male, MALE_NAMES)
    } else {
        (Gender::Female, FEMALE_NAMES)
    };
    // Name lists are non-empty.
    let name = *names.choose(&mut rng).unwrap();

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster = admit_player(&entry.roster, name, gender);
    HttpResponse::Ok().json(&entry.roster)
}

/// Edit a player's name/gender in place (no rotation side effects).
#[put("/api/rosters/{id}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<RosterPlayerPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster.update_player(path.player_id, &body.name, body.gender);
    HttpResponse::Ok().json(&entry.roster)
}

/// Remove a player; a court vacancy is refilled from the waiting line.
#[delete("/api/rosters/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<RosterPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster = remove_and_refill(&entry.roster, path.player_id);
    HttpResponse::Ok().json(&entry.roster)
}

/// Re-balance both teams from scratch (operator action).
#[post("/api/rosters/{id}/balance")]
async fn api_balance(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster = balance_teams(&entry.roster, &mut rand::thread_rng());
    HttpResponse::Ok().json(&entry.roster)
}

/// Record a match result: winners stay, losers rotate out to the queue.
#[post("/api/rosters/{id}/result")]
async fn api_match_result(
    state: AppState,
    path: Path<RosterPath>,
    body: Json<MatchResultBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    match resolve_match(&entry.roster, body.winner) {
        Ok(next) => {
            entry.roster = next;
            HttpResponse::Ok().json(&entry.roster)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Clear the whole roster (operator reset).
#[post("/api/rosters/{id}/reset")]
async fn api_reset(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No roster" })),
    };
    entry.last_activity = Instant::now();
    entry.roster.clear();
    HttpResponse::Ok().json(&entry.roster)
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<RosterId, RosterEntry>::new()));

    // Background task: every 30 minutes, remove rosters inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive roster(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_create_roster)
            .service(api_get_roster)
            .service(api_add_player)
            .service(api_add_random_player)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_balance)
            .service(api_match_result)
            .service(api_reset)
            .service(Files::new("/static", "static").show_files_listing())
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
