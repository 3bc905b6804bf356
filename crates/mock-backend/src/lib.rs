//! In-memory stand-in for the GatchaLife backend.
//!
//! Serves the same routes, payload shapes, status codes, and error bodies as
//! the live service so `gatcha-api` and `gatcha-query` can be exercised
//! end-to-end without a database. State lives in a [`MockDb`] behind an
//! `RwLock`; every server starts from the deterministic [`MockDb::seeded`]
//! fixture unless handed something else.
//!
//! Two entry points:
//! - [`app`] builds the router for in-process testing (`tower::oneshot`).
//! - [`serve`] drives it on a TCP listener for HTTP-level tests and the
//!   standalone binary.

pub mod error;
pub mod handlers;
pub mod state;

use axum::http::HeaderName;
use axum::routing::{get, post};
use axum::Router;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub use state::{MockDb, SharedDb};

use handlers::{catalog, characters, gamification, ticktick};

/// Build the full mock router.
///
/// Paths carry the backend's trailing slashes; requests without them 404,
/// which keeps client path handling honest.
///
/// ```text
/// /series/                                    list, create
/// /series/{id}/                               get, update, delete
///
/// /characters/                                list (?series=, ?search=), create
/// /characters/{id}/                           get, update (JSON or multipart), delete
/// /characters/{id}/regenerate_from_wiki/      rebuild profile from wiki text (POST)
/// /characters/{id}/create-variants/           derive variants (POST)
///
/// /variants/                                  list (?character=), create
/// /variants/{id}/                             get, update, delete
/// /variant-images/                            upload (multipart POST)
/// /variant-images/{id}/                       delete
///
/// /generated-images/                          list (?search=)
/// /generated-images/{id}/                     get
/// /rarities/                                  list (?search=)
/// /rarities/{id}/                             get
/// /styles/                                    list
/// /styles/{id}/                               get
/// /themes/                                    list
/// /themes/{id}/                               get
///
/// /gamification/player/                       list
/// /gamification/player/{id}/                  get, update (echoes server state)
/// /gamification/quests/                       list
/// /gamification/quests/{id}/                  get
/// /gamification/quests/{id}/claim/            claim reward (POST)
/// /gamification/collection/                   list
/// /gamification/collection/{id}/              get
/// /gamification/collection/{id}/reroll_image/ regenerate card image (POST)
/// /gamification/gatcha/roll/                  spend coins, draw a card (POST)
///
/// /ticktick/stats/                            reward stats
/// /ticktick/history/                          processed-task history
/// /ticktick/progression/                      reward timeline
/// /ticktick/manual_task/                      reward a manual completion (POST)
/// /ticktick/webhook/                          probe (GET)
/// ```
pub fn app(db: SharedDb) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .route(
            "/series/",
            get(characters::list_series).post(characters::create_series),
        )
        .route(
            "/series/{id}/",
            get(characters::get_series)
                .patch(characters::update_series)
                .delete(characters::delete_series),
        )
        .route(
            "/characters/",
            get(characters::list_characters).post(characters::create_character),
        )
        .route(
            "/characters/{id}/",
            get(characters::get_character)
                .patch(characters::update_character)
                .delete(characters::delete_character),
        )
        .route(
            "/characters/{id}/regenerate_from_wiki/",
            post(characters::regenerate_from_wiki),
        )
        .route(
            "/characters/{id}/create-variants/",
            post(characters::create_variants),
        )
        .route(
            "/variants/",
            get(characters::list_variants).post(characters::create_variant),
        )
        .route(
            "/variants/{id}/",
            get(characters::get_variant)
                .patch(characters::update_variant)
                .delete(characters::delete_variant),
        )
        .route("/variant-images/", post(characters::upload_variant_image))
        .route(
            "/variant-images/{id}/",
            axum::routing::delete(characters::delete_variant_image),
        )
        .route("/generated-images/", get(catalog::list_generated_images))
        .route("/generated-images/{id}/", get(catalog::get_generated_image))
        .route("/rarities/", get(catalog::list_rarities))
        .route("/rarities/{id}/", get(catalog::get_rarity))
        .route("/styles/", get(catalog::list_styles))
        .route("/styles/{id}/", get(catalog::get_style))
        .route("/themes/", get(catalog::list_themes))
        .route("/themes/{id}/", get(catalog::get_theme))
        .route("/gamification/player/", get(gamification::list_players))
        .route(
            "/gamification/player/{id}/",
            get(gamification::get_player).patch(gamification::update_player),
        )
        .route("/gamification/quests/", get(gamification::list_quests))
        .route("/gamification/quests/{id}/", get(gamification::get_quest))
        .route(
            "/gamification/quests/{id}/claim/",
            post(gamification::claim_quest),
        )
        .route(
            "/gamification/collection/",
            get(gamification::list_collection),
        )
        .route(
            "/gamification/collection/{id}/",
            get(gamification::get_user_card),
        )
        .route(
            "/gamification/collection/{id}/reroll_image/",
            post(gamification::reroll_image),
        )
        .route("/gamification/gatcha/roll/", post(gamification::roll))
        .route("/ticktick/stats/", get(ticktick::stats))
        .route("/ticktick/history/", get(ticktick::history))
        .route("/ticktick/progression/", get(ticktick::progression))
        .route("/ticktick/manual_task/", post(ticktick::manual_task))
        .route("/ticktick/webhook/", get(ticktick::webhook_probe))
        // -- Middleware stack (applied bottom-up) --
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(db)
}

/// Serve the mock on an already-bound listener.
///
/// Tests bind `127.0.0.1:0`, read the local address, and point an
/// `ApiClient` at it.
pub async fn serve(listener: tokio::net::TcpListener, db: SharedDb) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Mock GatchaLife backend listening");
    axum::serve(listener, app(db)).await?;
    Ok(())
}
