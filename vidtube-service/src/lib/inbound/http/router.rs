use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use auth::TokenIssuer;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::comments;
use super::handlers::dashboard;
use super::handlers::healthcheck::healthcheck;
use super::handlers::likes;
use super::handlers::subscriptions;
use super::handlers::tweets;
use super::handlers::users;
use super::handlers::videos;
use crate::domain::comment::service::CommentService;
use crate::domain::dashboard::service::DashboardService;
use crate::domain::like::service::LikeService;
use crate::domain::subscription::service::SubscriptionService;
use crate::domain::tweet::service::TweetService;
use crate::domain::user::service::UserService;
use crate::domain::video::service::VideoService;
use crate::inbound::http::middleware::verify_session;
use crate::outbound::media::http_store::HttpMediaStore;
use crate::outbound::repositories::comment::PostgresCommentRepository;
use crate::outbound::repositories::dashboard::PostgresDashboardRepository;
use crate::outbound::repositories::like::PostgresLikeRepository;
use crate::outbound::repositories::subscription::PostgresSubscriptionRepository;
use crate::outbound::repositories::tweet::PostgresTweetRepository;
use crate::outbound::repositories::user::PostgresUserRepository;
use crate::outbound::repositories::video::PostgresVideoRepository;

/// Unified application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService<PostgresUserRepository, HttpMediaStore>>,
    pub video_service: Arc<VideoService<PostgresVideoRepository, HttpMediaStore>>,
    pub comment_service: Arc<CommentService<PostgresCommentRepository>>,
    pub tweet_service: Arc<TweetService<PostgresTweetRepository>>,
    pub like_service: Arc<LikeService<PostgresLikeRepository>>,
    pub subscription_service: Arc<SubscriptionService<PostgresSubscriptionRepository>>,
    pub dashboard_service: Arc<DashboardService<PostgresDashboardRepository>>,
    pub token_issuer: Arc<TokenIssuer>,
    pub staging_dir: PathBuf,
}

#[allow(clippy::too_many_arguments)]
pub fn create_router(
    user_service: Arc<UserService<PostgresUserRepository, HttpMediaStore>>,
    video_service: Arc<VideoService<PostgresVideoRepository, HttpMediaStore>>,
    comment_service: Arc<CommentService<PostgresCommentRepository>>,
    tweet_service: Arc<TweetService<PostgresTweetRepository>>,
    like_service: Arc<LikeService<PostgresLikeRepository>>,
    subscription_service: Arc<SubscriptionService<PostgresSubscriptionRepository>>,
    dashboard_service: Arc<DashboardService<PostgresDashboardRepository>>,
    token_issuer: Arc<TokenIssuer>,
    staging_dir: PathBuf,
) -> Router {
    let state = AppState {
        user_service,
        video_service,
        comment_service,
        tweet_service,
        like_service,
        subscription_service,
        dashboard_service,
        token_issuer,
        staging_dir,
    };

    // Routes reachable without a session.
    let public_routes = Router::new()
        .route("/api/v1/healthcheck", get(healthcheck))
        .route("/api/v1/users/register", post(users::register))
        .route("/api/v1/users/login", post(users::login))
        .route("/api/v1/users/refresh-token", post(users::refresh_token));

    let session_routes = Router::new()
        .route("/api/v1/users/logout", post(users::logout))
        .route("/api/v1/users/change-password", post(users::change_password))
        .route("/api/v1/users/current-user", get(users::current_user))
        .route("/api/v1/users/update-account", patch(users::update_account))
        .route("/api/v1/users/avatar", patch(users::update_avatar))
        .route("/api/v1/users/cover-image", patch(users::update_cover_image))
        .route("/api/v1/users/c/:username", get(users::channel_profile))
        .route("/api/v1/users/history", get(users::watch_history))
        .route(
            "/api/v1/videos",
            get(videos::list_videos).post(videos::publish_video),
        )
        .route(
            "/api/v1/videos/:video_id",
            get(videos::get_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        .route(
            "/api/v1/videos/toggle/publish/:video_id",
            patch(videos::toggle_publish),
        )
        .route(
            "/api/v1/comments/:video_id",
            get(comments::list_comments).post(comments::add_comment),
        )
        .route(
            "/api/v1/comments/c/:comment_id",
            patch(comments::update_comment).delete(comments::delete_comment),
        )
        .route(
            "/api/v1/likes/toggle/v/:video_id",
            post(likes::toggle_video_like),
        )
        .route(
            "/api/v1/likes/toggle/c/:comment_id",
            post(likes::toggle_comment_like),
        )
        .route(
            "/api/v1/likes/toggle/t/:tweet_id",
            post(likes::toggle_tweet_like),
        )
        .route("/api/v1/likes/videos", get(likes::liked_videos))
        .route(
            "/api/v1/subscriptions/c/:channel_id",
            post(subscriptions::toggle_subscription)
                .get(subscriptions::list_subscribers),
        )
        .route(
            "/api/v1/subscriptions/u/:subscriber_id",
            get(subscriptions::list_subscribed_channels),
        )
        .route("/api/v1/tweets", post(tweets::create_tweet))
        .route("/api/v1/tweets/user/:user_id", get(tweets::list_user_tweets))
        .route(
            "/api/v1/tweets/:tweet_id",
            patch(tweets::update_tweet).delete(tweets::delete_tweet),
        )
        .route("/api/v1/dashboard/stats", get(dashboard::channel_stats))
        .route("/api/v1/dashboard/videos", get(dashboard::channel_videos))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            verify_session,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
