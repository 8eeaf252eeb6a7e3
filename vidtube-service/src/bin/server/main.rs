use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use auth::TokenIssuer;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vidtube_service::config::Config;
use vidtube_service::domain::comment::service::CommentService;
use vidtube_service::domain::dashboard::service::DashboardService;
use vidtube_service::domain::like::service::LikeService;
use vidtube_service::domain::subscription::service::SubscriptionService;
use vidtube_service::domain::tweet::service::TweetService;
use vidtube_service::domain::user::service::UserService;
use vidtube_service::domain::video::service::VideoService;
use vidtube_service::inbound::http::create_router;
use vidtube_service::outbound::media::http_store::HttpMediaStore;
use vidtube_service::outbound::repositories::comment::PostgresCommentRepository;
use vidtube_service::outbound::repositories::dashboard::PostgresDashboardRepository;
use vidtube_service::outbound::repositories::like::PostgresLikeRepository;
use vidtube_service::outbound::repositories::subscription::PostgresSubscriptionRepository;
use vidtube_service::outbound::repositories::tweet::PostgresTweetRepository;
use vidtube_service::outbound::repositories::user::PostgresUserRepository;
use vidtube_service::outbound::repositories::video::PostgresVideoRepository;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidtube_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "vidtube-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        media_upload_url = %config.media.upload_url,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let token_issuer = Arc::new(TokenIssuer::new(
        config.jwt.access_secret.as_bytes(),
        config.jwt.refresh_secret.as_bytes(),
        config.jwt.access_expiry_hours,
        config.jwt.refresh_expiry_days,
    ));

    let media_store = Arc::new(HttpMediaStore::new(
        config.media.upload_url.clone(),
        config.media.api_key.clone(),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let video_repository = Arc::new(PostgresVideoRepository::new(pg_pool.clone()));
    let comment_repository = Arc::new(PostgresCommentRepository::new(pg_pool.clone()));
    let tweet_repository = Arc::new(PostgresTweetRepository::new(pg_pool.clone()));
    let like_repository = Arc::new(PostgresLikeRepository::new(pg_pool.clone()));
    let subscription_repository = Arc::new(PostgresSubscriptionRepository::new(pg_pool.clone()));
    let dashboard_repository = Arc::new(PostgresDashboardRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&media_store),
        Arc::clone(&token_issuer),
    ));
    let video_service = Arc::new(VideoService::new(video_repository, media_store));
    let comment_service = Arc::new(CommentService::new(comment_repository));
    let tweet_service = Arc::new(TweetService::new(tweet_repository));
    let like_service = Arc::new(LikeService::new(like_repository));
    let subscription_service = Arc::new(SubscriptionService::new(subscription_repository));
    let dashboard_service = Arc::new(DashboardService::new(dashboard_repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        "Server Listening"
    );

    let application = create_router(
        user_service,
        video_service,
        comment_service,
        tweet_service,
        like_service,
        subscription_service,
        dashboard_service,
        token_issuer,
        PathBuf::from(config.media.staging_dir),
    );

    axum::serve(listener, application).await?;

    Ok(())
}
