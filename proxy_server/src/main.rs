use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{http::StatusCode, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

mod config;
mod forward;
mod security;

use config::CONFIG;
use forward::{forward, Upstream};
use security::{client_ip, validate_origin, InputRateLimiter};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

struct AppState {
    client: reqwest::Client,
    upstream: Upstream,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct InputPath {
    key: String,
    tag: Option<String>,
}

async fn input_handler(
    req: HttpRequest,
    path: web::Path<InputPath>,
    body: web::Bytes,
    rate_limiter: web::Data<InputRateLimiter>,
    app_state: web::Data<AppState>,
) -> HttpResponse {
    let client_ip = client_ip(&req);
    let InputPath { key, tag } = path.into_inner();

    if !rate_limiter.allow(&client_ip, &key) {
        warn!("Rate limit exceeded for IP: {}", client_ip);
        return HttpResponse::TooManyRequests().finish();
    }

    if validate_origin(&req, &app_state.allowed_origins).is_err() {
        warn!("Invalid origin from IP: {}", client_ip);
        return HttpResponse::Forbidden().finish();
    }

    let url = app_state.upstream.input_url(&key, tag.as_deref());

    match forward(&app_state.client, &url, body.to_vec()).await {
        Ok(status) => {
            debug!("Collector answered {} for {}", status, client_ip);
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            HttpResponse::build(status).finish()
        }
        Err(e) => {
            error!("Forwarding failed for {}: {}", client_ip, e);
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/loggly/inputs/{key}", web::post().to(input_handler))
        .route("/loggly/inputs/{key}/tag/{tag}", web::post().to(input_handler));
}

fn build_client() -> std::io::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .map_err(std::io::Error::other)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let rate_limiter = web::Data::new(InputRateLimiter::new(
        CONFIG.rate_limit_window_secs,
        CONFIG.rate_limit_max_requests,
    ));
    let app_state = web::Data::new(AppState {
        client: build_client()?,
        upstream: Upstream::new(&CONFIG.collector_scheme, &CONFIG.collector_domain),
        allowed_origins: CONFIG.allowed_origins.clone(),
    });

    let bind_addr = format!("0.0.0.0:{}", CONFIG.port);
    info!(
        "Starting Loggly proxy on {} forwarding to {}://{}",
        bind_addr, CONFIG.collector_scheme, CONFIG.collector_domain
    );

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allow_any_header()
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::clone(&rate_limiter))
            .app_data(web::Data::clone(&app_state))
            .configure(routes)
    })
    .bind(&bind_addr)?
    .workers(4)
    .max_connections(CONFIG.max_connections)
    .run();

    let srv = server.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Received shutdown signal");
            srv.stop(true).await;
        }
    });

    server.await
}
