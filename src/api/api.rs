use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::api::api_cache::{api_service_cache_clear, api_service_cache_invalidate, api_service_cache_metrics_get, api_service_cache_stats_get};
use crate::api::api_database::api_service_database_pools_get;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::api::structs::query_token::QueryToken;
use crate::config::structs::configuration::Configuration;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "DELETE"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/cache/stats").route(web::get().to(api_service_cache_stats_get)));
        cfg.service(web::resource("api/cache/metrics").route(web::get().to(api_service_cache_metrics_get)));
        cfg.service(web::resource("api/database/pools").route(web::get().to(api_service_database_pools_get)));
        cfg.service(web::resource("api/cache").route(web::delete().to(api_service_cache_clear)));
        cfg.service(web::resource("api/cache/{tag}").route(web::delete().to(api_service_cache_invalidate)));
    })
}

pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    keep_alive: u64,
    client_request_timeout: u64,
    client_disconnect_timeout: u64,
    threads: u64
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    info!("[API] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(sentry_actix::Sentry::new())
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(client_request_timeout))
        .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
        .workers(threads as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Returns the response to send when the request does not carry the configured API key.
pub fn api_service_token(request: &HttpRequest, config: &Configuration) -> Option<HttpResponse>
{
    let token = match web::Query::<QueryToken>::from_query(request.query_string()) {
        Ok(params) => params.into_inner().token,
        Err(_) => {
            return Some(HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "status": "invalid query"
            })));
        }
    };
    match token {
        None => {
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "status": "missing token"
            })))
        }
        Some(token_code) => {
            if token_code != config.api_key {
                debug!("[API] Rejected request to {} with an invalid token", request.path());
                return Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                    "status": "invalid token"
                })));
            }
            None
        }
    }
}

pub async fn api_service_not_found() -> HttpResponse
{
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
