use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::info;
use serde_json::json;
use crate::api::api::api_service_token;
use crate::api::structs::api_service_data::ApiServiceData;
use crate::cache::enums::resource_tag::ResourceTag;

const PROMETHEUS_ID: &str = "airport_cache";

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_stats_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, data.context.config()) { return response; }

    HttpResponse::Ok().content_type(ContentType::json()).json(data.context.cache().get_cache_stats())
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_metrics_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, data.context.config()) { return response; }

    let stats = data.context.cache().get_cache_stats();
    let mut string_output = String::with_capacity(1024);

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "hits", stats.hits, true, Some(&format!("{PROMETHEUS_ID} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "misses", stats.misses, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "invalidations", stats.invalidations, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "total_queries", stats.total_queries, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "counter", "sets", stats.sets, false, None));

    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "cache_size", stats.cache_size, true, Some(&format!("{PROMETHEUS_ID} gauge metrics"))));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "hit_rate", stats.hit_rate, false, None));
    string_output.push_str(&api_service_prom_generate_line(PROMETHEUS_ID, "gauge", "miss_rate", stats.miss_rate, false, None));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_invalidate(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, data.context.config()) { return response; }

    let tag = match ResourceTag::from_str(&path.into_inner()) {
        Ok(tag) => tag,
        Err(error) => { return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({"status": error})); }
    };

    let removed = data.context.cache().invalidate_by_prefix(tag).await;
    info!("[API] Invalidated {} cached {} entries", removed, tag);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok", "tag": tag, "removed": removed}))
}

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_cache_clear(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, data.context.config()) { return response; }

    let removed = data.context.cache().clear_all().await;
    info!("[API] Cleared {} cached entries", removed);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({"status": "ok", "removed": removed}))
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: impl Display, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}
