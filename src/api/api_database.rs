use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::api_service_token;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug", skip_all)]
pub async fn api_service_database_pools_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    if let Some(response) = api_service_token(&request, data.context.config()) { return response; }

    let database = data.context.database();
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "closed": database.is_closed(),
        "replica": database.has_replica(),
        "pools": database.pool_status(),
    }))
}
