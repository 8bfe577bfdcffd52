//! 请求参数错误处理器
//!
//! JSON 体或查询串反序列化失败时统一返回 400 与扁平的 {"error": ...} 结构，
//! 保证任何成功路径之前不会发生状态变更。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);

    let response =
        HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid parameters" }));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query payload error on {}: {}", req.path(), err);

    let response =
        HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid query parameters" }));
    InternalError::from_response(err, response).into()
}
