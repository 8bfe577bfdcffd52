use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TermService;
use crate::errors::LmsError;
use crate::models::terms::requests::{CreateTermRequest, UpdateTermRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_term(
    service: &TermService,
    request: &HttpRequest,
    create_data: CreateTermRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if create_data.end_date < create_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "学期结束日期早于开始日期",
        )));
    }

    match storage.create_term(create_data).await {
        Ok(term) => Ok(HttpResponse::Created().json(ApiResponse::success(term, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建学期失败: {e}"),
            )),
        ),
    }
}

pub async fn get_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_term_by_id(id).await {
        Ok(Some(term)) => Ok(HttpResponse::Ok().json(ApiResponse::success(term, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TermNotFound, "学期不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学期失败: {e}"),
            )),
        ),
    }
}

pub async fn list_terms(
    service: &TermService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_terms().await {
        Ok(terms) => Ok(HttpResponse::Ok().json(ApiResponse::success(terms, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询学期列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateTermRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_term(id, update_data).await {
        Ok(Some(term)) => Ok(HttpResponse::Ok().json(ApiResponse::success(term, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TermNotFound, "学期不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新学期失败: {e}"),
            )),
        ),
    }
}

/// 删除学期。被课程引用时返回 409，不做任何变更
pub async fn delete_term(
    service: &TermService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_term(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::TermNotFound, "学期不存在"))),
        Err(LmsError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::TermInUse, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除学期失败: {e}"),
            )),
        ),
    }
}
