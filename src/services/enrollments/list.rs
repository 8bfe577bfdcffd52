use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EnrollmentService;
use crate::models::enrollments::requests::{EnrollmentListParams, EnrollmentListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_enrollments(
    service: &EnrollmentService,
    request: &HttpRequest,
    params: EnrollmentListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = EnrollmentListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        user_id: params.user_id,
        section_id: params.section_id,
        role: params.role,
    };

    match storage.list_enrollments_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询选课列表失败: {e}"),
            )),
        ),
    }
}
