use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ModuleService;
use super::sequence::{sequence_neighbors, sort_sequence};
use crate::middlewares::RequireJWT;
use crate::models::modules::responses::{ModuleItemContent, ModuleItemDetailResponse};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

fn item_url(course_id: i64, item_id: i64) -> String {
    format!("/api/v1/courses/{course_id}/items/{item_id}")
}

/// 条目详情：解析内容主体并给出课程级的上一条/下一条导航
pub async fn module_item_detail(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    item_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user_claims(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    }

    let module_item = match storage.get_module_item_in_course(course_id, item_id).await {
        Ok(Some(item)) => item,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleItemNotFound,
                "模块条目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块条目失败: {e}"),
                )),
            );
        }
    };

    let content = match storage.resolve_module_item_content(&module_item).await {
        Ok(content) => content,
        Err(e) => {
            error!("Error resolving module item content: {}", e);
            ModuleItemContent::Unknown
        }
    };

    // 物化整条课程序列并定位前后条目
    let mut sequence = match storage.list_course_sequence(course_id).await {
        Ok(sequence) => sequence,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程序列失败: {e}"),
                )),
            );
        }
    };
    sort_sequence(&mut sequence);

    let (prev_item, next_item) = sequence_neighbors(&sequence, module_item.id);
    let prev_item_url = prev_item.map(|s| item_url(course_id, s.item.id));
    let next_item_url = next_item.map(|s| item_url(course_id, s.item.id));

    // 内容是作业时附带当前用户的最新提交
    let latest_submission = match &content {
        ModuleItemContent::Assignment(assignment) => storage
            .get_latest_submission(assignment.id, current_user.id)
            .await
            .unwrap_or(None),
        _ => None,
    };

    let is_teacher = current_user.role == UserRole::Admin
        || storage
            .is_teacher_for_course(current_user.id, course_id)
            .await
            .unwrap_or(false);

    let response = ModuleItemDetailResponse {
        module_item,
        content,
        prev_item_url,
        next_item_url,
        latest_submission,
        is_teacher,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
