use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VideoService;
use crate::models::videos::responses::VideoListResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 课程视频列表
pub async fn list_videos(
    service: &VideoService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

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

    match storage.list_videos_by_course(course_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            VideoListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询视频列表失败: {e}"),
            )),
        ),
    }
}
