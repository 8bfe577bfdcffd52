use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::VideoService;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::videos::requests::{CreateVideoRequest, UpdateVideoRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 视频管理权限：站点管理员或该课程的在任教师
async fn check_video_manage_permission(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<(), HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
    };

    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    match storage.is_teacher_for_course(current_user.id, course_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotCourseTeacher,
            "您不是该课程的教师",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师身份失败: {e}"),
            )),
        ),
    }
}

pub async fn create_video(
    service: &VideoService,
    request: &HttpRequest,
    course_id: i64,
    create_data: CreateVideoRequest,
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

    if let Err(response) = check_video_manage_permission(&storage, request, course_id).await {
        return Ok(response);
    }

    // 播放来源至少要有一个
    if create_data.video_url.is_none() && create_data.video_file.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "必须提供视频 URL 或上传文件路径",
        )));
    }

    if create_data.duration < 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "视频时长不能为负数",
        )));
    }

    match storage.create_video(course_id, create_data).await {
        Ok(video) => Ok(HttpResponse::Created().json(ApiResponse::success(video, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建视频失败: {e}"),
            )),
        ),
    }
}

pub async fn update_video(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
    update_data: UpdateVideoRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let video = match storage.get_video_by_id(video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::VideoNotFound, "视频不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询视频失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = check_video_manage_permission(&storage, request, video.course_id).await {
        return Ok(response);
    }

    if let Some(duration) = update_data.duration
        && duration < 0
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "视频时长不能为负数",
        )));
    }

    match storage.update_video(video_id, update_data).await {
        Ok(Some(video)) => Ok(HttpResponse::Ok().json(ApiResponse::success(video, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::VideoNotFound, "视频不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新视频失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_video(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let video = match storage.get_video_by_id(video_id).await {
        Ok(Some(video)) => video,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::VideoNotFound, "视频不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询视频失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = check_video_manage_permission(&storage, request, video.course_id).await {
        return Ok(response);
    }

    match storage.delete_video(video_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::VideoNotFound, "视频不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除视频失败: {e}"),
            )),
        ),
    }
}
