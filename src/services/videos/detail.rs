use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::VideoService;
use crate::middlewares::RequireJWT;
use crate::models::videos::entities::{ProgressReport, merge_progress};
use crate::models::videos::responses::VideoDetailResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 播放页数据：视频、播放地址与当前用户的进度百分比
pub async fn video_detail(
    service: &VideoService,
    request: &HttpRequest,
    video_id: i64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

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

    let progress = match storage.get_video_progress(user_id, video_id).await {
        Ok(progress) => progress,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询观看进度失败: {e}"),
                )),
            );
        }
    };

    // 用零上报走一遍合并逻辑，拿到展示用的整百分比而不改动任何状态
    let outcome = merge_progress(
        progress.as_ref().map(|p| (p.watched_time, p.is_completed)),
        ProgressReport {
            watched_time: 0.0,
            duration: 0.0,
        },
        video.duration,
    );

    let response = VideoDetailResponse {
        video_src: video.src_url().map(|s| s.to_string()),
        video,
        progress,
        progress_percent: outcome.percent,
        is_completed: outcome.is_completed,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功")))
}
