use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, error};

use super::VideoService;
use crate::errors::LmsError;
use crate::middlewares::RequireJWT;
use crate::models::videos::entities::ProgressReport;
use crate::models::videos::requests::UpdateProgressRequest;
use crate::models::videos::responses::UpdateProgressResponse;

/// 播放器周期性上报进度
/// POST /videos/update-progress
///
/// 请求与响应是与播放器约定的扁平 JSON；非数字字段在反序列化阶段即
/// 返回 400 {"error": "Invalid parameters"}，不会触及存储。
pub async fn update_progress(
    service: &VideoService,
    request: &HttpRequest,
    progress_data: UpdateProgressRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(serde_json::json!({ "error": "Not authenticated" })));
        }
    };

    debug!(
        "Progress report: user={} video={} watched={} duration={}",
        user_id, progress_data.video_id, progress_data.watched_time, progress_data.duration
    );

    if progress_data.video_id <= 0 {
        return Ok(
            HttpResponse::BadRequest().json(serde_json::json!({ "error": "Invalid parameters" }))
        );
    }

    let storage = service.get_storage(request);

    let report = ProgressReport {
        watched_time: progress_data.watched_time,
        duration: progress_data.duration,
    };

    match storage
        .upsert_video_progress(user_id, progress_data.video_id, report)
        .await
    {
        Ok(outcome) => Ok(HttpResponse::Ok().json(UpdateProgressResponse {
            status: "success".to_string(),
            progress: outcome.percent,
            percent: outcome.percent,
            watched_time: outcome.watched_time,
            is_completed: outcome.is_completed,
        })),
        Err(LmsError::NotFound(_)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({ "error": "Video not found" })))
        }
        Err(e) => {
            error!("Error updating video progress: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to update progress" })))
        }
    }
}
