use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::videos::requests::{UpdateProgressRequest, UpdateVideoRequest};
use crate::services::VideoService;
use crate::utils::SafeVideoIdI64;

// 懒加载的全局 VIDEO_SERVICE 实例
static VIDEO_SERVICE: Lazy<VideoService> = Lazy::new(VideoService::new_lazy);

// HTTP处理程序
pub async fn video_detail(
    req: HttpRequest,
    video_id: SafeVideoIdI64,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.video_detail(&req, video_id.0).await
}

pub async fn update_video(
    req: HttpRequest,
    video_id: SafeVideoIdI64,
    body: web::Json<UpdateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE
        .update_video(&req, video_id.0, body.into_inner())
        .await
}

pub async fn delete_video(
    req: HttpRequest,
    video_id: SafeVideoIdI64,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.delete_video(&req, video_id.0).await
}

pub async fn update_progress(
    req: HttpRequest,
    body: web::Json<UpdateProgressRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.update_progress(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_videos_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/videos")
            .wrap(middlewares::RequireJWT)
            // 播放器进度心跳，需在 /{video_id} 之前注册
            .service(
                web::resource("/update-progress")
                    .route(web::post().to(update_progress))
                    .wrap(RateLimit::progress_update()),
            )
            .service(
                web::resource("/{video_id}")
                    // 播放页数据：视频 + 当前用户进度
                    .route(web::get().to(video_detail))
                    // 教师/管理员权限在业务层检查
                    .route(web::put().to(update_video))
                    .route(web::delete().to(delete_video)),
            ),
    );
}
