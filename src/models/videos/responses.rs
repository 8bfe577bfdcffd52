use crate::models::videos::entities::{Video, VideoProgress};
use serde::Serialize;
use ts_rs::TS;

/// 进度上报响应。字段结构是与播放器约定的扁平 JSON，不套 ApiResponse
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct UpdateProgressResponse {
    pub status: String,
    pub progress: i64,
    pub percent: i64,
    pub watched_time: f64,
    pub is_completed: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoListResponse {
    pub items: Vec<Video>,
}

/// 播放页数据：视频、播放地址与当前用户的进度
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoDetailResponse {
    pub video: Video,
    pub video_src: Option<String>,
    pub progress: Option<VideoProgress>,
    pub progress_percent: i64,
    pub is_completed: bool,
}
