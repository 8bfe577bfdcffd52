use serde::Deserialize;
use ts_rs::TS;

/// 创建视频请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct CreateVideoRequest {
    pub title: String,
    pub video_url: Option<String>,
    pub video_file: Option<String>,
    #[serde(default)]
    pub duration: i64,
}

/// 更新视频请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub video_url: Option<String>,
    pub video_file: Option<String>,
    pub duration: Option<i64>,
}

/// 播放器周期性上报的进度。缺省字段按 0 处理，非数字在反序列化阶段即被拒绝
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct UpdateProgressRequest {
    #[serde(default)]
    pub video_id: i64,
    #[serde(default)]
    pub watched_time: f64,
    #[serde(default)]
    pub duration: f64,
}
