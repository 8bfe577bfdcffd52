pub mod detail;
pub mod list;
pub mod manage;
pub mod progress;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::videos::requests::{
    CreateVideoRequest, UpdateProgressRequest, UpdateVideoRequest,
};
use crate::storage::Storage;

pub struct VideoService {
    storage: Option<Arc<dyn Storage>>,
}

impl VideoService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 课程视频列表
    pub async fn list_videos(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        list::list_videos(self, req, course_id).await
    }

    // 播放页数据
    pub async fn video_detail(&self, req: &HttpRequest, video_id: i64) -> ActixResult<HttpResponse> {
        detail::video_detail(self, req, video_id).await
    }

    // 播放器进度上报
    pub async fn update_progress(
        &self,
        req: &HttpRequest,
        progress_data: UpdateProgressRequest,
    ) -> ActixResult<HttpResponse> {
        progress::update_progress(self, req, progress_data).await
    }

    // 创建视频
    pub async fn create_video(
        &self,
        req: &HttpRequest,
        course_id: i64,
        create_data: CreateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_video(self, req, course_id, create_data).await
    }

    // 更新视频
    pub async fn update_video(
        &self,
        req: &HttpRequest,
        video_id: i64,
        update_data: UpdateVideoRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_video(self, req, video_id, update_data).await
    }

    // 删除视频
    pub async fn delete_video(&self, req: &HttpRequest, video_id: i64) -> ActixResult<HttpResponse> {
        manage::delete_video(self, req, video_id).await
    }
}
