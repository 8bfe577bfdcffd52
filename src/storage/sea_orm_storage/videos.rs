//! 视频与观看进度存储操作

use super::SeaOrmStorage;
use crate::entity::video_progress::{
    ActiveModel as VideoProgressActiveModel, Column as VideoProgressColumn,
    Entity as VideoProgressRecords,
};
use crate::entity::videos::{ActiveModel, Column, Entity as Videos};
use crate::errors::{LmsError, Result};
use crate::models::videos::{
    entities::{ProgressOutcome, ProgressReport, Video, VideoProgress, merge_progress},
    requests::{CreateVideoRequest, UpdateVideoRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建视频
    pub async fn create_video_impl(
        &self,
        course_id: i64,
        video: CreateVideoRequest,
    ) -> Result<Video> {
        let model = ActiveModel {
            course_id: Set(course_id),
            title: Set(video.title),
            video_url: Set(video.video_url),
            video_file: Set(video.video_file),
            duration: Set(video.duration),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建视频失败: {e}")))?;

        Ok(result.into_video())
    }

    /// 通过 ID 获取视频
    pub async fn get_video_by_id_impl(&self, video_id: i64) -> Result<Option<Video>> {
        let result = Videos::find_by_id(video_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频失败: {e}")))?;

        Ok(result.map(|m| m.into_video()))
    }

    /// 列出课程下的视频
    pub async fn list_videos_by_course_impl(&self, course_id: i64) -> Result<Vec<Video>> {
        let results = Videos::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_video()).collect())
    }

    /// 更新视频
    pub async fn update_video_impl(
        &self,
        video_id: i64,
        update: UpdateVideoRequest,
    ) -> Result<Option<Video>> {
        let existing = Videos::find_by_id(video_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询视频失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(video_id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(video_url) = update.video_url {
            model.video_url = Set(Some(video_url));
        }
        if let Some(video_file) = update.video_file {
            model.video_file = Set(Some(video_file));
        }
        if let Some(duration) = update.duration {
            model.duration = Set(duration);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新视频失败: {e}")))?;

        Ok(Some(result.into_video()))
    }

    /// 删除视频（进度记录级联删除）
    pub async fn delete_video_impl(&self, video_id: i64) -> Result<bool> {
        let result = Videos::delete_by_id(video_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除视频失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取某用户对某视频的进度记录
    pub async fn get_video_progress_impl(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Option<VideoProgress>> {
        let result = VideoProgressRecords::find()
            .filter(
                Condition::all()
                    .add(VideoProgressColumn::UserId.eq(user_id))
                    .add(VideoProgressColumn::VideoId.eq(video_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询观看进度失败: {e}")))?;

        Ok(result.map(|m| m.into_video_progress()))
    }

    /// 单事务内合并一次进度上报
    ///
    /// 读取现有行、用 merge_progress 合并、写回，三步在同一事务内完成；
    /// (user, video) 唯一索引保证并发首报时第二个插入失败而不是产生重复行。
    pub async fn upsert_video_progress_impl(
        &self,
        user_id: i64,
        video_id: i64,
        report: ProgressReport,
    ) -> Result<ProgressOutcome> {
        let video = self
            .get_video_by_id_impl(video_id)
            .await?
            .ok_or_else(|| LmsError::not_found(format!("视频不存在: {video_id}")))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = VideoProgressRecords::find()
            .filter(
                Condition::all()
                    .add(VideoProgressColumn::UserId.eq(user_id))
                    .add(VideoProgressColumn::VideoId.eq(video_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询观看进度失败: {e}")))?;

        let outcome = merge_progress(
            existing.as_ref().map(|m| (m.watched_time, m.is_completed)),
            report,
            video.duration,
        );

        let now = chrono::Utc::now().timestamp();

        match existing {
            Some(row) => {
                let model = VideoProgressActiveModel {
                    id: Set(row.id),
                    watched_time: Set(outcome.watched_time),
                    is_completed: Set(outcome.is_completed),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("更新观看进度失败: {e}")))?;
            }
            None => {
                let model = VideoProgressActiveModel {
                    user_id: Set(user_id),
                    video_id: Set(video_id),
                    watched_time: Set(outcome.watched_time),
                    is_completed: Set(outcome.is_completed),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("写入观看进度失败: {e}")))?;
            }
        }

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(outcome)
    }
}
