pub mod grade;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{CreateSubmissionRequest, GradeSubmissionRequest};
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 学生提交作业
    pub async fn submit_assignment(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
        submission_data: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, req, assignment_id, submission_data).await
    }

    // 作业的提交列表（教师视图）
    pub async fn list_submissions(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, req, assignment_id).await
    }

    // 评分视图：提交详情加前后导航
    pub async fn grading_view(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
        submission_id: i64,
    ) -> ActixResult<HttpResponse> {
        grade::grading_view(self, req, assignment_id, submission_id).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        req: &HttpRequest,
        assignment_id: i64,
        submission_id: i64,
        grade_data: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, req, assignment_id, submission_id, grade_data).await
    }
}
