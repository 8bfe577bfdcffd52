pub mod enroll;
pub mod list;
pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentListParams};
use crate::storage::Storage;

pub struct EnrollmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl EnrollmentService {
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

    // 自助选课：当前用户以学生身份加入课程
    pub async fn enroll_in_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        enroll::enroll_in_course(self, req, course_id).await
    }

    // 列出选课记录
    pub async fn list_enrollments(
        &self,
        req: &HttpRequest,
        query: EnrollmentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, req, query).await
    }

    // 管理端创建选课记录（指定角色与状态）
    pub async fn create_enrollment(
        &self,
        req: &HttpRequest,
        create_data: CreateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_enrollment(self, req, create_data).await
    }

    // 删除选课记录
    pub async fn delete_enrollment(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::delete_enrollment(self, req, id).await
    }
}
