pub mod catalog;
pub mod detail;
pub mod manage;
pub mod sections;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest,
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
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

    // 选课目录
    pub async fn course_catalog(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        catalog::course_catalog(self, req).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        req: &HttpRequest,
        create_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_course(self, req, create_data).await
    }

    // 列出课程
    pub async fn list_courses(
        &self,
        req: &HttpRequest,
        query: CourseListParams,
    ) -> ActixResult<HttpResponse> {
        manage::list_courses(self, req, query).await
    }

    // 课程主页：课程信息加模块目录
    pub async fn course_detail(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        detail::course_detail(self, req, course_id).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        req: &HttpRequest,
        course_id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_course(self, req, course_id, update_data).await
    }

    // 删除课程
    pub async fn delete_course(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        manage::delete_course(self, req, course_id).await
    }

    // 创建分班
    pub async fn create_section(
        &self,
        req: &HttpRequest,
        course_id: i64,
        section_data: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        sections::create_section(self, req, course_id, section_data).await
    }

    // 列出分班
    pub async fn list_sections(
        &self,
        req: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        sections::list_sections(self, req, course_id).await
    }

    // 删除分班
    pub async fn delete_section(
        &self,
        req: &HttpRequest,
        course_id: i64,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        sections::delete_section(self, req, course_id, section_id).await
    }
}
