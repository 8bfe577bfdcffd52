pub mod item_detail;
pub mod items;
pub mod manage;
pub mod sequence;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::modules::requests::{
    CreateModuleItemRequest, CreateModuleRequest, UpdateModuleRequest,
};
use crate::storage::Storage;

pub struct ModuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ModuleService {
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

    // 创建模块
    pub async fn create_module(
        &self,
        req: &HttpRequest,
        course_id: i64,
        create_data: CreateModuleRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_module(self, req, course_id, create_data).await
    }

    // 课程模块目录
    pub async fn list_modules(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        manage::list_modules(self, req, course_id).await
    }

    // 获取单个模块
    pub async fn get_module(
        &self,
        req: &HttpRequest,
        course_id: i64,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::get_module(self, req, course_id, module_id).await
    }

    // 更新模块
    pub async fn update_module(
        &self,
        req: &HttpRequest,
        course_id: i64,
        module_id: i64,
        update_data: UpdateModuleRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_module(self, req, course_id, module_id, update_data).await
    }

    // 删除模块
    pub async fn delete_module(
        &self,
        req: &HttpRequest,
        course_id: i64,
        module_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_module(self, req, course_id, module_id).await
    }

    // 创建模块条目
    pub async fn create_module_item(
        &self,
        req: &HttpRequest,
        course_id: i64,
        module_id: i64,
        item_data: CreateModuleItemRequest,
    ) -> ActixResult<HttpResponse> {
        items::create_module_item(self, req, course_id, module_id, item_data).await
    }

    // 删除模块条目
    pub async fn delete_module_item(
        &self,
        req: &HttpRequest,
        course_id: i64,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        items::delete_module_item(self, req, course_id, item_id).await
    }

    // 条目详情（内容主体 + 前后导航）
    pub async fn module_item_detail(
        &self,
        req: &HttpRequest,
        course_id: i64,
        item_id: i64,
    ) -> ActixResult<HttpResponse> {
        item_detail::module_item_detail(self, req, course_id, item_id).await
    }
}
