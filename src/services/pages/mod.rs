pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::pages::requests::{CreatePageRequest, UpdatePageRequest};
use crate::storage::Storage;

pub struct PageService {
    storage: Option<Arc<dyn Storage>>,
}

impl PageService {
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

    pub async fn create_page(
        &self,
        req: &HttpRequest,
        course_id: i64,
        create_data: CreatePageRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_page(self, req, course_id, create_data).await
    }

    pub async fn list_pages(&self, req: &HttpRequest, course_id: i64) -> ActixResult<HttpResponse> {
        manage::list_pages(self, req, course_id).await
    }

    pub async fn get_page(
        &self,
        req: &HttpRequest,
        course_id: i64,
        page_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::get_page(self, req, course_id, page_id).await
    }

    pub async fn update_page(
        &self,
        req: &HttpRequest,
        course_id: i64,
        page_id: i64,
        update_data: UpdatePageRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_page(self, req, course_id, page_id, update_data).await
    }

    pub async fn delete_page(
        &self,
        req: &HttpRequest,
        course_id: i64,
        page_id: i64,
    ) -> ActixResult<HttpResponse> {
        manage::delete_page(self, req, course_id, page_id).await
    }
}
