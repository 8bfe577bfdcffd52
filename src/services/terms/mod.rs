pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::terms::requests::{CreateTermRequest, UpdateTermRequest};
use crate::storage::Storage;

pub struct TermService {
    storage: Option<Arc<dyn Storage>>,
}

impl TermService {
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

    pub async fn create_term(
        &self,
        req: &HttpRequest,
        create_data: CreateTermRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_term(self, req, create_data).await
    }

    pub async fn get_term(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::get_term(self, req, id).await
    }

    pub async fn list_terms(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::list_terms(self, req).await
    }

    pub async fn update_term(
        &self,
        req: &HttpRequest,
        id: i64,
        update_data: UpdateTermRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_term(self, req, id, update_data).await
    }

    pub async fn delete_term(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::delete_term(self, req, id).await
    }
}
