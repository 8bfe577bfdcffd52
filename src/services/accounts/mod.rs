pub mod manage;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::accounts::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::storage::Storage;

pub struct AccountService {
    storage: Option<Arc<dyn Storage>>,
}

impl AccountService {
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

    pub async fn create_account(
        &self,
        req: &HttpRequest,
        create_data: CreateAccountRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_account(self, req, create_data).await
    }

    pub async fn get_account(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::get_account(self, req, id).await
    }

    pub async fn list_accounts(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        manage::list_accounts(self, req).await
    }

    pub async fn update_account(
        &self,
        req: &HttpRequest,
        id: i64,
        update_data: UpdateAccountRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_account(self, req, id, update_data).await
    }

    pub async fn delete_account(&self, req: &HttpRequest, id: i64) -> ActixResult<HttpResponse> {
        manage::delete_account(self, req, id).await
    }
}
