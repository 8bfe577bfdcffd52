pub mod login;
pub mod logout;
pub mod profile;
pub mod register;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::auth::LoginRequest;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
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

    pub(crate) fn get_config(&self) -> &'static AppConfig {
        AppConfig::get()
    }

    // 登录
    pub async fn login(
        &self,
        req: &HttpRequest,
        login_request: LoginRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, req).await
    }

    // 注册
    pub async fn register(
        &self,
        req: &HttpRequest,
        create_request: CreateUserRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, create_request, req).await
    }

    // 刷新 access token
    pub async fn refresh_token(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, req).await
    }

    // 注销
    pub async fn logout(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, req).await
    }

    // 当前用户信息
    pub async fn profile(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_profile(self, req).await
    }
}
