use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::{UserRole, UserStatus};
use serde::Deserialize;
use ts_rs::TS;

/// 创建用户请求（注册与管理员建号共用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub sis_id: Option<String>,
    #[serde(default = "default_role")]
    pub role: UserRole,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub time_zone: Option<String>,
}

fn default_role() -> UserRole {
    UserRole::User
}

/// 更新用户请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub sis_id: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub time_zone: Option<String>,
}

/// 用户列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub role: Option<UserRole>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
    pub role: Option<UserRole>,
}
