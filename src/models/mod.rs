//! 业务数据模型
//!
//! 与 entity 模块的数据库实体分离：storage 层读写实体后转换为这里的业务模型，
//! services/routes 层只接触业务模型。

pub mod accounts;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod courses;
pub mod enrollments;
pub mod modules;
pub mod pages;
pub mod quizzes;
pub mod submissions;
pub mod terms;
pub mod users;
pub mod videos;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，注入 app data 供运行时统计使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
