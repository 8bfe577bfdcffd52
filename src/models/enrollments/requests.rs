use crate::models::common::pagination::PaginationQuery;
use crate::models::enrollments::entities::{EnrollmentRole, EnrollmentState};
use serde::Deserialize;
use ts_rs::TS;

/// 管理端创建选课记录请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct CreateEnrollmentRequest {
    pub user_id: i64,
    pub section_id: i64,
    pub role: EnrollmentRole,
    pub enrollment_state: Option<EnrollmentState>,
}

/// 选课列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct EnrollmentListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub user_id: Option<i64>,
    pub section_id: Option<i64>,
    pub role: Option<EnrollmentRole>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct EnrollmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: Option<i64>,
    pub section_id: Option<i64>,
    pub role: Option<EnrollmentRole>,
}
