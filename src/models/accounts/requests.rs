use serde::Deserialize;
use ts_rs::TS;

/// 创建账户请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct CreateAccountRequest {
    pub name: String,
    pub parent_id: Option<i64>,
}

/// 更新账户请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
    pub parent_id: Option<i64>,
}
