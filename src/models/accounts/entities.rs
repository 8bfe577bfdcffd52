use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 账户（组织单元），parent_id 为空表示根账户
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/account.ts")]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}
