//! 账户存储操作

use super::SeaOrmStorage;
use crate::entity::accounts::{ActiveModel, Entity as Accounts};
use crate::errors::{LmsError, Result};
use crate::models::accounts::{
    entities::Account,
    requests::{CreateAccountRequest, UpdateAccountRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建账户
    pub async fn create_account_impl(&self, account: CreateAccountRequest) -> Result<Account> {
        let model = ActiveModel {
            name: Set(account.name),
            parent_id: Set(account.parent_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建账户失败: {e}")))?;

        Ok(result.into_account())
    }

    /// 通过 ID 获取账户
    pub async fn get_account_by_id_impl(&self, id: i64) -> Result<Option<Account>> {
        let result = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询账户失败: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 列出全部账户
    pub async fn list_accounts_impl(&self) -> Result<Vec<Account>> {
        let results = Accounts::find()
            .order_by_asc(crate::entity::accounts::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询账户列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_account()).collect())
    }

    /// 更新账户
    pub async fn update_account_impl(
        &self,
        id: i64,
        update: UpdateAccountRequest,
    ) -> Result<Option<Account>> {
        let existing = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询账户失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(parent_id) = update.parent_id {
            model.parent_id = Set(Some(parent_id));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新账户失败: {e}")))?;

        Ok(Some(result.into_account()))
    }

    /// 删除账户（子账户与课程级联删除）
    pub async fn delete_account_impl(&self, id: i64) -> Result<bool> {
        let result = Accounts::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除账户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
