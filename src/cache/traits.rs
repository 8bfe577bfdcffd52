use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    Error(String),
}

/// 对象缓存统一接口
#[async_trait]
pub trait ObjectCache: Send + Sync {
    /// 按键读取原始字符串值
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入原始字符串值，ttl 单位为秒（0 表示使用后端默认 TTL）
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    /// 删除指定键
    async fn remove(&self, key: &str);

    /// 清空全部缓存
    async fn invalidate_all(&self);
}
