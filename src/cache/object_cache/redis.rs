use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use tracing::{debug, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("redis", RedisCacheWrapper);

pub struct RedisCacheWrapper {
    conn: MultiplexedConnection,
    key_prefix: String,
    default_ttl: u64,
}

impl RedisCacheWrapper {
    pub async fn new_async() -> Result<Self, String> {
        let config = AppConfig::get();
        let client = redis::Client::open(config.cache.redis.url.as_str())
            .map_err(|e| format!("Redis URL 无效: {e}"))?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| format!("Redis 连接失败: {e}"))?;

        debug!("RedisCacheWrapper connected to {}", config.cache.redis.url);

        Ok(Self {
            conn,
            key_prefix: config.cache.redis.key_prefix.clone(),
            default_ttl: config.cache.default_ttl,
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl ObjectCache for RedisCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(self.prefixed(key)).await {
            Ok(Some(value)) => CacheResult::Found(value),
            Ok(None) => CacheResult::NotFound,
            Err(e) => {
                warn!("Redis GET failed for key {}: {}", key, e);
                CacheResult::Error(e.to_string())
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        let mut conn = self.conn.clone();
        if let Err(e) = conn
            .set_ex::<_, _, ()>(self.prefixed(&key), value, ttl)
            .await
        {
            warn!("Redis SETEX failed for key {}: {}", key, e);
        }
    }

    async fn remove(&self, key: &str) {
        let mut conn = self.conn.clone();
        if let Err(e) = conn.del::<_, ()>(self.prefixed(key)).await {
            warn!("Redis DEL failed for key {}: {}", key, e);
        }
    }

    async fn invalidate_all(&self) {
        // 只清理带本服务前缀的键，避免影响共享实例上的其他数据
        let mut conn = self.conn.clone();
        let pattern = format!("{}*", self.key_prefix);
        let keys: Vec<String> = match conn.keys(&pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!("Redis KEYS failed for pattern {}: {}", pattern, e);
                return;
            }
        };

        if keys.is_empty() {
            return;
        }

        if let Err(e) = conn.del::<_, ()>(keys).await {
            warn!("Redis DEL failed during invalidate_all: {}", e);
        }
    }
}
