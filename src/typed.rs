//! # Typed Weak Cache
//!
//! 多命名空间缓存容器。
//!
//! 为同一个工具内互不相干的子系统提供共享缓存：各子系统用自己的
//! 命名空间（如 `"astCache"`、`"scopeCache"`）读写，无需预先注册，
//! 也不会发生键冲突。命名空间对应的子缓存在首次 `set` 时创建，
//! `get` / `has` 永远不会创建子缓存。
//!
//! 子缓存是 [`WeakKeyMap`]：按对象身份索引，对键只持有弱引用，
//! 键对象被其真正的拥有者释放后，缓存的派生数据随之可回收。

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use crate::config::CacheConfig;
use crate::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::weak_map::WeakKeyMap;

/// 多命名空间弱引用缓存
///
/// `K` 为键对象类型，`V` 为所有命名空间共享的值类型。
/// 命名空间的值类型不一致时，调用方以枚举作为 `V`。
#[derive(Debug)]
pub struct TypedWeakCache<K, V> {
    /// 缓存配置
    config: CacheConfig,
    /// 命名空间 -> 子缓存
    caches: HashMap<String, WeakKeyMap<K, V>>,
    /// 缓存统计
    metrics: CacheMetrics,
}

impl<K, V> TypedWeakCache<K, V> {
    /// 创建新的缓存容器
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// 使用指定配置创建缓存容器
    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            config,
            caches: HashMap::new(),
            metrics: CacheMetrics::new(),
        }
    }

    /// 在指定命名空间下写入缓存值
    ///
    /// 命名空间对应的子缓存不存在时先创建。同一键对象重复写入
    /// 覆盖旧值。
    ///
    /// # 参数
    /// - `kind`: 命名空间
    /// - `key`: 键对象，缓存只保留弱引用
    /// - `value`: 缓存值
    ///
    /// # 返回
    /// - `&mut WeakKeyMap<K, V>`: 该命名空间的子缓存，可继续链式操作
    pub fn set(&mut self, kind: &str, key: &Rc<K>, value: V) -> &mut WeakKeyMap<K, V> {
        if self.config.enable_metrics {
            self.metrics.record_store();
        }

        let kind = match &self.config.kind_prefix {
            Some(prefix) => format!("{}:{}", prefix, kind),
            None => kind.to_string(),
        };

        let sub = match self.caches.entry(kind) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                tracing::debug!("Cache created: {}", vacant.key());
                if self.config.enable_metrics {
                    self.metrics.record_cache_created();
                }
                vacant.insert(WeakKeyMap::new())
            }
        };

        sub.insert(key, value);
        sub
    }

    /// 读取指定命名空间下键对象的缓存值
    ///
    /// 命名空间不存在、键对象从未写入或已被回收时返回 `None`。
    /// 不会创建子缓存。
    ///
    /// # 参数
    /// - `kind`: 命名空间
    /// - `key`: 键对象
    ///
    /// # 返回
    /// - `Option<&V>`: 缓存值
    pub fn get(&self, kind: &str, key: &Rc<K>) -> Option<&V> {
        if self.config.enable_metrics {
            self.metrics.record_request();
        }

        let value = self.sub_cache(kind).and_then(|sub| sub.get(key));

        if self.config.enable_metrics {
            if value.is_some() {
                self.metrics.record_hit();
            } else {
                self.metrics.record_miss();
            }
        }

        value
    }

    /// 检查指定命名空间下键对象是否有缓存值
    ///
    /// 不会创建子缓存，也不计入命中统计。
    pub fn has(&self, kind: &str, key: &Rc<K>) -> bool {
        self.sub_cache(kind)
            .map_or(false, |sub| sub.contains_key(key))
    }

    /// 获取缓存统计快照
    pub fn metrics(&self) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_requests: self.metrics.total_requests(),
            hits: self.metrics.hits(),
            misses: self.metrics.misses(),
            stores: self.metrics.stores(),
            caches_created: self.metrics.caches_created(),
            hit_rate: self.metrics.hit_rate(),
        }
    }

    /// 获取配置
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    fn sub_cache(&self, kind: &str) -> Option<&WeakKeyMap<K, V>> {
        match &self.config.kind_prefix {
            Some(prefix) => self.caches.get(&format!("{}:{}", prefix, kind)),
            None => self.caches.get(kind),
        }
    }
}

impl<K, V> Default for TypedWeakCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
