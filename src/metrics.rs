//! # Cache Metrics
//!
//! 缓存统计指标。
//!
//! 计数器使用 `AtomicU64`，读操作（`&self`）也能记录命中与未命中。
//! 统计只包含计数，不暴露任何条目内容或条目列表。

use std::sync::atomic::{AtomicU64, Ordering};

/// 缓存统计指标
#[derive(Debug, Default)]
pub struct CacheMetrics {
    /// 读请求总数
    total_requests: AtomicU64,
    /// 命中次数
    hits: AtomicU64,
    /// 未命中次数
    misses: AtomicU64,
    /// 写入次数
    stores: AtomicU64,
    /// 已创建的子缓存数
    caches_created: AtomicU64,
}

impl CacheMetrics {
    /// 创建新的统计实例
    pub fn new() -> Self {
        Self::default()
    }

    /// 记录读请求
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录命中
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录未命中
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录写入
    pub fn record_store(&self) {
        self.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// 记录子缓存创建
    pub fn record_cache_created(&self) {
        self.caches_created.fetch_add(1, Ordering::Relaxed);
    }

    /// 获取读请求总数
    pub fn total_requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// 获取命中次数
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// 获取未命中次数
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// 获取写入次数
    pub fn stores(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
    }

    /// 获取已创建的子缓存数
    pub fn caches_created(&self) -> u64 {
        self.caches_created.load(Ordering::Relaxed)
    }

    /// 计算命中率 (0.0 - 1.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_requests.load(Ordering::Relaxed);
        if total == 0 {
            return 0.0;
        }
        let hits = self.hits.load(Ordering::Relaxed);
        (hits as f64) / (total as f64)
    }

    /// 重置所有统计
    pub fn reset(&self) {
        self.total_requests.store(0, Ordering::Relaxed);
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.stores.store(0, Ordering::Relaxed);
        self.caches_created.store(0, Ordering::Relaxed);
    }
}

/// 缓存统计快照
#[derive(Debug, Clone, serde::Serialize)]
pub struct CacheMetricsSnapshot {
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub stores: u64,
    pub caches_created: u64,
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_read() {
        let metrics = CacheMetrics::new();

        metrics.record_request();
        metrics.record_hit();
        metrics.record_request();
        metrics.record_miss();
        metrics.record_store();
        metrics.record_cache_created();

        assert_eq!(metrics.total_requests(), 2);
        assert_eq!(metrics.hits(), 1);
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.stores(), 1);
        assert_eq!(metrics.caches_created(), 1);
    }

    #[test]
    fn test_hit_rate() {
        let metrics = CacheMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);

        metrics.record_request();
        metrics.record_hit();
        metrics.record_request();
        metrics.record_miss();

        assert!((metrics.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reset() {
        let metrics = CacheMetrics::new();

        metrics.record_request();
        metrics.record_hit();
        metrics.record_store();
        metrics.reset();

        assert_eq!(metrics.total_requests(), 0);
        assert_eq!(metrics.hits(), 0);
        assert_eq!(metrics.stores(), 0);
        assert_eq!(metrics.hit_rate(), 0.0);
    }
}
