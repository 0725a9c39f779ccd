//! # Cache Configuration
//!
//! 缓存配置。
//!
//! ## 配置选项
//!
//! - `kind_prefix`: 命名空间前缀（用于多实例隔离）
//! - `enable_metrics`: 是否启用统计信息收集
//!
//! ## 示例
//!
//! ```rust
//! use typed_weak_cache::CacheConfig;
//!
//! // 使用默认配置
//! let config = CacheConfig::default();
//!
//! // 自定义配置
//! let config = CacheConfig::default()
//!     .with_kind_prefix("analysis".to_string())
//!     .with_metrics(false);
//! ```

use serde::{Deserialize, Serialize};

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// 命名空间前缀
    ///
    /// 多个实例共享命名空间约定时用于隔离，防止不同用途的缓存冲突。
    /// 示例：`"analysis"`, `"session-1"`
    pub kind_prefix: Option<String>,

    /// 是否启用统计信息收集
    ///
    /// 关闭后所有计数器保持为 0。
    pub enable_metrics: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            kind_prefix: None,
            enable_metrics: true,
        }
    }
}

impl CacheConfig {
    /// 创建默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置命名空间前缀
    pub fn with_kind_prefix(mut self, prefix: String) -> Self {
        self.kind_prefix = Some(prefix);
        self
    }

    /// 设置是否启用统计信息收集
    pub fn with_metrics(mut self, enable: bool) -> Self {
        self.enable_metrics = enable;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CacheConfig::default();
        assert!(config.kind_prefix.is_none());
        assert!(config.enable_metrics);
    }

    #[test]
    fn test_builder_pattern() {
        let config = CacheConfig::default()
            .with_kind_prefix("analysis".to_string())
            .with_metrics(false);

        assert_eq!(config.kind_prefix, Some("analysis".to_string()));
        assert!(!config.enable_metrics);
    }
}
