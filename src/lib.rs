//! # typed-weak-cache
//!
//! 多命名空间弱引用缓存库。
//!
//! 一个进程内缓存容器：按命名空间（"类型"）惰性创建相互独立的子缓存。
//! 子缓存以对象身份（而非值相等）作为键，并且对键只持有弱引用，
//! 一旦键对象在程序其他位置不再被引用，对应条目即可被回收，
//! 调用方无需任何手动失效协议。
//!
//! ## 模块结构
//!
//! - `config`: 缓存配置
//! - `metrics`: 缓存统计
//! - `typed`: 多命名空间缓存容器
//! - `weak_map`: 身份键弱引用存储
//!
//! ## 特性
//!
//! - 命名空间惰性创建（只有 `set` 会创建子缓存，读操作不会）
//! - 身份键：内容相同但分配不同的两个对象互不冲突
//! - 弱持有：缓存永远不会独自维持键对象存活
//! - 缓存统计（命中率等）
//!
//! ## 使用模型
//!
//! 单线程同步使用。键以 `Rc` 持有，容器因此不是 `Send`，
//! 跨线程使用需要调用方自行改造，编译器会直接拒绝误用。
//!
//! ## 示例
//!
//! ```rust
//! use std::rc::Rc;
//! use typed_weak_cache::TypedWeakCache;
//!
//! let mut cache: TypedWeakCache<String, u32> = TypedWeakCache::new();
//!
//! let node = Rc::new("fn main() {}".to_string());
//!
//! // 首次 set 时惰性创建 "astCache" 子缓存
//! cache.set("astCache", &node, 42);
//!
//! assert_eq!(cache.get("astCache", &node), Some(&42));
//! assert!(cache.has("astCache", &node));
//!
//! // 其他命名空间不受影响
//! assert!(!cache.has("scopeCache", &node));
//! ```

pub mod config;
pub mod metrics;
pub mod typed;
pub mod weak_map;

pub use config::CacheConfig;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use typed::TypedWeakCache;
pub use weak_map::WeakKeyMap;
