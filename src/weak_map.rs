//! # Weak Key Map
//!
//! 身份键弱引用存储。
//!
//! 以 `Rc` 分配地址作为键的哈希表，对键对象只保留 `Weak` 引用。
//! 两个内容相同但分配不同的对象是两个不同的键；键对象的最后一个
//! 强引用被释放后，条目变为死条目，读取时视为缺失，并在后续写入
//! 时被批量清理。
//!
//! ## 身份键的有效性
//!
//! 条目持有的 `Weak` 会钉住 `Rc` 的分配（值本身照常析构），
//! 因此条目存在期间其地址不可能被新分配复用，地址相等即对象相同。
//!
//! ## 清理策略
//!
//! 死条目在 `insert` 时按阈值翻倍的节奏批量清理，摊还 O(1)。
//! 清理对外不可见：死条目在被清理之前读取结果就已经是缺失。

use std::collections::HashMap;
use std::rc::{Rc, Weak};

/// 清理阈值下限
const MIN_SWEEP_THRESHOLD: usize = 8;

/// 身份键弱引用存储
///
/// `TypedWeakCache` 的子缓存类型，也可单独使用。
#[derive(Debug)]
pub struct WeakKeyMap<K, V> {
    /// 条目表，键为 `Rc` 分配地址
    entries: HashMap<usize, Entry<K, V>>,
    /// 下次触发清理的条目数
    sweep_at: usize,
}

#[derive(Debug)]
struct Entry<K, V> {
    key: Weak<K>,
    value: V,
}

impl<K, V> WeakKeyMap<K, V> {
    /// 创建空存储
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            sweep_at: MIN_SWEEP_THRESHOLD,
        }
    }

    /// 插入或覆盖条目
    ///
    /// # 参数
    /// - `key`: 键对象，只保留弱引用
    /// - `value`: 关联值
    ///
    /// # 返回
    /// - `Option<V>`: 同一键对象之前的值（如有）
    pub fn insert(&mut self, key: &Rc<K>, value: V) -> Option<V> {
        self.sweep_if_due();
        let entry = Entry {
            key: Rc::downgrade(key),
            value,
        };
        self.entries
            .insert(Self::address(key), entry)
            .map(|old| old.value)
    }

    /// 读取键对象关联的值
    pub fn get(&self, key: &Rc<K>) -> Option<&V> {
        self.entries
            .get(&Self::address(key))
            .filter(|entry| entry.key.strong_count() > 0)
            .map(|entry| &entry.value)
    }

    /// 检查键对象是否有存活条目
    pub fn contains_key(&self, key: &Rc<K>) -> bool {
        self.get(key).is_some()
    }

    /// 移除键对象的条目
    ///
    /// # 返回
    /// - `Option<V>`: 被移除的值（条目存活时）
    pub fn remove(&mut self, key: &Rc<K>) -> Option<V> {
        self.entries
            .remove(&Self::address(key))
            .filter(|entry| entry.key.strong_count() > 0)
            .map(|entry| entry.value)
    }

    /// 清理死条目
    ///
    /// 条目数达到阈值时执行，之后阈值重置为存活条目数的两倍。
    fn sweep_if_due(&mut self) {
        if self.entries.len() < self.sweep_at {
            return;
        }

        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.key.strong_count() > 0);
        let swept = before - self.entries.len();

        self.sweep_at = (self.entries.len() * 2).max(MIN_SWEEP_THRESHOLD);

        if swept > 0 {
            tracing::trace!("Swept {} dead cache entries", swept);
        }
    }

    fn address(key: &Rc<K>) -> usize {
        Rc::as_ptr(key) as usize
    }
}

impl<K, V> Default for WeakKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
