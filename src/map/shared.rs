//! 共享哈希表 - 用一把互斥锁保护整张表

use crate::{
    error::ProbeError,
    map::probe_map::ProbeMap,
    stats::OperationStatsSnapshot,
    types::{Key, TableSize, Value},
};
use parking_lot::Mutex;

/// 可跨线程共享的探测哈希表
///
/// 探测过程会连续读取多个槽位，不能与并发修改交错，
/// 因此每个公开操作在整个执行期间独占整张表。
pub struct SharedProbeMap<K: Key, V: Value> {
    inner: Mutex<ProbeMap<K, V>>,
}

impl<K: Key, V: Value> SharedProbeMap<K, V> {
    pub fn new(map: ProbeMap<K, V>) -> Self {
        Self {
            inner: Mutex::new(map),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    /// 返回值的克隆
    pub fn get(&self, key: &K) -> Option<V> {
        self.inner.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: V) -> Result<Option<V>, ProbeError> {
        self.inner.lock().put(key, value)
    }

    pub fn delete(&self, key: &K) -> Option<V> {
        self.inner.lock().delete(key)
    }

    pub fn size(&self) -> TableSize {
        self.inner.lock().size()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> OperationStatsSnapshot {
        self.inner.lock().stats()
    }

    /// 持锁执行一段只读逻辑
    pub fn with_map<R>(&self, f: impl FnOnce(&ProbeMap<K, V>) -> R) -> R {
        f(&self.inner.lock())
    }

    /// 持锁执行一段读写逻辑，闭包内的多个操作不会被其他线程打断
    pub fn with_map_mut<R>(&self, f: impl FnOnce(&mut ProbeMap<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn into_inner(self) -> ProbeMap<K, V> {
        self.inner.into_inner()
    }
}

impl<K: Key, V: Value> From<ProbeMap<K, V>> for SharedProbeMap<K, V> {
    fn from(map: ProbeMap<K, V>) -> Self {
        Self::new(map)
    }
}

impl<K: Key, V: Value> std::fmt::Debug for SharedProbeMap<K, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(map) => f.debug_tuple("SharedProbeMap").field(&*map).finish(),
            None => write!(f, "SharedProbeMap(locked)"),
        }
    }
}
