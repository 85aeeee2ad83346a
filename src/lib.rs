//! 固定容量开放寻址哈希表
//!
//! 预分配槽位数组，使用乘法哈希计算主槽位，以与容量互质的步长线性探测，
//! 删除时留下墓碑。表不会扩容或缩容，空闲槽位耗尽后插入新键会失败。
//!
//! ## 主要特性
//! - 乘法哈希 `floor(frac(key * alpha) * 10^n) mod capacity`，也可切换为取模或 ahash/xxHash
//! - 任意与容量互质的探测步长
//! - 墓碑删除：查找越过墓碑继续，插入复用墓碑
//! - 有序链插入策略：最新插入的键占据主槽位，旧记录沿探测序列后移
//! - 操作与探测长度统计，可导出Prometheus格式
//!
//! ## 特性开关
//! - `logging`（默认开启）：通过 `log` 输出调试日志。
//!   `--no-default-features` 关闭后日志宏为空操作，参数仍会参与类型检查。
//!
//! ## 快速开始
//!
//! ```rust
//! use probe_hashtable::*;
//!
//! fn main() -> Result<(), ProbeError> {
//!     // 创建 10 个槽位的哈希表
//!     let mut map: ProbeMap<i64, &str> = ProbeMap::new(10)?;
//!
//!     // 插入键值对
//!     map.put(42, "value1")?;
//!
//!     // 获取值
//!     if let Some(value) = map.get(&42) {
//!         println!("42: {}", value);
//!     }
//!
//!     // 删除键
//!     map.delete(&42);
//!     assert_eq!(map.size(), TableSize { capacity: 10, free_slots: 10 });
//!
//!     // 打印所有槽位
//!     println!("{}", map);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

#[doc(hidden)]
pub use log as __log;

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::__log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::__log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::__log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::__log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        if false {
            let _ = format_args!($($arg)*);
        }
    }};
}

// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod stats;

// 公共接口导出
pub use crate::{
    error::ProbeError,
    hash::{
        default_hash_strategy, HashAlgorithm, HashStrategy, HashStrategyType, KeyedHashStrategy,
        ModuloHashStrategy, MultiplicativeHashStrategy, ProbeSequence, DEFAULT_ALPHA,
        DEFAULT_NDIGITS,
    },
    map::{
        InsertPolicy, ProbeMap, ProbeMapConfig, ProbeOutcome, ProbeReport, SharedProbeMap, Slot,
    },
    stats::{export_prometheus, operation_snapshot, reset_stats, OperationStatsSnapshot},
    types::{Key, OperationType, TableSize, Value},
};

/// 批量插入，返回成功的条数
///
/// 容量耗尽的条目被跳过，不会中断后续插入。
pub fn batch_put<K: Key, V: Value>(
    map: &mut ProbeMap<K, V>,
    items: impl IntoIterator<Item = (K, V)>,
) -> usize {
    let mut count = 0;
    for (k, v) in items {
        match map.put(k, v) {
            Ok(_) => count += 1,
            Err(e) => {
                log_debug!("batch put skipped key={}: {}", k, e);
            }
        }
    }
    count
}

/// 批量查询
pub fn batch_get<'a, K: Key, V: Value>(
    map: &'a ProbeMap<K, V>,
    keys: impl IntoIterator<Item = &'a K>,
) -> Vec<Option<&'a V>> {
    keys.into_iter().map(|k| map.get(k)).collect()
}
