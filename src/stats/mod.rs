//! 统计模块 - 统一管理哈希表操作指标

pub mod operation;

use std::sync::Arc;

pub use operation::{
    AtomicOperationStats, DisabledOperationRecorder, OperationRecorder, OperationStatsSnapshot,
};

/// 全局统计记录器
pub static GLOBAL_STATS: once_cell::sync::Lazy<Arc<AtomicOperationStats>> =
    once_cell::sync::Lazy::new(|| Arc::new(AtomicOperationStats::new()));

/// 全局记录器的共享句柄，可传给 `ProbeMap::with_recorder`
pub fn global_recorder() -> Arc<dyn OperationRecorder> {
    Arc::<AtomicOperationStats>::clone(&GLOBAL_STATS)
}

/// 获取操作统计快照
pub fn operation_snapshot() -> OperationStatsSnapshot {
    GLOBAL_STATS.snapshot()
}

/// 重置所有统计
pub fn reset_stats() {
    GLOBAL_STATS.reset();
}

/// 导出Prometheus格式指标
pub fn export_prometheus() -> String {
    GLOBAL_STATS.export_prometheus()
}
