// src/stats/operation.rs
//! 操作统计 - 跟踪哈希表操作次数与探测长度

use crate::types::OperationType;
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计接口
pub trait OperationRecorder: Send + Sync {
    /// 记录一次操作及其访问的槽位数
    fn record(&self, op_type: OperationType, probes: usize, success: bool);

    /// 记录有序链插入时被后移的记录数
    fn record_shift(&self, displaced: usize);

    /// 记录一次容量耗尽
    fn record_capacity_error(&self);

    /// 记录一次探测序列耗尽
    fn record_probe_exhausted(&self);

    /// 获取操作统计快照
    fn snapshot(&self) -> OperationStatsSnapshot;

    /// 重置统计
    fn reset(&self);

    /// 导出Prometheus格式指标
    fn export_prometheus(&self) -> String;
}

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OperationStatsSnapshot {
    pub put_count: u64,
    pub update_count: u64,
    pub get_count: u64,
    pub contains_count: u64,
    pub delete_count: u64,
    pub hit_count: u64,
    pub miss_count: u64,
    pub total_probes: u64,
    pub max_probes: u64,
    pub shift_count: u64,
    pub capacity_error_count: u64,
    pub probe_exhausted_count: u64,
}

impl OperationStatsSnapshot {
    /// 操作总数
    pub fn total_operations(&self) -> u64 {
        self.put_count
            + self.update_count
            + self.get_count
            + self.contains_count
            + self.delete_count
    }

    /// 平均探测长度
    pub fn average_probes(&self) -> f64 {
        let total = self.total_operations();
        if total == 0 {
            0.0
        } else {
            self.total_probes as f64 / total as f64
        }
    }

    fn count_of(&self, op_type: OperationType) -> u64 {
        match op_type {
            OperationType::Put => self.put_count,
            OperationType::Update => self.update_count,
            OperationType::Get => self.get_count,
            OperationType::Contains => self.contains_count,
            OperationType::Delete => self.delete_count,
        }
    }
}

/// 原子操作统计
#[derive(Debug, Default)]
pub struct AtomicOperationStats {
    put_count: AtomicU64,
    update_count: AtomicU64,
    get_count: AtomicU64,
    contains_count: AtomicU64,
    delete_count: AtomicU64,
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    total_probes: AtomicU64,
    max_probes: AtomicU64,
    shift_count: AtomicU64,
    capacity_error_count: AtomicU64,
    probe_exhausted_count: AtomicU64,
}

impl AtomicOperationStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::Put => &self.put_count,
            OperationType::Update => &self.update_count,
            OperationType::Get => &self.get_count,
            OperationType::Contains => &self.contains_count,
            OperationType::Delete => &self.delete_count,
        }
    }
}

impl OperationRecorder for AtomicOperationStats {
    fn record(&self, op_type: OperationType, probes: usize, success: bool) {
        self.counter(op_type).fetch_add(1, Ordering::Relaxed);

        let probes = probes as u64;
        self.total_probes.fetch_add(probes, Ordering::Relaxed);
        self.max_probes.fetch_max(probes, Ordering::Relaxed);

        if success {
            self.hit_count.fetch_add(1, Ordering::Relaxed);
        } else {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_shift(&self, displaced: usize) {
        self.shift_count.fetch_add(displaced as u64, Ordering::Relaxed);
    }

    fn record_capacity_error(&self) {
        self.capacity_error_count.fetch_add(1, Ordering::Relaxed);
    }

    fn record_probe_exhausted(&self) {
        self.probe_exhausted_count.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot {
            put_count: self.put_count.load(Ordering::Relaxed),
            update_count: self.update_count.load(Ordering::Relaxed),
            get_count: self.get_count.load(Ordering::Relaxed),
            contains_count: self.contains_count.load(Ordering::Relaxed),
            delete_count: self.delete_count.load(Ordering::Relaxed),
            hit_count: self.hit_count.load(Ordering::Relaxed),
            miss_count: self.miss_count.load(Ordering::Relaxed),
            total_probes: self.total_probes.load(Ordering::Relaxed),
            max_probes: self.max_probes.load(Ordering::Relaxed),
            shift_count: self.shift_count.load(Ordering::Relaxed),
            capacity_error_count: self.capacity_error_count.load(Ordering::Relaxed),
            probe_exhausted_count: self.probe_exhausted_count.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for counter in [
            &self.put_count,
            &self.update_count,
            &self.get_count,
            &self.contains_count,
            &self.delete_count,
            &self.hit_count,
            &self.miss_count,
            &self.total_probes,
            &self.max_probes,
            &self.shift_count,
            &self.capacity_error_count,
            &self.probe_exhausted_count,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }

    fn export_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        let mut output = String::new();

        let op_types = [
            OperationType::Put,
            OperationType::Update,
            OperationType::Get,
            OperationType::Contains,
            OperationType::Delete,
        ];

        for op in op_types {
            output.push_str(&format!(
                "# HELP probe_operation_{}_count Total {} operations\n",
                op.name(),
                op.name()
            ));
            output.push_str(&format!("# TYPE probe_operation_{}_count counter\n", op.name()));
            output.push_str(&format!(
                "probe_operation_{}_count {}\n",
                op.name(),
                snapshot.count_of(op)
            ));
        }

        let totals = [
            (
                "probe_slots_visited_total",
                "Total slots visited while probing",
                snapshot.total_probes,
            ),
            ("probe_lookup_hit_count", "Operations that found their key", snapshot.hit_count),
            ("probe_lookup_miss_count", "Operations that missed their key", snapshot.miss_count),
            (
                "probe_shift_count",
                "Records displaced by ordered-chain inserts",
                snapshot.shift_count,
            ),
            (
                "probe_capacity_error_count",
                "Puts rejected for lack of free slots",
                snapshot.capacity_error_count,
            ),
            (
                "probe_exhausted_count",
                "Probe sequences that ran out of slots",
                snapshot.probe_exhausted_count,
            ),
        ];
        for (name, help, value) in totals {
            output.push_str(&format!("# HELP {} {}\n", name, help));
            output.push_str(&format!("# TYPE {} counter\n", name));
            output.push_str(&format!("{} {}\n", name, value));
        }

        output.push_str("# HELP probe_max_probe_length Longest probe sequence observed\n");
        output.push_str("# TYPE probe_max_probe_length gauge\n");
        output.push_str(&format!("probe_max_probe_length {}\n", snapshot.max_probes));

        output
    }
}

/// 禁用操作统计实现
#[derive(Debug, Default)]
pub struct DisabledOperationRecorder;

impl OperationRecorder for DisabledOperationRecorder {
    fn record(&self, _op_type: OperationType, _probes: usize, _success: bool) {}
    fn record_shift(&self, _displaced: usize) {}
    fn record_capacity_error(&self) {}
    fn record_probe_exhausted(&self) {}
    fn snapshot(&self) -> OperationStatsSnapshot {
        OperationStatsSnapshot::default()
    }
    fn reset(&self) {}
    fn export_prometheus(&self) -> String {
        String::new()
    }
}
