//! 开放寻址哈希表核心实现

use crate::{
    error::ProbeError,
    hash::{
        is_coprime, linear_probe::ProbeSequence, HashStrategy, HashStrategyFactory,
        HashStrategyType, DEFAULT_ALPHA, DEFAULT_NDIGITS, MAX_NDIGITS,
    },
    map::{policy::InsertPolicy, slot::Slot},
    stats::{AtomicOperationStats, OperationRecorder, OperationStatsSnapshot},
    types::{Key, OperationType, TableSize, Value},
};
use std::{
    fmt::{self, Display},
    mem,
    sync::Arc,
};

/// 哈希表配置
#[derive(Clone, Debug, PartialEq)]
pub struct ProbeMapConfig {
    /// 槽位总数，构造后不再变化
    pub capacity: usize,
    /// 探测步长，必须与容量互质
    pub probe_step: usize,
    /// 乘法哈希的乘数
    pub alpha: f64,
    /// 乘法哈希保留的十进制位数
    pub ndigits: u32,
    pub hash: HashStrategyType,
    pub insert_policy: InsertPolicy,
}

impl ProbeMapConfig {
    /// 指定容量，其余参数取默认值
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            probe_step: 1,
            alpha: DEFAULT_ALPHA,
            ndigits: DEFAULT_NDIGITS,
            hash: HashStrategyType::Multiplicative,
            insert_policy: InsertPolicy::AppendToChain,
        }
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.capacity == 0 {
            return Err(ProbeError::invalid_config("capacity 必须大于 0"));
        }
        if self.probe_step == 0 {
            return Err(ProbeError::invalid_config("probe_step 必须大于 0"));
        }
        if !is_coprime(self.probe_step, self.capacity) {
            return Err(ProbeError::StepNotCoprime {
                step: self.probe_step,
                capacity: self.capacity,
            });
        }
        if self.hash == HashStrategyType::Multiplicative {
            if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha >= 1.0 {
                return Err(ProbeError::invalid_config(format!(
                    "alpha 必须位于 (0, 1) 区间，实际为 {}",
                    self.alpha
                )));
            }
            if self.ndigits == 0 || self.ndigits > MAX_NDIGITS {
                return Err(ProbeError::invalid_config(format!(
                    "ndigits 必须位于 1..={}，实际为 {}",
                    MAX_NDIGITS, self.ndigits
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProbeMode {
    Lookup,
    Insert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    /// 找到匹配键所在槽位
    Found(usize),
    /// 插入模式下第一个空位或墓碑
    Vacant(usize),
    /// 遇到从未使用的槽位，键不存在
    Absent,
    /// 探测序列走完仍未决
    Exhausted,
}

#[derive(Debug, Clone, Copy)]
struct Located {
    home: usize,
    resolution: Resolution,
    probes: usize,
}

/// 查找诊断结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    Found(usize),
    Absent,
    /// 访问了全部槽位仍无法判定，对外等同于不存在
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeReport {
    pub home: usize,
    pub outcome: ProbeOutcome,
    /// 访问的槽位数
    pub probes: usize,
}

/// 固定容量开放寻址哈希表
pub struct ProbeMap<K: Key, V: Value> {
    slots: Vec<Slot<K, V>>,
    capacity: usize,
    free_slots: usize,
    tombstones: usize,
    probe_step: usize,
    insert_policy: InsertPolicy,

    // 哈希策略
    hasher: Box<dyn HashStrategy>,

    // 统计记录器
    stats: Arc<dyn OperationRecorder>,
}

impl<K: Key, V: Value> ProbeMap<K, V> {
    /// 使用默认参数（步长 1、乘法哈希）创建
    pub fn new(capacity: usize) -> Result<Self, ProbeError> {
        Self::with_config(ProbeMapConfig::new(capacity))
    }

    /// 创建新键总是占据主槽位的有序链表
    pub fn ordered_chain(capacity: usize) -> Result<Self, ProbeError> {
        Self::with_config(ProbeMapConfig {
            insert_policy: InsertPolicy::DisplaceToHome,
            ..ProbeMapConfig::new(capacity)
        })
    }

    pub fn with_config(config: ProbeMapConfig) -> Result<Self, ProbeError> {
        config.validate()?;
        let hasher = HashStrategyFactory::new(config.hash, config.alpha, config.ndigits)
            .create_strategy(config.capacity)?;
        Self::with_hasher(config, hasher)
    }

    /// 使用自定义哈希策略创建，`config.hash`/`alpha`/`ndigits` 被忽略
    pub fn with_hasher(
        config: ProbeMapConfig,
        hasher: Box<dyn HashStrategy>,
    ) -> Result<Self, ProbeError> {
        config.validate()?;
        if hasher.capacity() != config.capacity {
            return Err(ProbeError::invalid_config(format!(
                "哈希策略容量 {} 与表容量 {} 不一致",
                hasher.capacity(),
                config.capacity
            )));
        }

        log_debug!(
            "probe map created: capacity={}, step={}, hash={:?}, policy={:?}",
            config.capacity,
            config.probe_step,
            hasher.strategy_type(),
            config.insert_policy
        );

        Ok(Self {
            slots: (0..config.capacity).map(|_| Slot::Empty).collect(),
            capacity: config.capacity,
            free_slots: config.capacity,
            tombstones: 0,
            probe_step: config.probe_step,
            insert_policy: config.insert_policy,
            hasher,
            stats: Arc::new(AtomicOperationStats::new()),
        })
    }

    /// 替换统计记录器，例如 `stats::global_recorder()`
    pub fn with_recorder(mut self, recorder: Arc<dyn OperationRecorder>) -> Self {
        self.stats = recorder;
        self
    }

    /// 键的主槽位
    pub fn home_slot(&self, key: &K) -> usize {
        // 策略返回越界值时回绕到表内
        self.hasher.home_slot(key.as_i128()) % self.capacity
    }

    /// 沿探测序列定位键
    ///
    /// 查找模式只在从未使用的槽位终止，越过墓碑继续；
    /// 插入模式在第一个空位或墓碑终止。最多访问 `capacity` 个槽位。
    fn locate(&self, key: &K, mode: ProbeMode) -> Located {
        let home = self.home_slot(key);
        let mut sequence = ProbeSequence::new(home, self.probe_step, self.capacity);

        let mut resolution = Resolution::Exhausted;
        for slot in sequence.by_ref() {
            resolution = match (&self.slots[slot], mode) {
                (Slot::Occupied(found, _), _) if found == key => Resolution::Found(slot),
                (Slot::Occupied(..), _) => continue,
                (Slot::Empty, ProbeMode::Lookup) => Resolution::Absent,
                (Slot::Tombstone, ProbeMode::Lookup) => continue,
                (Slot::Empty | Slot::Tombstone, ProbeMode::Insert) => Resolution::Vacant(slot),
            };
            break;
        }

        Located {
            home,
            resolution,
            probes: sequence.probes(),
        }
    }

    /// 查找模式定位并记录统计，返回匹配槽位
    fn lookup(&self, key: &K, op_type: OperationType) -> Option<usize> {
        let located = self.locate(key, ProbeMode::Lookup);
        match located.resolution {
            Resolution::Found(slot) => {
                self.stats.record(op_type, located.probes, true);
                Some(slot)
            }
            Resolution::Exhausted => {
                log_debug!(
                    "probe sequence exhausted for key={} after {} probes",
                    key,
                    located.probes
                );
                self.stats.record_probe_exhausted();
                self.stats.record(op_type, located.probes, false);
                None
            }
            _ => {
                self.stats.record(op_type, located.probes, false);
                None
            }
        }
    }

    /// 键是否存在
    pub fn contains(&self, key: &K) -> bool {
        self.lookup(key, OperationType::Contains).is_some()
    }

    /// 获取键对应的值，键不存在时返回 `None`
    pub fn get(&self, key: &K) -> Option<&V> {
        let slot = self.lookup(key, OperationType::Get)?;
        self.slots[slot].value()
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = self.lookup(key, OperationType::Get)?;
        self.slots[slot].value_mut()
    }

    /// 插入或更新
    ///
    /// 键已存在时原地覆盖并返回旧值，即使表已满也会成功；
    /// 新键在没有空闲槽位时返回 [`ProbeError::CapacityExhausted`]，表保持不变。
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, ProbeError> {
        let located = self.locate(&key, ProbeMode::Lookup);
        if let Resolution::Found(slot) = located.resolution {
            self.stats.record(OperationType::Update, located.probes, true);
            let previous = self.slots[slot]
                .value_mut()
                .map(|current| mem::replace(current, value));
            return Ok(previous);
        }

        if self.free_slots == 0 {
            log_warn!(
                "unable to insert key={}: no free slots (capacity={})",
                key,
                self.capacity
            );
            self.stats.record_capacity_error();
            self.stats.record(OperationType::Put, located.probes, false);
            return Err(ProbeError::CapacityExhausted {
                capacity: self.capacity,
            });
        }

        let vacancy = self.locate(&key, ProbeMode::Insert);
        let vacant = match vacancy.resolution {
            Resolution::Vacant(slot) => slot,
            other => {
                log_error!(
                    "no vacant slot for key={} with {} free slots ({:?} after {} probes)",
                    key,
                    self.free_slots,
                    other,
                    vacancy.probes
                );
                self.stats.record_probe_exhausted();
                self.stats.record(OperationType::Put, vacancy.probes, false);
                return Err(ProbeError::ProbeExhausted {
                    probes: vacancy.probes,
                });
            }
        };

        if self.slots[vacant].is_tombstone() {
            self.tombstones -= 1;
        }
        let displaced = self.insert_policy.place(
            &mut self.slots,
            vacancy.home,
            self.probe_step,
            vacant,
            key,
            value,
        );
        self.free_slots -= 1;

        self.stats.record(OperationType::Put, vacancy.probes, true);
        if displaced > 0 {
            self.stats.record_shift(displaced);
        }
        Ok(None)
    }

    /// 删除键，返回被删除的值；键不存在时返回 `None`
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let slot = match self.lookup(key, OperationType::Delete) {
            Some(slot) => slot,
            None => {
                log_debug!("there is no entry for key={} inside table", key);
                return None;
            }
        };

        let removed = mem::replace(&mut self.slots[slot], Slot::Tombstone);
        self.free_slots += 1;
        self.tombstones += 1;
        removed.into_value()
    }

    /// 诊断用：查找模式定位的详细结果，不计入统计
    pub fn probe(&self, key: &K) -> ProbeReport {
        let located = self.locate(key, ProbeMode::Lookup);
        let outcome = match located.resolution {
            Resolution::Found(slot) => ProbeOutcome::Found(slot),
            Resolution::Exhausted => ProbeOutcome::Exhausted,
            Resolution::Absent | Resolution::Vacant(_) => ProbeOutcome::Absent,
        };
        ProbeReport {
            home: located.home,
            outcome,
            probes: located.probes,
        }
    }

    /// 总槽位数与剩余可用槽位数
    pub fn size(&self) -> TableSize {
        TableSize {
            capacity: self.capacity,
            free_slots: self.free_slots,
        }
    }

    /// 当前存储的键数
    pub fn len(&self) -> usize {
        self.capacity - self.free_slots
    }

    pub fn is_empty(&self) -> bool {
        self.free_slots == self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.free_slots == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn free_slots(&self) -> usize {
        self.free_slots
    }

    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    pub fn probe_step(&self) -> usize {
        self.probe_step
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        self.insert_policy
    }

    pub fn hash_strategy(&self) -> HashStrategyType {
        self.hasher.strategy_type()
    }

    /// 按槽位顺序的全部槽位
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// 每个槽位是否为墓碑
    pub fn tombstone_mask(&self) -> Vec<bool> {
        self.slots.iter().map(Slot::is_tombstone).collect()
    }

    /// 按槽位顺序遍历存活记录
    pub fn iter(&self) -> ProbeMapIter<'_, K, V> {
        ProbeMapIter {
            inner: self.slots.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// 获取统计快照
    pub fn stats(&self) -> OperationStatsSnapshot {
        self.stats.snapshot()
    }

    pub fn export_prometheus(&self) -> String {
        self.stats.export_prometheus()
    }
}

impl<K: Key, V: Value> fmt::Debug for ProbeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeMap")
            .field("capacity", &self.capacity)
            .field("free_slots", &self.free_slots)
            .field("tombstones", &self.tombstones)
            .field("probe_step", &self.probe_step)
            .field("hash", &self.hasher.strategy_type())
            .field("insert_policy", &self.insert_policy)
            .finish()
    }
}

/// 按槽位顺序逐个输出，空位为 `(None, None)`，墓碑为 `(<deleted>)`
impl<K: Key, V: Value + Display> Display for ProbeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}

/// 存活记录迭代器
pub struct ProbeMapIter<'a, K, V> {
    inner: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for ProbeMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find_map(Slot::entry)
    }
}

impl<'a, K: Key, V: Value> IntoIterator for &'a ProbeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = ProbeMapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
