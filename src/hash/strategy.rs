//! 哈希策略模块 - 定义主槽位定位策略

use crate::{
    error::ProbeError,
    hash::{KeyedHashStrategy, ModuloHashStrategy, MultiplicativeHashStrategy},
};

/// 哈希策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashStrategyType {
    /// `floor(frac(key * alpha) * 10^n) mod capacity`
    Multiplicative,
    /// `key mod capacity`
    Modulo,
    /// 对键的字节表示做通用哈希
    Keyed(HashAlgorithm),
}

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    AHash,
    XxHash,
    Default,
}

/// 哈希策略特征
///
/// 实现必须是键的纯函数，且返回值位于 `[0, capacity)`。
pub trait HashStrategy: Send + Sync {
    /// 计算键的主槽位
    fn home_slot(&self, key: i128) -> usize;

    /// 策略针对的表容量
    fn capacity(&self) -> usize;

    /// 获取策略类型
    fn strategy_type(&self) -> HashStrategyType;

    /// 克隆策略
    fn clone_box(&self) -> Box<dyn HashStrategy>;
}

impl Clone for Box<dyn HashStrategy> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// 哈希函数特征
pub trait HasherFunction: Send + Sync {
    fn hash_bytes(&self, data: &[u8]) -> u64;
}

impl<T> HasherFunction for T
where
    T: Fn(&[u8]) -> u64 + Send + Sync,
{
    fn hash_bytes(&self, data: &[u8]) -> u64 {
        self(data)
    }
}

/// 哈希策略工厂
#[derive(Debug, Clone, Copy)]
pub struct HashStrategyFactory {
    strategy_type: HashStrategyType,
    alpha: f64,
    ndigits: u32,
}

impl HashStrategyFactory {
    /// 创建新工厂，`alpha`/`ndigits` 仅对乘法哈希生效
    pub fn new(strategy_type: HashStrategyType, alpha: f64, ndigits: u32) -> Self {
        Self {
            strategy_type,
            alpha,
            ndigits,
        }
    }

    /// 创建哈希策略
    pub fn create_strategy(&self, capacity: usize) -> Result<Box<dyn HashStrategy>, ProbeError> {
        if capacity == 0 {
            return Err(ProbeError::invalid_config("capacity 必须大于 0"));
        }
        let strategy: Box<dyn HashStrategy> = match self.strategy_type {
            HashStrategyType::Multiplicative => Box::new(MultiplicativeHashStrategy::new(
                capacity,
                self.alpha,
                self.ndigits,
            )?),
            HashStrategyType::Modulo => Box::new(ModuloHashStrategy::new(capacity)),
            HashStrategyType::Keyed(algorithm) => {
                Box::new(KeyedHashStrategy::new(capacity, algorithm))
            }
        };
        Ok(strategy)
    }
}
