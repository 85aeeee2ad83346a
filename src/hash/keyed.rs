//! 通用哈希策略 - 对键的小端字节表示做 ahash / xxHash / SipHash

use crate::hash::strategy::{HashAlgorithm, HashStrategy, HashStrategyType, HasherFunction};
use ahash::RandomState;
use std::{
    hash::{BuildHasher, Hash, Hasher},
    sync::Arc,
};

const DEFAULT_SEED: usize = 42;

/// 通用哈希策略
#[derive(Clone)]
pub struct KeyedHashStrategy {
    hasher: Arc<dyn HasherFunction>,
    algorithm: HashAlgorithm,
    capacity: usize,
}

impl KeyedHashStrategy {
    /// 创建新通用哈希策略
    pub fn new(capacity: usize, algorithm: HashAlgorithm) -> Self {
        Self::with_seed(capacity, algorithm, DEFAULT_SEED)
    }

    /// 使用指定种子创建
    pub fn with_seed(capacity: usize, algorithm: HashAlgorithm, seed: usize) -> Self {
        Self {
            hasher: Self::build_hasher_function(algorithm, seed),
            algorithm,
            capacity,
        }
    }

    /// 构建哈希函数
    fn build_hasher_function(algorithm: HashAlgorithm, seed: usize) -> Arc<dyn HasherFunction> {
        match algorithm {
            HashAlgorithm::AHash => {
                let state = RandomState::with_seed(seed);
                Arc::new(move |data: &[u8]| {
                    let mut hasher = state.build_hasher();
                    data.hash(&mut hasher);
                    hasher.finish()
                })
            }
            HashAlgorithm::XxHash => {
                let seed = seed as u64;
                Arc::new(move |data: &[u8]| {
                    let mut hasher = twox_hash::XxHash64::with_seed(seed);
                    data.hash(&mut hasher);
                    hasher.finish()
                })
            }
            HashAlgorithm::Default => Arc::new(|data: &[u8]| {
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                data.hash(&mut hasher);
                hasher.finish()
            }),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

impl std::fmt::Debug for KeyedHashStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedHashStrategy")
            .field("algorithm", &self.algorithm)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl HashStrategy for KeyedHashStrategy {
    fn home_slot(&self, key: i128) -> usize {
        let hash = self.hasher.hash_bytes(&key.to_le_bytes());
        super::calculate_slot(hash, self.capacity)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn strategy_type(&self) -> HashStrategyType {
        HashStrategyType::Keyed(self.algorithm)
    }

    fn clone_box(&self) -> Box<dyn HashStrategy> {
        Box::new(self.clone())
    }
}
