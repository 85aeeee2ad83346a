//! 取模哈希策略 - `key mod capacity`，碰撞完全可预测

use crate::hash::strategy::{HashStrategy, HashStrategyType};

#[derive(Debug, Clone, Copy)]
pub struct ModuloHashStrategy {
    capacity: usize,
}

impl ModuloHashStrategy {
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl HashStrategy for ModuloHashStrategy {
    fn home_slot(&self, key: i128) -> usize {
        key.rem_euclid(self.capacity.max(1) as i128) as usize
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn strategy_type(&self) -> HashStrategyType {
        HashStrategyType::Modulo
    }

    fn clone_box(&self) -> Box<dyn HashStrategy> {
        Box::new(*self)
    }
}
