//! 哈希模块 - 主槽位计算与探测序列

pub mod strategy;
pub mod multiplicative;
pub mod modulo;
pub mod keyed;
pub mod linear_probe;

pub use strategy::{HashAlgorithm, HashStrategy, HashStrategyFactory, HashStrategyType};
pub use multiplicative::{MultiplicativeHashStrategy, DEFAULT_ALPHA, DEFAULT_NDIGITS, MAX_NDIGITS};
pub use modulo::ModuloHashStrategy;
pub use keyed::KeyedHashStrategy;
pub use linear_probe::ProbeSequence;

use crate::error::ProbeError;

/// 默认哈希策略
pub fn default_hash_strategy(capacity: usize) -> Result<Box<dyn HashStrategy>, ProbeError> {
    Ok(Box::new(MultiplicativeHashStrategy::with_defaults(capacity)?))
}

/// 哈希工具函数
pub fn calculate_slot(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}

/// 最大公约数
pub fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// 步长与容量是否互质
pub fn is_coprime(step: usize, capacity: usize) -> bool {
    gcd(step, capacity) == 1
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hash_strategy() {
        let strategy = default_hash_strategy(100).unwrap();
        assert_eq!(strategy.strategy_type(), HashStrategyType::Multiplicative);
        assert!(strategy.home_slot(123_456) < 100);
        assert!(default_hash_strategy(0).is_err());
    }

    #[test]
    fn test_slot_calculation() {
        assert_eq!(calculate_slot(123, 100), 23);
    }

    #[test]
    fn test_gcd_and_coprime() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert!(is_coprime(2, 7));
        assert!(is_coprime(1, 1));
        assert!(!is_coprime(2, 4));
        assert!(!is_coprime(0, 5));
        assert!(is_coprime(0, 1));
    }
}
