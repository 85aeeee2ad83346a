//! 乘法哈希策略 - 取 `key * alpha` 的小数部分放大到 n 位十进制后对容量取模

use crate::{
    error::ProbeError,
    hash::strategy::{HashStrategy, HashStrategyType},
};

/// 默认乘数 1/π
pub const DEFAULT_ALPHA: f64 = std::f64::consts::FRAC_1_PI;
/// 默认取小数部分的十进制位数
pub const DEFAULT_NDIGITS: u32 = 10;
/// `10^n` 必须能放进 u64
pub const MAX_NDIGITS: u32 = 18;

/// 乘法哈希策略
#[derive(Debug, Clone, Copy)]
pub struct MultiplicativeHashStrategy {
    alpha: f64,
    scale: f64,
    capacity: usize,
}

impl MultiplicativeHashStrategy {
    /// 创建新乘法哈希策略，参数越界时返回配置错误
    pub fn new(capacity: usize, alpha: f64, ndigits: u32) -> Result<Self, ProbeError> {
        if capacity == 0 {
            return Err(ProbeError::invalid_config("capacity 必须大于 0"));
        }
        if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
            return Err(ProbeError::invalid_config(format!(
                "alpha 必须位于 (0, 1) 区间，实际为 {}",
                alpha
            )));
        }
        if ndigits == 0 || ndigits > MAX_NDIGITS {
            return Err(ProbeError::invalid_config(format!(
                "ndigits 必须位于 1..={}，实际为 {}",
                MAX_NDIGITS, ndigits
            )));
        }

        Ok(Self {
            alpha,
            scale: 10f64.powi(ndigits as i32),
            capacity,
        })
    }

    /// 使用默认参数创建
    pub fn with_defaults(capacity: usize) -> Result<Self, ProbeError> {
        Self::new(capacity, DEFAULT_ALPHA, DEFAULT_NDIGITS)
    }
}

impl HashStrategy for MultiplicativeHashStrategy {
    fn home_slot(&self, key: i128) -> usize {
        // 欧几里得取余，负键的小数部分同样落在 [0, 1)
        let frac = (key as f64 * self.alpha).rem_euclid(1.0);
        let scaled = (frac * self.scale).floor();
        if !scaled.is_finite() {
            return 0;
        }
        // f64 -> u64 转换饱和，结果再对容量取模
        ((scaled as u64) % self.capacity as u64) as usize
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn strategy_type(&self) -> HashStrategyType {
        HashStrategyType::Multiplicative
    }

    fn clone_box(&self) -> Box<dyn HashStrategy> {
        Box::new(*self)
    }
}
