//! 核心类型定义 - 共享类型和接口

use std::fmt::{self, Debug, Display};

/// 键特征 - 整数键
///
/// 乘法哈希需要在实数上计算 `key * alpha`，因此键被限定为整数类型，
/// 统一拓宽为 `i128` 交给哈希策略。
pub trait Key: Copy + Eq + Debug + Display + Send + Sync + 'static {
    /// 拓宽为 `i128`
    fn as_i128(&self) -> i128;
}

macro_rules! impl_int_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl Key for $t {
                #[inline]
                fn as_i128(&self) -> i128 {
                    *self as i128
                }
            }
        )*
    };
}

impl_int_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// 值类型 - 要求可克隆
pub trait Value: Clone + Debug + 'static {}

impl<T: Clone + Debug + 'static> Value for T {}

/// 表大小：总槽位数与剩余可用槽位数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSize {
    pub capacity: usize,
    pub free_slots: usize,
}

impl TableSize {
    /// 已占用槽位数
    pub fn occupied(&self) -> usize {
        self.capacity - self.free_slots
    }

    /// 负载因子
    pub fn load_factor(&self) -> f64 {
        self.occupied() as f64 / self.capacity as f64
    }
}

impl Display for TableSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.capacity, self.free_slots)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入新键
    Put,
    /// 覆盖已有键的值
    Update,
    /// 查询
    Get,
    /// 存在性检查
    Contains,
    /// 删除
    Delete,
}

impl OperationType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::Update => "update",
            Self::Get => "get",
            Self::Contains => "contains",
            Self::Delete => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_widening() {
        assert_eq!((-3i32).as_i128(), -3);
        assert_eq!(u64::MAX.as_i128(), u64::MAX as i128);
        assert_eq!(7usize.as_i128(), 7);
    }

    #[test]
    fn test_table_size() {
        let size = TableSize { capacity: 10, free_slots: 4 };
        assert_eq!(size.occupied(), 6);
        assert!((size.load_factor() - 0.6).abs() < f64::EPSILON);
        assert_eq!(size.to_string(), "(10, 4)");
    }
}
