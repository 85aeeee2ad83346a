//! 槽位 - 从未使用 / 墓碑 / 已占用 三态

use std::fmt::{self, Display};

/// 单个槽位
///
/// 状态机：`Empty -> Occupied -> Tombstone -> Occupied -> ...`，
/// 一旦被占用过就再也回不到 `Empty`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Slot<K, V> {
    /// 从未使用，查找可以在此终止
    #[default]
    Empty,
    /// 曾经被占用后删除，查找必须越过它继续探测，插入可以复用
    Tombstone,
    /// 已占用
    Occupied(K, V),
}

impl<K, V> Slot<K, V> {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(..))
    }

    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    /// 从未使用过
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// 可以放入新键（空或墓碑）
    pub fn is_vacant(&self) -> bool {
        !self.is_occupied()
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            Self::Occupied(key, _) => Some(key),
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn value_mut(&mut self) -> Option<&mut V> {
        match self {
            Self::Occupied(_, value) => Some(value),
            _ => None,
        }
    }

    pub fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Self::Occupied(key, value) => Some((key, value)),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Occupied(_, value) => Some(value),
            _ => None,
        }
    }
}

impl<K: Display, V: Display> Display for Slot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occupied(key, value) => write!(f, "({}, {})", key, value),
            Self::Empty => write!(f, "(None, None)"),
            Self::Tombstone => write!(f, "(<deleted>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_states() {
        let empty: Slot<i64, &str> = Slot::default();
        assert!(empty.is_empty());
        assert!(empty.is_vacant());
        assert!(!empty.is_tombstone());

        let tombstone: Slot<i64, &str> = Slot::Tombstone;
        assert!(tombstone.is_vacant());
        assert!(!tombstone.is_empty());

        let mut occupied = Slot::Occupied(3i64, "a");
        assert!(occupied.is_occupied());
        assert_eq!(occupied.key(), Some(&3));
        assert_eq!(occupied.entry(), Some((&3, &"a")));
        if let Some(value) = occupied.value_mut() {
            *value = "b";
        }
        assert_eq!(occupied.into_value(), Some("b"));
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::Occupied(10, "x").to_string(), "(10, x)");
        assert_eq!(Slot::<i32, i32>::Empty.to_string(), "(None, None)");
        assert_eq!(Slot::<i32, i32>::Tombstone.to_string(), "(<deleted>)");
    }
}
