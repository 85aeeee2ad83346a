//! 插入策略 - 新键写入探测链的哪个位置

use crate::{hash::linear_probe::next_slot, map::slot::Slot};
use std::mem;

/// 新键（表中不存在匹配键）的放置策略
///
/// 更新已有键、查找与删除与策略无关。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertPolicy {
    /// 放进探测链上第一个空位或墓碑
    #[default]
    AppendToChain,
    /// 放进主槽位，原有链条沿探测序列整体后移一步
    DisplaceToHome,
}

impl InsertPolicy {
    /// 放置新记录，返回被后移的记录数
    ///
    /// `vacant` 必须是从 `home` 出发的探测序列上第一个非占用槽位，
    /// 即 `locate` 在插入模式下的结果。
    pub(crate) fn place<K, V>(
        self,
        slots: &mut [Slot<K, V>],
        home: usize,
        step: usize,
        vacant: usize,
        key: K,
        value: V,
    ) -> usize {
        match self {
            Self::AppendToChain => {
                slots[vacant] = Slot::Occupied(key, value);
                0
            }
            Self::DisplaceToHome => shift_insert(slots, home, step, vacant, key, value),
        }
    }
}

/// 从 `home` 开始逐个交换，把链条推向 `vacant`
///
/// 循环沿与查找相同的探测序列前进，最多 `capacity` 步必然到达 `vacant`。
fn shift_insert<K, V>(
    slots: &mut [Slot<K, V>],
    home: usize,
    step: usize,
    vacant: usize,
    key: K,
    value: V,
) -> usize {
    let capacity = slots.len();
    let mut carried = Slot::Occupied(key, value);
    let mut slot = home;
    let mut displaced = 0;

    loop {
        carried = mem::replace(&mut slots[slot], carried);
        if slot == vacant || carried.is_vacant() {
            return displaced;
        }
        displaced += 1;
        slot = next_slot(slot, step, capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupied_keys(slots: &[Slot<i32, &'static str>]) -> Vec<Option<i32>> {
        slots.iter().map(|slot| slot.key().copied()).collect()
    }

    #[test]
    fn test_append_to_chain() {
        let mut slots: Vec<Slot<i32, &str>> = vec![Slot::Empty; 5];
        slots[1] = Slot::Occupied(1, "a");
        let displaced = InsertPolicy::AppendToChain.place(&mut slots, 1, 1, 2, 6, "b");
        assert_eq!(displaced, 0);
        assert_eq!(occupied_keys(&slots), vec![None, Some(1), Some(6), None, None]);
    }

    #[test]
    fn test_shift_insert_pushes_chain_forward() {
        let mut slots: Vec<Slot<i32, &str>> = vec![Slot::Empty; 7];
        slots[3] = Slot::Occupied(17, "b");
        slots[5] = Slot::Occupied(10, "a");

        // 步长 2: 3 -> 5 -> 0
        let displaced = InsertPolicy::DisplaceToHome.place(&mut slots, 3, 2, 0, 24, "c");
        assert_eq!(displaced, 2);
        assert_eq!(slots[3], Slot::Occupied(24, "c"));
        assert_eq!(slots[5], Slot::Occupied(17, "b"));
        assert_eq!(slots[0], Slot::Occupied(10, "a"));
    }

    #[test]
    fn test_shift_insert_stops_at_tombstone() {
        let mut slots: Vec<Slot<i32, &str>> = vec![Slot::Empty; 4];
        slots[0] = Slot::Occupied(4, "a");
        slots[1] = Slot::Tombstone;
        slots[2] = Slot::Occupied(2, "x");

        let displaced = InsertPolicy::DisplaceToHome.place(&mut slots, 0, 1, 1, 8, "b");
        assert_eq!(displaced, 1);
        assert_eq!(occupied_keys(&slots), vec![Some(8), Some(4), Some(2), None]);
    }

    #[test]
    fn test_shift_insert_into_empty_home() {
        let mut slots: Vec<Slot<i32, &str>> = vec![Slot::Empty; 3];
        let displaced = InsertPolicy::DisplaceToHome.place(&mut slots, 2, 1, 2, 5, "a");
        assert_eq!(displaced, 0);
        assert_eq!(slots[2], Slot::Occupied(5, "a"));
    }

    #[test]
    fn test_shift_insert_wraps_around() {
        let mut slots: Vec<Slot<i32, &str>> = vec![Slot::Empty; 3];
        slots[2] = Slot::Occupied(2, "a");
        slots[0] = Slot::Occupied(3, "b");

        let displaced = InsertPolicy::DisplaceToHome.place(&mut slots, 2, 1, 1, 5, "c");
        assert_eq!(displaced, 2);
        assert_eq!(occupied_keys(&slots), vec![Some(2), Some(3), Some(5)]);
    }
}
