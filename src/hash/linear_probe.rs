//! 线性探测序列 - 以与容量互质的步长遍历全部槽位

/// 下一个探测位置
#[inline]
pub fn next_slot(slot: usize, step: usize, capacity: usize) -> usize {
    // 先取模避免 slot + step 溢出
    (slot + step % capacity) % capacity
}

/// 线性探测序列
///
/// 从主槽位出发，依次产生 `home, home+step, home+2*step, ...` (mod capacity)，
/// 共 `capacity` 个位置。步长与容量互质时每个槽位恰好出现一次。
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    next: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSequence {
    /// 创建新探测序列
    pub fn new(home: usize, step: usize, capacity: usize) -> Self {
        Self {
            next: if capacity == 0 { 0 } else { home % capacity },
            step,
            capacity,
            remaining: capacity,
        }
    }

    /// 已产出的位置数
    pub fn probes(&self) -> usize {
        self.capacity - self.remaining
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.next;
        self.remaining -= 1;
        self.next = next_slot(slot, self.step, self.capacity);
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl std::iter::FusedIterator for ProbeSequence {}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_linear_probe() {
        let seq: Vec<usize> = ProbeSequence::new(3, 1, 5).collect();
        assert_eq!(seq, vec![3, 4, 0, 1, 2]);
    }

    #[test]
    fn test_step_two_over_seven() {
        let seq: Vec<usize> = ProbeSequence::new(3, 2, 7).collect();
        assert_eq!(seq, vec![3, 5, 0, 2, 4, 6, 1]);
    }

    #[test]
    fn test_coprime_step_visits_every_slot() {
        for (step, capacity) in [(3, 10), (7, 64), (5, 12), (11, 13)] {
            let seen: HashSet<usize> = ProbeSequence::new(4, step, capacity).collect();
            assert_eq!(seen.len(), capacity, "互质步长应遍历全部槽位");
        }
    }

    #[test]
    fn test_probe_counter() {
        let mut seq = ProbeSequence::new(0, 1, 4);
        assert_eq!(seq.len(), 4);
        seq.next();
        seq.next();
        assert_eq!(seq.probes(), 2);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_step_larger_than_capacity() {
        assert_eq!(next_slot(6, 9, 7), 1);
        assert_eq!(next_slot(2, usize::MAX, 3), 2);
    }

    #[test]
    fn test_zero_capacity_is_empty() {
        assert_eq!(ProbeSequence::new(0, 1, 0).count(), 0);
    }
}
