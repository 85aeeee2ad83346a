//! 与 `HashMap` 模型对照的随机操作序列测试

use probe_hashtable::{InsertPolicy, ModuloHashStrategy, ProbeError, ProbeMap, ProbeMapConfig};
use proptest::prelude::*;
use std::collections::HashMap;

const CAPACITY: usize = 11;

#[derive(Clone, Debug)]
enum Op {
    Put(i64, u32),
    Delete(i64),
    Get(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // 键空间较小，碰撞与墓碑复用频繁
    let key = -40i64..40;
    prop_oneof![
        3 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        2 => key.clone().prop_map(Op::Delete),
        1 => key.prop_map(Op::Get),
    ]
}

fn build_map(step: usize, policy: InsertPolicy, modulo: bool) -> ProbeMap<i64, u32> {
    let config = ProbeMapConfig {
        probe_step: step,
        insert_policy: policy,
        ..ProbeMapConfig::new(CAPACITY)
    };
    if modulo {
        ProbeMap::with_hasher(config, Box::new(ModuloHashStrategy::new(CAPACITY))).unwrap()
    } else {
        ProbeMap::with_config(config).unwrap()
    }
}

fn run_against_model(map: &mut ProbeMap<i64, u32>, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut model: HashMap<i64, u32> = HashMap::new();

    for op in ops {
        match *op {
            Op::Put(key, value) => {
                let free_before = map.free_slots();
                match map.put(key, value) {
                    Ok(previous) => {
                        prop_assert_eq!(previous, model.insert(key, value));
                    }
                    Err(e) => {
                        prop_assert_eq!(e, ProbeError::CapacityExhausted { capacity: CAPACITY });
                        prop_assert!(!model.contains_key(&key));
                        prop_assert_eq!(model.len(), CAPACITY);
                        prop_assert_eq!(free_before, 0);
                    }
                }
            }
            Op::Delete(key) => {
                let free_before = map.free_slots();
                let removed = map.delete(&key);
                let expected = model.remove(&key);
                prop_assert_eq!(removed, expected);
                if expected.is_some() {
                    prop_assert_eq!(map.free_slots(), free_before + 1);
                    prop_assert!(!map.contains(&key));
                }
            }
            Op::Get(key) => {
                prop_assert_eq!(map.get(&key), model.get(&key));
            }
        }

        let occupied = map.slots().iter().filter(|slot| slot.is_occupied()).count();
        prop_assert_eq!(occupied, CAPACITY - map.free_slots());
        prop_assert_eq!(map.len(), model.len());
    }

    for (key, value) in &model {
        prop_assert_eq!(map.get(key), Some(value));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn append_policy_matches_model(
        ops in proptest::collection::vec(op_strategy(), 0..200),
        step in prop_oneof![Just(1usize), Just(2), Just(5)],
        modulo in any::<bool>(),
    ) {
        let mut map = build_map(step, InsertPolicy::AppendToChain, modulo);
        run_against_model(&mut map, &ops)?;
    }

    #[test]
    fn ordered_chain_matches_model(
        ops in proptest::collection::vec(op_strategy(), 0..200),
        step in prop_oneof![Just(1usize), Just(3), Just(10)],
        modulo in any::<bool>(),
    ) {
        let mut map = build_map(step, InsertPolicy::DisplaceToHome, modulo);
        run_against_model(&mut map, &ops)?;
    }
}
