//! 哈希表核心模块 - 实现探测哈希表及其组件

pub mod probe_map;
pub mod policy;
pub mod slot;
pub mod shared;

pub use probe_map::{ProbeMap, ProbeMapConfig, ProbeMapIter, ProbeOutcome, ProbeReport};
pub use policy::InsertPolicy;
pub use slot::Slot;
pub use shared::SharedProbeMap;
