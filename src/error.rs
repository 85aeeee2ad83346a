//! 统一错误处理 - 探测哈希表可能出现的错误类型

/// 探测哈希表可能发生的错误
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProbeError {
    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },

    #[error("探测步长与表容量不互质 (步长: {step}, 容量: {capacity})")]
    StepNotCoprime {
        step: usize,
        capacity: usize,
    },

    #[error("表已满，无法插入新键 (容量: {capacity})")]
    CapacityExhausted {
        capacity: usize,
    },

    #[error("键不存在: {key}")]
    KeyNotFound {
        key: String,
    },

    #[error("探测序列耗尽仍未找到可用槽位 (探测次数: {probes})")]
    ProbeExhausted {
        probes: usize,
    },
}

impl ProbeError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidConfig { .. } => Some("检查配置参数"),
            Self::StepNotCoprime { .. } => Some("选择与容量互质的探测步长，例如 1"),
            Self::CapacityExhausted { .. } => Some("先删除部分键，或使用更大容量重建表"),
            Self::KeyNotFound { .. } => Some("确认键值是否存在"),
            Self::ProbeExhausted { .. } => Some("表内部状态异常，检查步长与容量"),
        }
    }

    /// 判断错误是否可恢复
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::CapacityExhausted { .. } | Self::KeyNotFound { .. })
    }

    /// 是否为构造期配置错误
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. } | Self::StepNotCoprime { .. })
    }

    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let full = ProbeError::CapacityExhausted { capacity: 7 };
        assert!(full.is_recoverable());
        assert!(!full.is_config_error());

        let step = ProbeError::StepNotCoprime { step: 2, capacity: 4 };
        assert!(step.is_config_error());
        assert!(!step.is_recoverable());

        let probe = ProbeError::ProbeExhausted { probes: 7 };
        assert!(!probe.is_recoverable());
        assert!(probe.recovery_suggestion().is_some());
    }

    #[test]
    fn test_error_display() {
        let err = ProbeError::StepNotCoprime { step: 2, capacity: 4 };
        assert_eq!(err.to_string(), "探测步长与表容量不互质 (步长: 2, 容量: 4)");

        let err = ProbeError::invalid_config("capacity 必须大于 0");
        assert_eq!(err.to_string(), "无效配置: capacity 必须大于 0");
    }
}
