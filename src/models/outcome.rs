use std::time::Duration;

/// 单个请求的结果分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { duration: Duration },
    // reason: 传输错误描述，或者http状态行
    Failure { duration: Duration, reason: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn duration(&self) -> Duration {
        match self {
            Outcome::Success { duration } | Outcome::Failure { duration, .. } => *duration,
        }
    }

    // 控制台标记
    pub fn marker(&self) -> char {
        if self.is_success() {
            '.'
        } else {
            'x'
        }
    }
}
