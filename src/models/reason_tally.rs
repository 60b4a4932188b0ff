use std::collections::HashMap;
use parking_lot::Mutex;

/// 失败原因统计 {原因: 次数}
#[derive(Debug, Default)]
pub struct ReasonTally {
    pub(crate) reasons: Mutex<HashMap<String, u32>>,
}

impl ReasonTally {
    pub fn new() -> Self {
        ReasonTally::default()
    }

    // 增加一个原因和对应的出现次数
    pub fn increment(&self, reason: impl Into<String>) {
        let mut reasons = self.reasons.lock();
        *reasons.entry(reason.into()).or_insert(0) += 1;
    }

    pub fn total(&self) -> u32 {
        self.reasons.lock().values().sum()
    }

    /// 按次数降序，次数相同按原因排序
    pub fn sorted(&self) -> Vec<(String, u32)> {
        let mut entries: Vec<(String, u32)> = self
            .reasons
            .lock()
            .iter()
            .map(|(reason, count)| (reason.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }
}
