use std::time::Duration;
use crate::models::call_stat::CallStat;

/// 一轮请求结束后的结果快照
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationResult {
    pub batch_size: usize,
    pub ok: CallStat,
    pub fail: CallStat,
    // 已按次数降序排列
    pub reasons: Vec<(String, u32)>,
}

impl IterationResult {
    // 百分比的分母是本轮配置的请求数，而不是失败数
    pub fn reason_percentage(&self, count: u32) -> f64 {
        if self.batch_size == 0 {
            return 0.0;
        }
        (count as f64 * 100.0) / self.batch_size as f64
    }
}

/// 整个压测过程的汇总
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub ok_total: u64,
    pub fail_total: u64,
    pub elapsed: Duration,
}

impl RunSummary {
    pub(crate) fn absorb(&mut self, result: &IterationResult) {
        self.iterations += 1;
        self.ok_total += result.ok.count as u64;
        self.fail_total += result.fail.count as u64;
    }
}
