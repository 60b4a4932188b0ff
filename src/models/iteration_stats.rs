use parking_lot::Mutex;
use crate::models::call_stat::CallStat;
use crate::models::outcome::Outcome;
use crate::models::reason_tally::ReasonTally;
use crate::models::result::IterationResult;

/// 每一轮独立的统计数据，轮次结束后丢弃
#[derive(Debug, Default)]
pub struct IterationStats {
    ok: Mutex<CallStat>,
    fail: Mutex<CallStat>,
    reasons: ReasonTally,
}

impl IterationStats {
    pub fn new() -> Self {
        IterationStats::default()
    }

    // 记录单个请求结果，锁只在内存计数时持有
    pub fn record(&self, outcome: &Outcome) {
        match outcome {
            Outcome::Success { duration } => {
                self.ok.lock().add_result(*duration);
            }
            Outcome::Failure { duration, reason } => {
                self.fail.lock().add_result(*duration);
                self.reasons.increment(reason.as_str());
            }
        }
    }

    // 所有任务结束后调用，失败数必须等于原因总数
    pub fn snapshot(&self, batch_size: usize) -> IterationResult {
        let fail = *self.fail.lock();
        debug_assert_eq!(self.reasons.total(), fail.count);
        IterationResult {
            batch_size,
            ok: *self.ok.lock(),
            fail,
            reasons: self.reasons.sorted(),
        }
    }
}
