use std::time::Duration;

/// 单一结果（成功或失败）的耗时统计，平均值在每次写入时立即重算
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallStat {
    pub count: u32,
    pub total_duration: Duration,
    pub average_duration: Duration,
}

impl CallStat {
    pub fn new() -> Self {
        CallStat::default()
    }

    pub fn add_result(&mut self, duration: Duration) {
        self.count += 1;
        self.total_duration += duration;
        self.average_duration = self.total_duration / self.count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let stat = CallStat::new();
        assert_eq!(stat.count, 0);
        assert_eq!(stat.total_duration, Duration::ZERO);
        assert_eq!(stat.average_duration, Duration::ZERO);
    }

    #[test]
    fn test_average_recomputed_on_every_add() {
        let mut stat = CallStat::new();
        for (i, ms) in [10u64, 20, 45, 7].iter().enumerate() {
            stat.add_result(Duration::from_millis(*ms));
            assert_eq!(stat.count as usize, i + 1);
            assert_eq!(stat.average_duration, stat.total_duration / stat.count);
        }
        assert_eq!(stat.total_duration, Duration::from_millis(82));
        assert_eq!(stat.average_duration, Duration::from_micros(20500));
    }

    #[test]
    fn test_truncating_average() {
        let mut stat = CallStat::new();
        stat.add_result(Duration::from_nanos(1));
        stat.add_result(Duration::from_nanos(1));
        stat.add_result(Duration::from_nanos(2));
        // 4ns / 3 向下取整
        assert_eq!(stat.average_duration, Duration::from_nanos(1));
    }
}
