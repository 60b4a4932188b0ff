use std::fmt::Write as _;
use std::io::Write;
use crate::models::outcome::Outcome;
use crate::models::result::IterationResult;
use crate::models::run_config::RunConfig;

pub(crate) fn banner(config: &RunConfig) -> String {
    format!(
        "Running stress test on {} for {:?} with {} test per iteration",
        config.target_host, config.duration, config.requests_per_iteration
    )
}

// 每个请求完成时输出一个字符，不换行
pub(crate) fn show_marker(outcome: &Outcome) {
    let mut stdout = std::io::stdout().lock();
    let _ = write!(stdout, "{}", outcome.marker());
    let _ = stdout.flush();
}

/// 渲染一轮的汇总，没有请求的分类不输出
pub(crate) fn iteration_summary(result: &IterationResult) -> String {
    let mut out = String::new();
    if result.ok.count > 0 {
        let ok = &result.ok;
        let _ = writeln!(out, "OK: {} Average: {:?}", ok.count, ok.average_duration);
    }
    if result.fail.count > 0 {
        let fail = &result.fail;
        let _ = writeln!(out, "Fail: {} Average: {:?}", fail.count, fail.average_duration);
        for (reason, count) in &result.reasons {
            let percentage = result.reason_percentage(*count);
            let _ = writeln!(out, "[{} = {:.1}%] {}", count, percentage, reason);
        }
    }
    out
}

pub(crate) fn show_iteration(result: &IterationResult) {
    println!();
    print!("{}", iteration_summary(result));
}
