use std::time::Instant;
use tracing::info;
use crate::core::batch::batch;
use crate::core::issue::build_client;
use crate::core::show_result::{banner, show_iteration};
use crate::models::result::RunSummary;
use crate::models::run_config::RunConfig;

/// 按轮次反复压测目标地址，直到超过配置的持续时间。
///
/// 时间只在两轮之间检查，已经发出的一轮总会等到全部请求结束。
/// 持续时间为0时不会执行任何一轮。
pub async fn run(config: &RunConfig) -> anyhow::Result<RunSummary> {
    println!("{}", banner(config));
    config.validate()?;

    let client = build_client(config.timeout)?;
    info!(
        host = %config.target_host,
        requests_per_iteration = config.requests_per_iteration,
        duration = ?config.duration,
        "starting stress test"
    );

    let mut summary = RunSummary::default();
    // 开始测试时间
    let test_start = Instant::now();
    while test_start.elapsed() < config.duration {
        let result = batch(&client, &config.target_host, config.requests_per_iteration).await;
        show_iteration(&result);
        summary.absorb(&result);
    }
    summary.elapsed = test_start.elapsed();

    info!(
        iterations = summary.iterations,
        ok = summary.ok_total,
        fail = summary.fail_total,
        elapsed = ?summary.elapsed,
        "stress test finished"
    );
    Ok(summary)
}
