use std::sync::Arc;
use futures::future::join_all;
use reqwest::Client;
use tracing::{debug, trace, warn};
use crate::core::issue::issue;
use crate::core::show_result::show_marker;
use crate::models::iteration_stats::IterationStats;
use crate::models::outcome::Outcome;
use crate::models::result::IterationResult;

/// 一轮压测：同时发出 batch_size 个请求，等待全部完成后返回统计快照
pub async fn batch(client: &Client, host: &str, batch_size: usize) -> IterationResult {
    // 本轮统计，轮次结束后丢弃
    let stats = Arc::new(IterationStats::new());
    // 任务池
    let mut handles = Vec::with_capacity(batch_size);
    for _ in 0..batch_size {
        let client = client.clone();
        let host = host.to_string();
        let stats = stats.clone();
        handles.push(tokio::spawn(async move {
            let outcome = issue(&client, &host).await;
            stats.record(&outcome);
            show_marker(&outcome);
            if let Outcome::Failure { reason, .. } = &outcome {
                trace!(%reason, duration = ?outcome.duration(), "request failed");
            }
        }));
    }
    // 等待所有任务结束，每个任务只完成一次
    for joined in join_all(handles).await {
        if let Err(e) = joined {
            warn!("request task stopped unexpectedly: {}", e);
        }
    }
    let result = stats.snapshot(batch_size);
    debug!(ok = result.ok.count, fail = result.fail.count, "iteration finished");
    result
}
