use std::time::{Duration, Instant};
use anyhow::Context;
use reqwest::{Client, StatusCode};
use crate::models::outcome::Outcome;

// 整轮共享一个客户端，使用默认连接池
pub fn build_client(timeout: Option<Duration>) -> anyhow::Result<Client> {
    let client_builder = Client::builder();
    match timeout {
        Some(timeout) => client_builder
            .timeout(timeout)
            .build()
            .context("failed to build http client with timeout"),
        None => client_builder.build().context("failed to build http client"),
    }
}

/// 发送一次不带请求体的GET请求，并按传输错误和状态码分类
pub async fn issue(client: &Client, host: &str) -> Outcome {
    let start = Instant::now();
    let response = client.get(host).send().await;
    let duration = start.elapsed();
    match response {
        Ok(response) if response.status().as_u16() < 400 => Outcome::Success { duration },
        Ok(response) => Outcome::Failure {
            duration,
            reason: status_line(response.status()),
        },
        Err(e) => Outcome::Failure {
            duration,
            reason: error_chain(e),
        },
    }
}

// 非标准状态码没有原因短语时只保留数字
fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

// reqwest 的 Display 不含 source 链，拒绝连接、DNS、超时等原因在链里
fn error_chain(e: reqwest::Error) -> String {
    format!("{:#}", anyhow::Error::from(e))
}
