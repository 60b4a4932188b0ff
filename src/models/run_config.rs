use std::time::Duration;
use thiserror::Error;
use crate::models::args::Args;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host is not defined")]
    HostNotDefined,
}

/// 一次压测的配置，解析后不再修改
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_host: String,
    pub requests_per_iteration: usize,
    pub duration: Duration,
    // None 表示使用http客户端默认超时
    pub timeout: Option<Duration>,
}

impl RunConfig {
    pub fn new(
        target_host: impl Into<String>,
        requests_per_iteration: usize,
        duration: Duration,
    ) -> Self {
        RunConfig {
            target_host: target_host.into(),
            requests_per_iteration,
            duration,
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // 目标地址是唯一需要校验的参数
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_host.is_empty() {
            return Err(ConfigError::HostNotDefined);
        }
        Ok(())
    }
}

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        let config = RunConfig::new(args.host, args.count, Duration::from_secs(args.period));
        if args.timeout > 0 {
            config.with_timeout(Duration::from_secs(args.timeout))
        } else {
            config
        }
    }
}
