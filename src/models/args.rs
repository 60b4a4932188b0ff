use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// 目标地址
    #[arg(short = 'h', default_value = "")]
    pub host: String,

    /// 每轮并发请求数
    #[arg(short = 'n', default_value_t = 100)]
    pub count: usize,

    /// 持续时间（秒）
    #[arg(short = 't', default_value_t = 60)]
    pub period: u64,

    /// 单个请求超时时间（秒），0表示使用客户端默认值
    #[arg(long, default_value_t = 0)]
    pub timeout: u64,

    /// 打印帮助
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}
