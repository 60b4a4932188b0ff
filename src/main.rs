use clap::Parser;
use burst_stress::models::args::Args;
use burst_stress::models::run_config::RunConfig;

#[tokio::main]
async fn main() {
    burst_stress::core::logger::init();
    let config = RunConfig::from(Args::parse());
    // 任何错误都只打印，不区分退出码
    if let Err(e) = burst_stress::core::execute::run(&config).await {
        println!("{}", e);
    }
}
