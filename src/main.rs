// ==========================================
// 机尾调换优化系统 - 命令行主入口
// ==========================================

use std::env;

use tail_swap_optimizer::{cli, logging};

fn main() {
    logging::init();

    tracing::debug!("机尾调换优化系统 版本: {}", tail_swap_optimizer::VERSION);

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run_with_args(&args));
}
