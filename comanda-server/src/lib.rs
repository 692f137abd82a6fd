//! Comanda Server - 餐厅点单服务
//!
//! # 架构概述
//!
//! 只读菜单 (cardápio) 加上内存中的订单 (comandas)，订单按
//! `pendente → Em Preparo → Concluído` 流转，任何状态都可以删除。
//!
//! - **菜单** (`menu`): 启动时加载的只读目录
//! - **订单** (`orders`): 内存存储 + 生命周期管理 + 事件广播
//! - **HTTP API** (`api`): axum 路由和处理器
//!
//! # 模块结构
//!
//! ```text
//! comanda-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由、处理器、中间件
//! ├── menu/          # 菜单目录
//! ├── orders/        # 订单存储和生命周期
//! ├── money.rs       # 金额计算 (rust_decimal)
//! └── utils/         # 日志、输入校验
//! ```

pub mod api;
pub mod core;
pub mod menu;
pub mod money;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use api::{build_app, build_router};
pub use core::{Config, OrderRules, Server, ServerState};
pub use menu::MenuCatalog;
pub use orders::{OrderStorage, OrdersManager};
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// 按配置初始化日志 (控制台 + 可选的滚动文件)
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )
}

pub fn print_banner() {
    println!(
        r#"
   ______                                __
  / ____/___  ____ ___  ____ _____  ____/ /___ _
 / /   / __ \/ __ `__ \/ __ `/ __ \/ __  / __ `/
/ /___/ /_/ / / / / / / /_/ / / / / /_/ / /_/ /
\____/\____/_/ /_/ /_/\__,_/_/ /_/\__,_/\__,_/
    "#
    );
}
