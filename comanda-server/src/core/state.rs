use std::sync::Arc;
use std::time::Instant;

use crate::core::Config;
use crate::menu::MenuCatalog;
use crate::orders::OrdersManager;

/// 服务器状态 - 持有所有服务的单例引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一次的成本极低。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Arc<Config> | 配置项 (不可变) |
/// | menu | Arc<MenuCatalog> | 只读菜单 |
/// | orders | Arc<OrdersManager> | 订单生命周期管理 |
/// | started_at | Instant | 启动时间 (健康检查用) |
///
/// # 使用示例
///
/// ```ignore
/// async fn handler(State(state): State<ServerState>) {
///     let orders = state.orders.list();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub menu: Arc<MenuCatalog>,
    pub orders: Arc<OrdersManager>,
    pub started_at: Instant,
}

impl ServerState {
    /// 使用标准菜单初始化
    pub fn initialize(config: &Config) -> Self {
        Self::with_menu(config, MenuCatalog::with_default_menu())
    }

    /// 使用指定菜单初始化 (测试可以注入自定义菜单)
    pub fn with_menu(config: &Config, menu: MenuCatalog) -> Self {
        let menu = Arc::new(menu);
        let orders = Arc::new(OrdersManager::new(menu.clone(), config.orders.clone()));

        tracing::info!(
            menu_items = menu.len(),
            environment = %config.environment,
            "Server state initialized"
        );

        Self {
            config: Arc::new(config.clone()),
            menu,
            orders,
            started_at: Instant::now(),
        }
    }

    /// 启动至今的秒数
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
