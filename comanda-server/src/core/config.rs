/// 服务器配置 - 点单服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖 (启动时会先加载 `.env`)：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 4000 | HTTP 服务端口 |
/// | API_PREFIX | (空) | 路由前缀，例如 `/api` |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | 生产环境为 true | JSON 日志格式 |
/// | LOG_DIR | (未设置) | 滚动日志目录 |
/// | ORDERS_STRICT_TRANSITIONS | true | 是否校验状态流转 |
/// | ORDERS_REQUIRE_ITEMS | true | 是否拒绝空订单/未知菜品 |
/// | ORDERS_EVENT_CAPACITY | 1024 | 订单事件广播容量 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 优雅关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 API_PREFIX=/api cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 路由前缀 (空字符串表示挂载在根路径)
    pub api_prefix: String,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 滚动日志目录
    pub log_dir: Option<String>,
    /// 订单规则
    pub orders: OrderRules,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

/// 订单校验规则
///
/// 两个开关都比原始的宽松行为更严格，关闭后恢复宽松行为。
#[derive(Debug, Clone)]
pub struct OrderRules {
    /// 只允许 pendente → Em Preparo → Concluído
    pub strict_transitions: bool,
    /// 拒绝空订单和菜单中不存在的菜品
    pub require_items: bool,
    /// 事件广播通道容量
    pub event_capacity: usize,
}

impl Default for OrderRules {
    fn default() -> Self {
        Self {
            strict_transitions: true,
            require_items: true,
            event_capacity: 1024,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let defaults = OrderRules::default();
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_parse("HTTP_PORT").unwrap_or(4000),
            api_prefix: normalize_prefix(&std::env::var("API_PREFIX").unwrap_or_default()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(is_production),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
            orders: OrderRules {
                strict_transitions: env_parse("ORDERS_STRICT_TRANSITIONS")
                    .unwrap_or(defaults.strict_transitions),
                require_items: env_parse("ORDERS_REQUIRE_ITEMS")
                    .unwrap_or(defaults.require_items),
                event_capacity: env_parse::<usize>("ORDERS_EVENT_CAPACITY")
                    .filter(|c| *c > 0)
                    .unwrap_or(defaults.event_capacity),
            },
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS").unwrap_or(10000),
            environment,
        }
    }

    /// 测试用配置 (不读取环境变量)
    pub fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".into(),
            http_port: 0,
            api_prefix: String::new(),
            environment: "test".into(),
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            orders: OrderRules::default(),
            shutdown_timeout_ms: 1000,
        }
    }

    /// 监听地址 `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `api` / `/api/` / `/api` → `/api`，空或 `/` → 空
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
