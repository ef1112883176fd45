//! POS Server - 餐饮门店管理后端
//!
//! # 架构概述
//!
//! 本模块是后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx, WAL)
//! - **库存引擎** (`stock`): 单据驱动的库存账本与流水
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! pos-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (连接池、仓储)
//! ├── stock/         # 库存引擎 (账本、消耗展开)
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod stock;
pub mod utils;

// Re-export 公共类型
pub use crate::core::server::build_router;
pub use crate::core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____  ____  _____    _____
   / __ \/ __ \/ ___/   / ___/___  ______   _____  _____
  / /_/ / / / /\__ \    \__ \/ _ \/ ___/ | / / _ \/ ___/
 / ____/ /_/ /___/ /   ___/ /  __/ /   | |/ /  __/ /
/_/    \____//____/   /____/\___/_/    |___/\___/_/
    "#
    );
}
