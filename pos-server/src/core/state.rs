use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::{repository::user, DbService};
use shared::models::{UserCreate, UserRole};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是后端的核心数据结构。Clone 成本极低
/// (Config 为小型结构，SqlitePool 内部为 Arc)。
///
/// # 使用示例
///
/// ```ignore
/// // 获取数据库连接池
/// let pool = state.get_db();
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub db: SqlitePool,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`Self::initialize()`] 方法代替
    pub fn new(config: Config, db: SqlitePool) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/pos.db, 自动迁移)
    /// 3. 引导数据 (空用户表时创建默认管理员)
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_file();
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");

        let state = Self::new(config.clone(), db_service.pool);
        state.bootstrap().await;
        state
    }

    /// 初始化内存数据库状态 (测试用)
    pub async fn initialize_in_memory(config: &Config) -> Self {
        let db_service = DbService::open_in_memory()
            .await
            .expect("Failed to initialize in-memory database");
        Self::new(config.clone(), db_service.pool)
    }

    /// 获取数据库连接池
    pub fn get_db(&self) -> SqlitePool {
        self.db.clone()
    }

    /// Seed a default admin when the user table is empty.
    ///
    /// The shipped terminals expect at least one working PIN; the default
    /// must be changed from the back office afterwards.
    async fn bootstrap(&self) {
        match user::count(&self.db).await {
            Ok(0) => {
                let result = user::create(
                    &self.db,
                    UserCreate {
                        name: "Administrator".to_string(),
                        pin: "0000".to_string(),
                        role: UserRole::Admin,
                    },
                )
                .await;
                match result {
                    Ok(admin) => tracing::warn!(
                        user_id = admin.id,
                        "User table was empty - seeded default admin with PIN 0000, change it"
                    ),
                    Err(e) => tracing::error!(error = %e, "Failed to seed default admin"),
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!(error = %e, "Failed to check user table"),
        }
    }
}
