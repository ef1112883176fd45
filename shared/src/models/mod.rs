//! Domain models
//!
//! Entity structs plus their Create/Update payloads. With the `db` feature
//! enabled the entities also derive `sqlx::FromRow`.

// Catalog
pub mod category;
pub mod department;
pub mod product;
pub mod supplier;

// Stock
pub mod inventory;
pub mod nir;
pub mod recipe;
pub mod retur;
pub mod stock;
pub mod transfer;

// Sales
pub mod order;
pub mod report;

// Auth
pub mod user;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use inventory::{
    Inventory, InventoryCreate, InventoryFull, InventoryItem, InventoryItemCorrection,
    InventoryUpdate,
};
pub use nir::{Nir, NirCreate, NirFull, NirItem, NirItemInput};
pub use order::{
    Order, OrderClose, OrderCreate, OrderFull, OrderItem, OrderItemInput, OrderItemView,
    OrderStatus,
};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use recipe::{Recipe, RecipeCreate, RecipeFull, RecipeItemInput, RecipeLine};
pub use report::{ProductSales, SalesReport};
pub use retur::{Retur, ReturCreate, ReturFull, ReturItem, ReturItemInput};
pub use stock::{MovementKind, StockMovement, StockRow, StockView};
pub use supplier::{Supplier, SupplierCreate, SupplierUpdate};
pub use transfer::{Transfer, TransferCreate, TransferFull, TransferItem, TransferItemInput};
pub use user::{User, UserCreate, UserRole, UserUpdate};
