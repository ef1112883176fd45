//! Stock Engine
//!
//! The cross-cutting piece of the system: every inventory-affecting document
//! (NIR receipt, transfer, supplier return, order close) funnels its quantity
//! deltas through [`ledger::adjust`], inside the document's transaction.
//!
//! Invariant: `stock.quantity` for a (product, department) pair equals the
//! sum of all receipts and transfers-in, minus all transfers-out, returns
//! and consumption — i.e. the sum of its `stock_movement` deltas.

pub mod consumption;
pub mod ledger;

pub use consumption::{plan_consumption, Consumption};
pub use ledger::adjust;
