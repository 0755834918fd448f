//! Domain logic for the pedal parts inventory: catalog, stock levels, build
//! templates, order application and the shopping list.
//!
//! Everything in this crate is pure and synchronous except the
//! [`storage::KeyValueStore`] contract, which adapters in `pedalstock-db`
//! implement.

pub mod catalog;
pub mod error;
pub mod inventory;
pub mod order;
pub mod shopping_list;
pub mod storage;
pub mod template;
pub mod types;
