//! Pure domain logic for the inventory service.
//!
//! Everything in this crate is synchronous and I/O-free: the role/operation
//! authorization table, the quantity-derived stock status, the low-stock
//! policy, and the shared error taxonomy. Persistence lives in
//! `stockroom-db`, HTTP in `stockroom-api`.

pub mod access;
pub mod error;
pub mod stock;
pub mod types;
