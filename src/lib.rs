//! Administration of an order collection in MongoDB: a CLI for
//! insert/find/list/delete/seed, and a read-only HTTP search endpoint over
//! the same collection. Both entry points share the filter construction,
//! record operations, and per-operation connection lifecycle defined here.

pub mod cli;
pub mod connection;
pub mod document;
pub mod errors;
pub mod intent;
pub mod logger;
pub mod ops;
pub mod query;
pub mod seed;
pub mod server;
