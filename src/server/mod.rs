//! Listening socket bootstrap and the fixed worker pool.

pub mod listener;
pub mod pool;
