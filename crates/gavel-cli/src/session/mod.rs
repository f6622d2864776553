//! Session persistence.

pub mod storage;
