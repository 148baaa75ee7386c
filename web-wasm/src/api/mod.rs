//! バックエンドAPI連携

pub mod backend;

pub use backend::FetchBackend;
