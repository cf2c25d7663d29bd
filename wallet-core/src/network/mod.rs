// wallet-core/src/network/mod.rs
//
// Network Module - danh sách network được hỗ trợ

pub mod models;

pub use models::NetworkKind;
