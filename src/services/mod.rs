pub mod auth_service;
pub mod nft_service;

pub use auth_service::*;
pub use nft_service::*;
