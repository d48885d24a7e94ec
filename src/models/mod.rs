pub mod auth;
pub mod nft;

pub use auth::{AuthResponse, LoginRequest, SignUpRequest, User};
pub use nft::{CreateNftResponse, Media, Nft, PaginatedNftResponse};
