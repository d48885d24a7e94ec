pub mod use_auth;
pub mod use_nfts;
pub mod use_upload;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_nfts::use_nfts;
pub use use_upload::{use_upload, UseUploadHandle};
