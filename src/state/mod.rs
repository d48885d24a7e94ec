pub mod auth;
pub mod gallery;
pub mod status;
pub mod upload;

pub use auth::{validate_login, validate_signup, AuthAction, AuthState};
pub use gallery::GalleryState;
pub use status::RequestStatus;
pub use upload::{UploadAction, UploadState};
