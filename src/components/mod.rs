pub mod auth_form;
pub mod header;
pub mod home;
pub mod nft_drawer;
pub mod toast;
pub mod upload_form;

pub use auth_form::{AuthForm, AuthMode};
pub use header::Header;
pub use home::Home;
pub use nft_drawer::NftDrawer;
pub use toast::ToastProvider;
pub use upload_form::UploadForm;
