/// Base URL of the backend API.
/// Configured at compile time via BACKEND_URL in .env (see build.rs);
/// defaults to the local development server.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Items per gallery page.
pub const PAGE_SIZE: u32 = 3;

/// localStorage key for the authenticated flag checked by the upload guard.
pub const STORAGE_KEY_IS_AUTHENTICATED: &str = "isAuthenticated";

/// Absolute URL for a media file served by the backend.
pub fn media_url(file_url: &str) -> String {
    format!("{}/{}", BACKEND_URL, file_url)
}
