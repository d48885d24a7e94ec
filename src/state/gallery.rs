use crate::models::{Nft, PaginatedNftResponse};

/// The current page of the gallery. Replaced wholesale on each successful
/// fetch; there is no cache of earlier pages.
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryState {
    pub nfts: Vec<Nft>,
    pub total_count: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            nfts: Vec::new(),
            total_count: 0,
            current_page: 1,
            total_pages: 1,
        }
    }
}

impl From<PaginatedNftResponse> for GalleryState {
    fn from(response: PaginatedNftResponse) -> Self {
        Self {
            nfts: response.nfts,
            total_count: response.total_count,
            current_page: response.current_page,
            total_pages: response.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_response() -> PaginatedNftResponse {
        serde_json::from_str(
            r#"{
                "nfts": [],
                "totalCount": 9,
                "currentPage": 2,
                "totalPages": 3
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn default_starts_on_page_one() {
        let state = GalleryState::default();
        assert!(state.nfts.is_empty());
        assert_eq!(state.current_page, 1);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn replacement_is_idempotent_for_equal_responses() {
        let first = GalleryState::from(page_response());
        let second = GalleryState::from(page_response());
        assert_eq!(first, second);
        assert_eq!(first.total_count, 9);
        assert_eq!(first.current_page, 2);
    }
}
