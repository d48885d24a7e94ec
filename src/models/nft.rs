use serde::{Deserialize, Serialize};

/// The uploaded file attached to an NFT record.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Media {
    #[serde(rename = "_id")]
    pub id: String,
    pub filename: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    pub filetype: String,
}

/// A media item with its descriptive metadata. "NFT" in name only, there is
/// no chain anywhere; `attributes` is a comma-joined string the server stores
/// verbatim.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub attributes: String,
    pub media: Media,
    pub owner: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Nft {
    /// Attribute list as entered in the upload form, split back on commas.
    pub fn attribute_list(&self) -> Vec<String> {
        self.attributes
            .split(',')
            .map(|attr| attr.trim().to_string())
            .filter(|attr| !attr.is_empty())
            .collect()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedNftResponse {
    pub nfts: Vec<Nft>,
    pub total_count: u32,
    pub current_page: u32,
    pub total_pages: u32,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CreateNftResponse {
    pub message: String,
    pub nft: Nft,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nft_with_attributes(attributes: &str) -> Nft {
        Nft {
            id: "1".to_string(),
            name: "Test".to_string(),
            description: "desc".to_string(),
            attributes: attributes.to_string(),
            media: Media {
                id: "m1".to_string(),
                filename: "a.png".to_string(),
                file_url: "uploads/a.png".to_string(),
                filetype: "image/png".to_string(),
            },
            owner: "o1".to_string(),
            created_at: "2026-08-31T12:00:00.000Z".to_string(),
            updated_at: "2026-08-31T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn attribute_list_splits_and_trims() {
        let nft = nft_with_attributes("rare, shiny ,  animated");
        assert_eq!(nft.attribute_list(), vec!["rare", "shiny", "animated"]);
    }

    #[test]
    fn attribute_list_drops_empty_entries() {
        let nft = nft_with_attributes("rare,, ,");
        assert_eq!(nft.attribute_list(), vec!["rare"]);
    }

    #[test]
    fn paginated_response_parses_wire_names() {
        let json = r#"{
            "nfts": [{
                "_id": "n1",
                "name": "Sunset",
                "description": "A sunset",
                "attributes": "warm,orange",
                "media": { "_id": "m1", "filename": "s.png", "fileUrl": "uploads/s.png", "filetype": "image/png" },
                "owner": "u1",
                "createdAt": "2026-08-31T12:00:00.000Z",
                "updatedAt": "2026-08-31T12:00:00.000Z"
            }],
            "totalCount": 7,
            "currentPage": 2,
            "totalPages": 3
        }"#;
        let page: PaginatedNftResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.nfts.len(), 1);
        assert_eq!(page.nfts[0].id, "n1");
        assert_eq!(page.nfts[0].media.file_url, "uploads/s.png");
        assert_eq!(page.total_count, 7);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn attribute_list_empty_string_is_empty() {
        let nft = nft_with_attributes("");
        assert!(nft.attribute_list().is_empty());
    }
}
