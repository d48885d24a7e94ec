use std::rc::Rc;

use web_sys::File;
use yew::prelude::*;

/// Draft for the creation form. The selected file lives here alongside the
/// text fields so a failed submission keeps everything the user entered.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct UploadState {
    pub name: String,
    pub description: String,
    pub attributes: String,
    pub media: Option<File>,
    pub is_uploading: bool,
    pub is_form_submitted: bool,
}

impl UploadState {
    /// UI-level submit gate: all three text fields and a file are required.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && !self.attributes.is_empty()
            && self.media.is_some()
    }
}

pub enum UploadAction {
    SetName(String),
    SetDescription(String),
    SetAttributes(String),
    SetMedia(Option<File>),
    UploadStarted,
    /// Clears the draft in the same transition that marks the form submitted,
    /// so there is no window where one holds without the other.
    UploadSucceeded,
    UploadFailed,
}

impl Reducible for UploadState {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            UploadAction::SetName(name) => next.name = name,
            UploadAction::SetDescription(description) => next.description = description,
            UploadAction::SetAttributes(attributes) => next.attributes = attributes,
            UploadAction::SetMedia(media) => next.media = media,
            UploadAction::UploadStarted => next.is_uploading = true,
            UploadAction::UploadSucceeded => {
                next.name.clear();
                next.description.clear();
                next.attributes.clear();
                next.media = None;
                next.is_uploading = false;
                next.is_form_submitted = true;
            }
            UploadAction::UploadFailed => next.is_uploading = false,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: UploadState, action: UploadAction) -> UploadState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn filled_draft() -> UploadState {
        UploadState {
            name: "Sunset".to_string(),
            description: "A sunset".to_string(),
            attributes: "warm,orange".to_string(),
            media: None,
            is_uploading: false,
            is_form_submitted: false,
        }
    }

    #[test]
    fn draft_without_file_is_incomplete() {
        assert!(!filled_draft().is_complete());
        assert!(!UploadState::default().is_complete());
    }

    #[test]
    fn draft_with_empty_text_field_is_incomplete() {
        let mut draft = filled_draft();
        draft.attributes.clear();
        assert!(!draft.is_complete());
    }

    #[test]
    fn success_clears_draft_and_marks_submitted() {
        let uploading = reduce(filled_draft(), UploadAction::UploadStarted);
        assert!(uploading.is_uploading);

        let state = reduce(uploading, UploadAction::UploadSucceeded);
        assert_eq!(state.name, "");
        assert_eq!(state.description, "");
        assert_eq!(state.attributes, "");
        assert!(state.media.is_none());
        assert!(!state.is_uploading);
        assert!(state.is_form_submitted);
    }

    #[test]
    fn failure_keeps_draft_intact() {
        let uploading = reduce(filled_draft(), UploadAction::UploadStarted);
        let state = reduce(uploading, UploadAction::UploadFailed);
        assert_eq!(state.name, "Sunset");
        assert_eq!(state.description, "A sunset");
        assert_eq!(state.attributes, "warm,orange");
        assert!(!state.is_uploading);
        assert!(!state.is_form_submitted);
    }
}
