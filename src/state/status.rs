/// Explicit status record for one network call site, instead of an implicit
/// request cache. Every call starts `Idle`, flips to `Pending` when issued,
/// and lands on `Success` or `Failure`.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestStatus<T> {
    Idle,
    Pending,
    Success(T),
    Failure(String),
}

impl<T> RequestStatus<T> {
    pub fn success(&self) -> Option<&T> {
        match self {
            RequestStatus::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            RequestStatus::Failure(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let pending: RequestStatus<u32> = RequestStatus::Pending;
        assert!(pending.success().is_none());
        assert!(pending.failure().is_none());

        let done = RequestStatus::Success(5);
        assert_eq!(done.success(), Some(&5));
        assert!(done.failure().is_none());

        let failed: RequestStatus<u32> = RequestStatus::Failure("boom".to_string());
        assert_eq!(failed.failure(), Some("boom"));
    }
}
