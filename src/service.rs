use super::code::ResultCode;

/// Which keyring collection a request is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionSelector {
    /// Whatever collection the service considers the default.
    Default,
    /// A collection identified by its label.
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnlockRequest {
    pub collection: CollectionSelector,
}

impl UnlockRequest {
    pub fn default_collection() -> Self {
        UnlockRequest {
            collection: CollectionSelector::Default,
        }
    }
}

/// Something that can ask a keyring service to unlock a collection.
///
/// Calls block until the service answers. Any prompting, retrying or timing
/// out is up to the service.
pub trait UnlockService {
    fn unlock(&self, request: &UnlockRequest) -> ResultCode;

    fn unlock_default_collection(&self) -> ResultCode {
        self.unlock(&UnlockRequest::default_collection())
    }
}

impl<S: UnlockService + ?Sized> UnlockService for &S {
    fn unlock(&self, request: &UnlockRequest) -> ResultCode {
        (**self).unlock(request)
    }
}

impl<S: UnlockService + ?Sized> UnlockService for Box<S> {
    fn unlock(&self, request: &UnlockRequest) -> ResultCode {
        (**self).unlock(request)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Echo;

    impl UnlockService for Echo {
        fn unlock(&self, request: &UnlockRequest) -> ResultCode {
            match request.collection {
                CollectionSelector::Default => ResultCode::OK,
                CollectionSelector::Named(_) => ResultCode::NO_SUCH_KEYRING,
            }
        }
    }

    #[test]
    fn default_request_targets_default_collection() {
        assert_eq!(
            UnlockRequest::default_collection().collection,
            CollectionSelector::Default
        );
        assert_eq!(Echo.unlock_default_collection(), ResultCode::OK);
    }

    #[test]
    fn forwarding_impls() {
        let boxed: Box<dyn UnlockService> = Box::new(Echo);
        assert_eq!(boxed.unlock_default_collection(), ResultCode::OK);
        let request = UnlockRequest {
            collection: CollectionSelector::Named("work".to_string()),
        };
        assert_eq!((&Echo).unlock(&request), ResultCode::NO_SUCH_KEYRING);
    }
}
