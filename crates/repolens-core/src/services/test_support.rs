//! Hand-written port fakes shared by the service tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{ListRequest, Profile, ProfileId, ProfilePage};
use crate::ports::{ApiPortError, ApiPortResult, FavoritesStore, ProfileApiPort, StoreError};

pub fn profile(id: ProfileId) -> Profile {
    Profile::new(
        id,
        format!("owner/repo-{id}"),
        format!("https://github.com/owner/repo-{id}"),
    )
}

pub fn page_of(ids: &[ProfileId], total_pages: u32) -> ProfilePage {
    ProfilePage::new(ids.iter().copied().map(profile).collect(), total_pages)
}

/// Calls observed by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(ListRequest),
    Topics,
    Analyze(String),
    Delete(ProfileId),
}

pub struct FakeApi {
    pub calls: Mutex<Vec<ApiCall>>,
    pub page: Mutex<ApiPortResult<ProfilePage>>,
    pub topics: Mutex<ApiPortResult<Vec<String>>>,
    pub analyze: Mutex<ApiPortResult<String>>,
    pub delete: Mutex<ApiPortResult<()>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            page: Mutex::new(Ok(ProfilePage::empty())),
            topics: Mutex::new(Ok(Vec::new())),
            analyze: Mutex::new(Ok("Analysis request accepted.".to_string())),
            delete: Mutex::new(Ok(())),
        }
    }

    pub fn with_page(self, page: ProfilePage) -> Self {
        *self.page.lock().unwrap() = Ok(page);
        self
    }

    pub fn set_page(&self, result: ApiPortResult<ProfilePage>) {
        *self.page.lock().unwrap() = result;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<ListRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::List(request) => Some(request),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl ProfileApiPort for FakeApi {
    async fn list(&self, request: &ListRequest) -> ApiPortResult<ProfilePage> {
        self.calls.lock().unwrap().push(ApiCall::List(request.clone()));
        self.page.lock().unwrap().clone()
    }

    async fn topics(&self) -> ApiPortResult<Vec<String>> {
        self.calls.lock().unwrap().push(ApiCall::Topics);
        self.topics.lock().unwrap().clone()
    }

    async fn request_analysis(&self, url: &str) -> ApiPortResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Analyze(url.to_string()));
        self.analyze.lock().unwrap().clone()
    }

    async fn delete(&self, id: ProfileId) -> ApiPortResult<()> {
        self.calls.lock().unwrap().push(ApiCall::Delete(id));
        self.delete.lock().unwrap().clone()
    }
}

pub fn network_error() -> ApiPortError {
    ApiPortError::Network {
        message: "connection refused".to_string(),
    }
}

/// In-memory store that records every save.
pub struct FakeStore {
    pub stored: Mutex<Option<Vec<ProfileId>>>,
    pub saves: Mutex<Vec<Vec<ProfileId>>>,
    pub malformed: bool,
    pub fail_saves: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(None),
            saves: Mutex::new(Vec::new()),
            malformed: false,
            fail_saves: false,
        }
    }

    pub fn with_ids(ids: &[ProfileId]) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(ids.to_vec());
        store
    }

    pub fn last_save(&self) -> Option<Vec<ProfileId>> {
        self.saves.lock().unwrap().last().cloned()
    }
}

impl FavoritesStore for FakeStore {
    fn load(&self) -> Result<Option<Vec<ProfileId>>, StoreError> {
        if self.malformed {
            return Err(StoreError::Malformed {
                reason: "expected value at line 1 column 1".to_string(),
            });
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    fn save(&self, ids: &[ProfileId]) -> Result<(), StoreError> {
        self.saves.lock().unwrap().push(ids.to_vec());
        if self.fail_saves {
            return Err(StoreError::Unavailable("quota exceeded".to_string()));
        }
        *self.stored.lock().unwrap() = Some(ids.to_vec());
        Ok(())
    }
}
