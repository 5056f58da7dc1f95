use crate::domain::shared::{
    errors::ApiError,
    pagination::{ListQuery, PageBounds, PageResult},
};
use serde::Serialize;

/// Category of a failed list load, used by the view to pick a recovery path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListErrorKind {
    Unauthenticated,
    SessionExpired,
    RequestFailed,
    Transport,
}

/// Displayable failure of a list load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListError {
    pub kind: ListErrorKind,
    pub message: String,
}

impl ListError {
    pub fn needs_reauthentication(&self) -> bool {
        matches!(
            self.kind,
            ListErrorKind::Unauthenticated | ListErrorKind::SessionExpired
        )
    }
}

impl From<ApiError> for ListError {
    fn from(err: ApiError) -> Self {
        let (kind, message) = match err {
            ApiError::Unauthenticated => (
                ListErrorKind::Unauthenticated,
                "Not authenticated. Please log in.".to_string(),
            ),
            ApiError::SessionExpired => (
                ListErrorKind::SessionExpired,
                "Session expired. Please log in again.".to_string(),
            ),
            ApiError::RequestFailed { message, .. } => (ListErrorKind::RequestFailed, message),
            ApiError::Validation(message) => (ListErrorKind::RequestFailed, message),
            ApiError::Transport(message) => (ListErrorKind::Transport, message),
        };
        Self { kind, message }
    }
}

/// What a list view renders.
///
/// `Loading` keeps the page that was on screen when the fetch started so the
/// view does not flash to empty. It never carries a previous error.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading {
        previous: Option<PageResult<T>>,
    },
    Loaded(PageResult<T>),
    Failed(ListError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    /// Transition into `Loading`, keeping a loaded page and dropping an error.
    pub fn begin_loading(self) -> Self {
        let previous = match self {
            Self::Loaded(page) => Some(page),
            Self::Loading { previous } => previous,
            Self::Idle | Self::Failed(_) => None,
        };
        Self::Loading { previous }
    }

    pub fn settle(result: Result<PageResult<T>, ApiError>) -> Self {
        match result {
            Ok(page) => Self::Loaded(page),
            Err(err) => Self::Failed(err.into()),
        }
    }

    /// Page currently displayed, if any.
    pub fn page(&self) -> Option<&PageResult<T>> {
        match self {
            Self::Loaded(page) => Some(page),
            Self::Loading { previous } => previous.as_ref(),
            Self::Idle | Self::Failed(_) => None,
        }
    }

    pub fn items(&self) -> &[T] {
        self.page().map(|page| page.items.as_slice()).unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&ListError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Query and load state owned by one list controller.
///
/// `bounds` outlives a failed load so paging still works as a recovery path
/// while the failed page shows no items.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T, F> {
    pub query: ListQuery<F>,
    pub load: LoadState<T>,
    /// Collection size from the last successful load.
    pub bounds: Option<PageBounds>,
    pub(crate) generation: u64,
}

impl<T, F> ListState<T, F> {
    pub fn new(query: ListQuery<F>) -> Self {
        Self {
            query,
            load: LoadState::Idle,
            bounds: None,
            generation: 0,
        }
    }

    /// Applies a fetch result, remembering the bounds of a loaded page.
    pub fn settle(&mut self, result: Result<PageResult<T>, ApiError>) {
        if let Ok(page) = &result {
            self.bounds = Some(page.bounds());
        }
        self.load = LoadState::settle(result);
    }

    /// Whether `page` exists according to the last successful load.
    pub fn can_visit(&self, page: u32) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains_page(page))
    }

    /// Sequence number of the most recently issued fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
