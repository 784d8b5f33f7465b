//! News slice.

use crate::app::StorefrontEnvironment;
use crate::models::News;
use junimo_core::slice::RequestStatus;
use junimo_core::{Effect, Reducer, SmallVec, smallvec};
use junimo_macros::Lifecycle;

/// News state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsState {
    /// Last fetched list
    pub news_list: Vec<News>,
    /// Post being read
    pub news_item: Option<News>,
    /// Loading/error flags
    pub status: RequestStatus,
}

/// News actions
#[derive(Lifecycle, Clone, Debug, PartialEq, Eq)]
#[slice = "news"]
pub enum NewsAction {
    /// Fetch every post
    #[request]
    GetAllNewsRequest,
    /// Posts fetched
    #[success]
    GetAllNewsSuccess(Vec<News>),
    /// Fetch failed
    #[failure]
    GetAllNewsFailure(String),

    /// Fetch one post
    #[request]
    GetNewsByIdRequest(u64),
    /// Post fetched
    #[success]
    GetNewsByIdSuccess(News),
    /// Fetch failed or the post does not exist
    #[failure]
    GetNewsByIdFailure(String),

    /// Fetch one section
    #[request]
    GetNewsByCategoryRequest(String),
    /// Section fetched
    #[success]
    GetNewsByCategorySuccess(Vec<News>),
    /// Fetch failed
    #[failure]
    GetNewsByCategoryFailure(String),

    /// Leave the post view
    ClearCurrentNewsItem,
}

/// Reducer for [`NewsState`]
#[derive(Debug, Clone, Copy, Default)]
pub struct NewsReducer;

impl Reducer for NewsReducer {
    type State = NewsState;
    type Action = NewsAction;
    type Environment = StorefrontEnvironment;

    fn reduce(
        &self,
        state: &mut NewsState,
        action: NewsAction,
        _env: &StorefrontEnvironment,
    ) -> SmallVec<[Effect<NewsAction>; 4]> {
        state.status.track(&action);

        match action {
            NewsAction::GetAllNewsSuccess(news) | NewsAction::GetNewsByCategorySuccess(news) => {
                state.news_list = news;
            },
            NewsAction::GetNewsByIdSuccess(item) => state.news_item = Some(item),
            NewsAction::ClearCurrentNewsItem => state.news_item = None,
            _ => {},
        }

        smallvec![Effect::None]
    }
}
