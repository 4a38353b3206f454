use serde::{Deserialize, Serialize};

use crate::context::{
    CaptchaPageContext, ImagesPageContext, SearchPageContext, VideosPageContext,
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub q: Option<String>,
    /// Kept as text: an unparsable offset means the first page.
    pub start: Option<String>,
    pub tbm: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageBody {
    Search(SearchPageContext),
    Images(ImagesPageContext),
    Videos(VideosPageContext),
    Captcha(CaptchaPageContext),
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub page: PageBody,
    pub warnings: Vec<String>,
    pub processing_time_ms: u128,
}
