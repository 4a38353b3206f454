use serde::{Deserialize, Serialize};

/// One organic hit. `url` is the destination, never the tracking redirect.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub url: String,
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLink {
    pub page_number: u32,
    pub offset: usize,
    pub is_current: bool,
}

/// Numbered pagination of the all-results page.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiPagePagination {
    pub page_links: Vec<PageLink>,
    pub previous_offset: usize,
    pub next_offset: usize,
}

/// Previous/next pagination of the image and video pages.
///
/// An absent link always carries a zero offset.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SinglePagePagination {
    pub previous_link_present: bool,
    pub previous_offset: usize,
    pub next_link_present: bool,
    pub next_offset: usize,
    pub current_title: String,
}

/// "Did you mean" block. `title` and `correct_search_term` are empty when not present.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCorrection {
    pub present: bool,
    pub title: String,
    pub correct_search_term: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub search_term: String,
    pub results: Vec<SearchResult>,
    pub pagination: MultiPagePagination,
    pub correction: SearchCorrection,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageResult {
    pub title: String,
    pub url_title: String,
    pub image_src: String,
    pub title_link_href: String,
    pub image_link_href: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImagesPage {
    pub search_term: String,
    pub image_results: Vec<ImageResult>,
    pub pagination: SinglePagePagination,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoResult {
    pub title: String,
    pub url_title: String,
    pub image_src: String,
    pub title_link_href: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct VideosPage {
    pub search_term: String,
    pub video_results: Vec<VideoResult>,
    pub pagination: SinglePagePagination,
}

/// Returned instead of a page when the upstream service rate limits us.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptchaPage {
    pub search_term: String,
    pub redirect_url: String,
}
