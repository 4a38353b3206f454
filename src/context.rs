//! View models handed to clients. Every link is rebuilt from the url of the
//! current request so that navigation stays on this service.

use serde::Serialize;

use crate::data_models::{
    CaptchaPage, ImageResult, ImagesPage, MultiPagePagination, SearchCorrection, SearchPage,
    SearchResult, SinglePagePagination, VideoResult, VideosPage,
};
use crate::links;
use crate::offset::{OFFSET_PARAM, encode_offset};
use crate::service::SearchKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResultContext {
    pub url: String,
    pub title: String,
    pub url_title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinkContext {
    pub page_number: u32,
    pub page_url: String,
    pub is_current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiPagePaginationContext {
    pub visible: bool,
    pub page_links: Vec<PageLinkContext>,
    pub previous_url: String,
    pub previous_link_active: bool,
    pub next_url: String,
    pub next_link_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SinglePagePaginationContext {
    pub visible: bool,
    pub first_page_link_present: bool,
    pub first_page_url: String,
    pub previous_link_present: bool,
    pub previous_url: String,
    pub next_link_present: bool,
    pub next_url: String,
    pub current_title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchNavigationContext {
    pub current_search_type: &'static str,
    pub search_query_param: String,
    pub all_search_href: String,
    pub image_search_href: String,
    pub video_search_href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchCorrectionContext {
    pub present: bool,
    pub title: String,
    pub correct_search_term: String,
    pub correction_href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchPageContext {
    pub search_term: String,
    pub search_results: Vec<SearchResultContext>,
    pub pagination: MultiPagePaginationContext,
    pub navigation: SearchNavigationContext,
    pub search_correction: SearchCorrectionContext,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImagesPageContext {
    pub search_term: String,
    pub image_results: Vec<ImageResult>,
    pub pagination: SinglePagePaginationContext,
    pub navigation: SearchNavigationContext,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideosPageContext {
    pub search_term: String,
    pub video_results: Vec<VideoResult>,
    pub pagination: SinglePagePaginationContext,
    pub navigation: SearchNavigationContext,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaptchaPageContext {
    pub search_redirect_url: String,
}

pub fn search_result_context(result: &SearchResult) -> SearchResultContext {
    SearchResultContext {
        url: result.url.clone(),
        title: result.title.clone(),
        url_title: links::url_title(&result.url),
        description: result.description.clone(),
    }
}

pub fn multi_page_pagination_context(
    pagination: &MultiPagePagination,
    current_url: &str,
) -> MultiPagePaginationContext {
    let page_links: Vec<PageLinkContext> = pagination
        .page_links
        .iter()
        .map(|link| PageLinkContext {
            page_number: link.page_number,
            page_url: encode_offset(current_url, link.offset),
            is_current: link.is_current,
        })
        .collect();

    let previous_link_active = page_links.first().is_some_and(|link| !link.is_current);
    let next_link_active = page_links.last().is_some_and(|link| !link.is_current);

    MultiPagePaginationContext {
        visible: !page_links.is_empty(),
        page_links,
        previous_url: encode_offset(current_url, pagination.previous_offset),
        previous_link_active,
        next_url: encode_offset(current_url, pagination.next_offset),
        next_link_active,
    }
}

pub fn single_page_pagination_context(
    pagination: &SinglePagePagination,
    current_url: &str,
) -> SinglePagePaginationContext {
    let url_if = |present: bool, offset: usize| {
        if present {
            encode_offset(current_url, offset)
        } else {
            String::new()
        }
    };

    // past the second page the previous link no longer leads to the first one
    let first_page_link_present =
        pagination.previous_link_present && pagination.previous_offset > 0;

    SinglePagePaginationContext {
        visible: pagination.previous_link_present || pagination.next_link_present,
        first_page_link_present,
        first_page_url: if first_page_link_present {
            links::remove_query_param(current_url, OFFSET_PARAM)
        } else {
            String::new()
        },
        previous_link_present: pagination.previous_link_present,
        previous_url: url_if(pagination.previous_link_present, pagination.previous_offset),
        next_link_present: pagination.next_link_present,
        next_url: url_if(pagination.next_link_present, pagination.next_offset),
        current_title: pagination.current_title.clone(),
    }
}

/// Links to the other result kinds for the same query, starting from the
/// first page since offsets differ between kinds.
pub fn navigation_context(kind: SearchKind, current_url: &str) -> SearchNavigationContext {
    let first_page = links::remove_query_param(current_url, OFFSET_PARAM);

    SearchNavigationContext {
        current_search_type: kind.label(),
        search_query_param: links::query_param(current_url, "q").unwrap_or_default(),
        all_search_href: links::remove_query_param(&first_page, "tbm"),
        image_search_href: links::set_query_param(&first_page, "tbm", "isch"),
        video_search_href: links::set_query_param(&first_page, "tbm", "vid"),
    }
}

pub fn correction_context(
    correction: &SearchCorrection,
    current_url: &str,
) -> SearchCorrectionContext {
    let correction_href = if correction.present {
        let first_page = links::remove_query_param(current_url, OFFSET_PARAM);
        links::set_query_param(&first_page, "q", &correction.correct_search_term)
    } else {
        String::new()
    };

    SearchCorrectionContext {
        present: correction.present,
        title: correction.title.clone(),
        correct_search_term: correction.correct_search_term.clone(),
        correction_href,
    }
}

pub fn search_page_context(page: &SearchPage, current_url: &str) -> SearchPageContext {
    SearchPageContext {
        search_term: page.search_term.clone(),
        search_results: page.results.iter().map(search_result_context).collect(),
        pagination: multi_page_pagination_context(&page.pagination, current_url),
        navigation: navigation_context(SearchKind::All, current_url),
        search_correction: correction_context(&page.correction, current_url),
    }
}

pub fn images_page_context(page: &ImagesPage, current_url: &str) -> ImagesPageContext {
    ImagesPageContext {
        search_term: page.search_term.clone(),
        image_results: page.image_results.clone(),
        pagination: single_page_pagination_context(&page.pagination, current_url),
        navigation: navigation_context(SearchKind::Images, current_url),
    }
}

pub fn videos_page_context(page: &VideosPage, current_url: &str) -> VideosPageContext {
    VideosPageContext {
        search_term: page.search_term.clone(),
        video_results: page.video_results.clone(),
        pagination: single_page_pagination_context(&page.pagination, current_url),
        navigation: navigation_context(SearchKind::Videos, current_url),
    }
}

pub fn captcha_page_context(captcha: &CaptchaPage) -> CaptchaPageContext {
    CaptchaPageContext {
        search_redirect_url: captcha.redirect_url.clone(),
    }
}
