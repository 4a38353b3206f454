//! Extraction of typed pages from parsed result documents.
//!
//! Each orchestrator reads one document and either returns the page with the
//! warnings collected along the way, or fails when the search input is
//! missing or no result could be extracted.

pub mod correction;
pub mod images;
pub mod pagination;
pub mod results;
pub mod search_term;
pub mod videos;

use crate::data_models::{ImagesPage, SearchPage, VideosPage};
use crate::diagnostics::Parsed;
use crate::dom::QueryNode;
use crate::error::ParseError;

pub use correction::extract_correction;
pub use images::extract_image_results;
pub use pagination::{
    parse_cell_row_pagination, parse_link_list_pagination, parse_multi_page_pagination,
    parse_single_page_pagination,
};
pub use results::extract_results;
pub use search_term::extract_search_term;
pub use videos::extract_video_results;

pub fn parse_search_page<N: QueryNode>(root: &N) -> Result<Parsed<SearchPage>, ParseError> {
    let search_term = extract_search_term(root)?;

    let results = extract_results(root);
    if results.is_empty() {
        return Err(ParseError::EmptyResultSet { search_term });
    }

    let correction = extract_correction(root);

    let mut parsed = Parsed::new(SearchPage {
        search_term,
        results,
        correction,
        ..Default::default()
    });

    match parse_multi_page_pagination(root) {
        Ok(pagination) => {
            let pagination = parsed.absorb(pagination);
            parsed.value.pagination = pagination;
        }
        Err(e) => parsed.warn("pagination", e.to_string()),
    }

    Ok(parsed)
}

pub fn parse_images_page<N: QueryNode>(root: &N) -> Result<Parsed<ImagesPage>, ParseError> {
    let search_term = extract_search_term(root)?;

    let image_results = extract_image_results(root)?;
    if image_results.is_empty() {
        return Err(ParseError::EmptyResultSet { search_term });
    }

    let mut parsed = Parsed::new(ImagesPage {
        search_term,
        image_results,
        ..Default::default()
    });

    match parse_single_page_pagination(root) {
        Ok(pagination) => parsed.value.pagination = pagination,
        Err(e) => parsed.warn("pagination", e.to_string()),
    }

    Ok(parsed)
}

pub fn parse_videos_page<N: QueryNode>(root: &N) -> Result<Parsed<VideosPage>, ParseError> {
    let search_term = extract_search_term(root)?;

    let video_results = extract_video_results(root);
    if video_results.is_empty() {
        return Err(ParseError::EmptyResultSet { search_term });
    }

    let mut parsed = Parsed::new(VideosPage {
        search_term,
        video_results,
        ..Default::default()
    });

    match parse_single_page_pagination(root) {
        Ok(pagination) => parsed.value.pagination = pagination,
        Err(e) => parsed.warn("pagination", e.to_string()),
    }

    Ok(parsed)
}
