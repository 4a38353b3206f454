use sitelook::context::*;
use sitelook::data_models::{
    CaptchaPage, MultiPagePagination, PageLink, SearchCorrection, SearchResult,
    SinglePagePagination,
};
use sitelook::service::SearchKind;

const CURRENT: &str = "/api/search?q=rust&start=20";

#[cfg(test)]
mod multi_page_tests {
    use super::*;

    fn pagination() -> MultiPagePagination {
        MultiPagePagination {
            page_links: vec![
                PageLink { page_number: 2, offset: 10, is_current: false },
                PageLink { page_number: 3, offset: 0, is_current: true },
                PageLink { page_number: 4, offset: 30, is_current: false },
            ],
            previous_offset: 10,
            next_offset: 30,
        }
    }

    #[test]
    fn test_page_urls() {
        let context = multi_page_pagination_context(&pagination(), CURRENT);

        assert!(context.visible);
        let urls: Vec<&str> = context.page_links.iter().map(|l| l.page_url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "/api/search?q=rust&start=10",
                "/api/search?q=rust&start=0",
                "/api/search?q=rust&start=30",
            ]
        );
        assert_eq!(context.previous_url, "/api/search?q=rust&start=10");
        assert_eq!(context.next_url, "/api/search?q=rust&start=30");
        assert!(context.previous_link_active);
        assert!(context.next_link_active);
    }

    #[test]
    fn test_current_page_at_the_edges() {
        let mut pagination = pagination();
        pagination.page_links[0].is_current = true;
        pagination.page_links[1].is_current = false;
        let context = multi_page_pagination_context(&pagination, CURRENT);
        assert!(!context.previous_link_active);
        assert!(context.next_link_active);

        pagination.page_links[0].is_current = false;
        pagination.page_links[2].is_current = true;
        let context = multi_page_pagination_context(&pagination, CURRENT);
        assert!(context.previous_link_active);
        assert!(!context.next_link_active);
    }

    #[test]
    fn test_empty_pagination_is_hidden() {
        let context = multi_page_pagination_context(&MultiPagePagination::default(), CURRENT);
        assert!(!context.visible);
        assert!(!context.previous_link_active);
        assert!(!context.next_link_active);
    }
}

#[cfg(test)]
mod single_page_tests {
    use super::*;

    #[test]
    fn test_interior_page() {
        let pagination = SinglePagePagination {
            previous_link_present: true,
            previous_offset: 10,
            next_link_present: true,
            next_offset: 30,
            current_title: "Page 3".to_string(),
        };
        let context = single_page_pagination_context(&pagination, CURRENT);

        assert!(context.visible);
        assert!(context.first_page_link_present);
        assert_eq!(context.first_page_url, "/api/search?q=rust");
        assert_eq!(context.previous_url, "/api/search?q=rust&start=10");
        assert_eq!(context.next_url, "/api/search?q=rust&start=30");
        assert_eq!(context.current_title, "Page 3");
    }

    #[test]
    fn test_first_page() {
        let pagination = SinglePagePagination {
            next_link_present: true,
            next_offset: 10,
            ..Default::default()
        };
        let context = single_page_pagination_context(&pagination, "/api/search?q=rust");

        assert!(context.visible);
        assert!(!context.first_page_link_present);
        assert!(!context.previous_link_present);
        assert_eq!(context.previous_url, "");
        assert_eq!(context.next_url, "/api/search?q=rust&start=10");
    }

    #[test]
    fn test_no_pagination() {
        let context = single_page_pagination_context(&SinglePagePagination::default(), CURRENT);
        assert!(!context.visible);
    }
}

#[cfg(test)]
mod page_tests {
    use super::*;

    #[test]
    fn test_result_url_title() {
        let result = SearchResult {
            url: "https://www.rust-lang.org/learn/".to_string(),
            title: "Learn Rust".to_string(),
            description: String::new(),
        };
        assert_eq!(search_result_context(&result).url_title, "rust-lang.org/learn");
    }

    #[test]
    fn test_navigation() {
        let context = navigation_context(SearchKind::Images, "/api/search?q=rust&start=20&tbm=isch");

        assert_eq!(context.current_search_type, "Images");
        assert_eq!(context.search_query_param, "rust");
        assert_eq!(context.all_search_href, "/api/search?q=rust");
        assert_eq!(context.image_search_href, "/api/search?q=rust&tbm=isch");
        assert_eq!(context.video_search_href, "/api/search?q=rust&tbm=vid");
    }

    #[test]
    fn test_correction_href() {
        let correction = SearchCorrection {
            present: true,
            title: "Did you mean".to_string(),
            correct_search_term: "rust lang".to_string(),
        };
        let context = correction_context(&correction, "/api/search?q=rsut+lang&start=10");

        assert!(context.present);
        assert_eq!(context.correction_href, "/api/search?q=rust+lang");
    }

    #[test]
    fn test_absent_correction_has_no_href() {
        let context = correction_context(&SearchCorrection::default(), CURRENT);
        assert!(!context.present);
        assert_eq!(context.correction_href, "");
    }

    #[test]
    fn test_captcha() {
        let captcha = CaptchaPage {
            search_term: "rust".to_string(),
            redirect_url: "https://www.google.com/search?q=rust".to_string(),
        };
        assert_eq!(
            captcha_page_context(&captcha).search_redirect_url,
            "https://www.google.com/search?q=rust"
        );
    }
}
