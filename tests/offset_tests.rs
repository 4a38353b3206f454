use sitelook::dom::{Document, QueryNode};
use sitelook::offset::*;

#[cfg(test)]
mod decode_tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for n in [0, 1, 10, 90, 12_345, usize::MAX] {
            let href = encode_offset("/search?q=rust", n);
            assert_eq!(decode_offset(&href), Some(n), "href: {href}");
        }
    }

    #[test]
    fn test_round_trip_absolute_url() {
        let href = encode_offset("https://www.google.com/search?q=rust&tbm=isch", 40);
        assert_eq!(
            href,
            "https://www.google.com/search?q=rust&tbm=isch&start=40"
        );
        assert_eq!(decode_offset(&href), Some(40));
    }

    #[test]
    fn test_missing_start() {
        assert_eq!(decode_offset("/search?q=rust"), None);
        assert_eq!(decode_offset("#"), None);
        assert_eq!(decode_offset(""), None);
    }

    #[test]
    fn test_unparsable_start() {
        assert_eq!(decode_offset("/search?q=rust&start="), None);
        assert_eq!(decode_offset("/search?q=rust&start=ten"), None);
        assert_eq!(decode_offset("/search?q=rust&start=-10"), None);
        assert_eq!(decode_offset("/search?q=rust&start=1.5"), None);
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(decode_offset("/search?start=10&start=20"), Some(10));
    }

    #[test]
    fn test_malformed_url() {
        assert_eq!(decode_offset("http://[::1/search?start=10"), None);
    }
}

#[cfg(test)]
mod encode_tests {
    use super::*;

    #[test]
    fn test_replaces_existing_start() {
        assert_eq!(
            encode_offset("/search?q=rust&start=10&tbm=vid", 20),
            "/search?q=rust&start=20&tbm=vid"
        );
    }

    #[test]
    fn test_keeps_encoded_terms() {
        let href = encode_offset("/search?q=rust+lang", 10);
        assert_eq!(href, "/search?q=rust+lang&start=10");
        assert_eq!(
            sitelook::links::query_param(&href, "q").as_deref(),
            Some("rust lang")
        );
    }
}

#[cfg(test)]
mod link_offset_tests {
    use super::*;

    #[test]
    fn test_link_and_inner_link_offsets() {
        let doc = Document::parse(
            r#"<div id="cell"><a href="/search?q=rust&start=30">4</a></div><a id="bare">x</a>"#,
        );
        let root = doc.root();
        let cell = root.select_one("#cell").unwrap();
        assert_eq!(inner_link_offset(&cell), Some(30));

        let bare = root.select_one("#bare").unwrap();
        assert_eq!(link_offset(&bare), None);
        assert_eq!(inner_link_offset(&bare), None);
    }
}
