use once_cell::sync::Lazy;
use reqwest::Url;

/// Base used to resolve the relative hrefs found in result pages.
static BASE: Lazy<Option<Url>> = Lazy::new(|| Url::parse("http://localhost/").ok());

const REDIRECT_PATH: &str = "/url";
const REDIRECT_PARAMS: [&str; 2] = ["q", "url"];

fn parse_href(href: &str) -> Option<Url> {
    let base = BASE.as_ref()?;
    Url::options().base_url(Some(base)).parse(href).ok()
}

fn is_absolute(href: &str) -> bool {
    Url::parse(href).is_ok()
}

/// First value of `key` in the query of `href`. `None` when the parameter is
/// missing or the href cannot be parsed.
pub fn query_param(href: &str, key: &str) -> Option<String> {
    let url = parse_href(href)?;
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Resolves a redirect wrapper such as `/url?q=https://example.com/&sa=U`
/// to the destination it carries. Any other href is returned unchanged.
pub fn unwrap_redirect(href: &str) -> String {
    let Some(url) = parse_href(href) else {
        return href.to_string();
    };
    if url.path() != REDIRECT_PATH {
        return href.to_string();
    }

    REDIRECT_PARAMS
        .iter()
        .filter_map(|key| query_param(href, key))
        .find(|target| !target.is_empty())
        .unwrap_or_else(|| href.to_string())
}

fn rewrite_query(href: &str, edit: impl FnOnce(&mut Vec<(String, String)>)) -> String {
    let Some(mut url) = parse_href(href) else {
        return href.to_string();
    };

    let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    edit(&mut pairs);

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs.iter());
    }

    if is_absolute(href) {
        url.to_string()
    } else {
        match url.query() {
            Some(query) => format!("{}?{}", url.path(), query),
            None => url.path().to_string(),
        }
    }
}

/// Sets `key=value` on `href`, keeping the other parameters in place.
/// Relative hrefs stay relative (`path?query`).
pub fn set_query_param(href: &str, key: &str, value: &str) -> String {
    rewrite_query(href, |pairs| {
        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.to_string();
            replaced = true;
            true
        });
        if !replaced {
            pairs.push((key.to_string(), value.to_string()));
        }
    })
}

pub fn remove_query_param(href: &str, key: &str) -> String {
    rewrite_query(href, |pairs| pairs.retain(|(k, _)| k != key))
}

/// Short display form of a destination url: host without `www.` followed by
/// the path, trailing slashes trimmed.
pub fn url_title(url: &str) -> String {
    let Ok(url) = Url::parse(url) else {
        return String::new();
    };
    let host = url.host_str().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    format!("{host}{}", url.path())
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_redirect() {
        assert_eq!(
            unwrap_redirect("/url?q=https://example.com/page&sa=U&ved=123"),
            "https://example.com/page"
        );
        assert_eq!(
            unwrap_redirect("/url?url=https%3A%2F%2Fexample.com%2F%3Fa%3D1"),
            "https://example.com/?a=1"
        );
        assert_eq!(
            unwrap_redirect("https://example.com/direct"),
            "https://example.com/direct"
        );
        assert_eq!(unwrap_redirect("/search?q=rust"), "/search?q=rust");
    }

    #[test]
    fn test_set_and_remove_query_param() {
        assert_eq!(
            set_query_param("/search?q=rust&start=10", "start", "20"),
            "/search?q=rust&start=20"
        );
        assert_eq!(
            set_query_param("/search?q=rust", "tbm", "isch"),
            "/search?q=rust&tbm=isch"
        );
        assert_eq!(
            remove_query_param("/search?q=rust&tbm=vid", "tbm"),
            "/search?q=rust"
        );
        assert_eq!(remove_query_param("/search?tbm=vid", "tbm"), "/search");
    }

    #[test]
    fn test_url_title() {
        assert_eq!(url_title("https://www.rust-lang.org/"), "rust-lang.org");
        assert_eq!(
            url_title("https://doc.rust-lang.org/book/"),
            "doc.rust-lang.org/book"
        );
        assert_eq!(url_title("not a url"), "");
    }
}
