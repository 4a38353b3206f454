use crate::data_models::SearchResult;
use crate::dom::QueryNode;
use crate::links;

const RESULT_ITEM: &str = "#search .g > div, .fP1Qef";
const NESTED_RESULT: &str = ".g, .fP1Qef";
const TITLE: &str = "h3";
const SNIPPET: &str = "div[data-sncf=\"1\"], .BNeawe.s3v9rd.AP7Wnd";

/// Organic results in document order.
///
/// Items wrapping other results are dropped so that every nested result is
/// reported exactly once, by itself. Items without a heading are page chrome
/// and are skipped.
pub fn extract_results<N: QueryNode>(root: &N) -> Vec<SearchResult> {
    root.select_all(RESULT_ITEM)
        .iter()
        .filter(|item| !item.exists(NESTED_RESULT))
        .filter_map(extract_result)
        .collect()
}

fn extract_result<N: QueryNode>(item: &N) -> Option<SearchResult> {
    let title = item.select_one(TITLE)?.text().trim().to_string();

    let href = item
        .select_one("a")
        .and_then(|a| a.attr("href"))
        .unwrap_or_default();

    // layouts without a snippet node keep the description in the last span
    let description = match item.select_one(SNIPPET) {
        Some(snippet) => snippet.text(),
        None => item
            .select_all("span")
            .last()
            .map(|span| span.text())
            .unwrap_or_default(),
    };

    Some(SearchResult {
        url: links::unwrap_redirect(&href),
        title,
        description: description.trim().to_string(),
    })
}
