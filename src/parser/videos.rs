use crate::data_models::VideoResult;
use crate::dom::QueryNode;
use crate::links;

const VIDEO_ITEM: &str = "#main > div > div";

/// Video tiles in document order. Blocks without a heading (search filters,
/// related searches) are not results and are skipped.
pub fn extract_video_results<N: QueryNode>(root: &N) -> Vec<VideoResult> {
    root.select_all(VIDEO_ITEM)
        .iter()
        .filter_map(extract_video_result)
        .collect()
}

fn extract_video_result<N: QueryNode>(item: &N) -> Option<VideoResult> {
    let title = item.select_one("h3")?.text().trim().to_string();

    let href = item
        .select_one("a")
        .and_then(|a| a.attr("href"))
        .map(|href| links::unwrap_redirect(&href))
        .unwrap_or_else(|| "#".to_string());

    let url_title = match links::url_title(&href) {
        title if title.is_empty() => href.clone(),
        title => title,
    };

    let image_src = item
        .select_one("img")
        .and_then(|img| img.attr("src"))
        .unwrap_or_default();

    let description = item
        .select_one("div > span")
        .and_then(|span| span.parent())
        .map(|block| block.text().trim().to_string())
        .unwrap_or_default();

    Some(VideoResult {
        title,
        url_title,
        image_src,
        title_link_href: href,
        description,
    })
}
