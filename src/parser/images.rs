use crate::data_models::ImageResult;
use crate::dom::QueryNode;
use crate::error::ParseError;
use crate::links;

const IMAGE_ITEM: &str = "tbody";
const IMAGE_LABEL: &str = "a span > span";

/// Image tiles in document order.
///
/// A tile is an innermost table body holding exactly one image. Tiles are
/// expected to carry two links (image, then title) and two labels (title,
/// then source); any other count means the layout changed and aborts the
/// whole pass.
pub fn extract_image_results<N: QueryNode>(root: &N) -> Result<Vec<ImageResult>, ParseError> {
    let mut results = Vec::new();

    for item in root.select_all(IMAGE_ITEM) {
        // the grid around the tiles is a table too
        if item.exists(IMAGE_ITEM) {
            continue;
        }

        let images = item.select_all("img");
        if images.len() != 1 {
            continue;
        }
        let image_src = images[0].attr("src").unwrap_or_else(|| "#".to_string());

        let anchors = item.select_all("a");
        if anchors.len() != 2 {
            return Err(ParseError::ShapeMismatch {
                section: "image result links",
                found: anchors.len(),
                expected: "2",
            });
        }
        let href_of = |anchor: &N| links::unwrap_redirect(&anchor.attr("href").unwrap_or_default());

        let labels = item.select_all(IMAGE_LABEL);
        if labels.len() != 2 {
            return Err(ParseError::ShapeMismatch {
                section: "image result labels",
                found: labels.len(),
                expected: "2",
            });
        }

        results.push(ImageResult {
            title: labels[0].text().trim().to_string(),
            url_title: labels[1].text().trim().to_string(),
            image_src,
            title_link_href: href_of(&anchors[1]),
            image_link_href: href_of(&anchors[0]),
        });
    }

    Ok(results)
}
