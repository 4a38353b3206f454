use crate::dom::QueryNode;
use crate::error::ParseError;

const SEARCH_INPUT: &str = "input[name=\"q\"]";
const SEARCH_TEXTAREA: &str = "textarea";

/// The query as the upstream service understood it, which may differ from
/// the requested one after autocorrection.
pub fn extract_search_term<N: QueryNode>(root: &N) -> Result<String, ParseError> {
    if let Some(input) = root.select_one(SEARCH_INPUT) {
        return Ok(input.attr("value").unwrap_or_default());
    }

    // older layouts render the query box as a textarea
    if let Some(textarea) = root.select_one(SEARCH_TEXTAREA) {
        return Ok(textarea.text().trim().to_string());
    }

    Err(ParseError::NotFound("search input"))
}
