//! Pagination offsets, carried by anchors as the `start` query parameter.

use crate::dom::QueryNode;
use crate::links;

pub const OFFSET_PARAM: &str = "start";

/// Reads the offset from an href. `None` when `start` is missing, is not a
/// non-negative integer, or the href is malformed.
pub fn decode_offset(href: &str) -> Option<usize> {
    links::query_param(href, OFFSET_PARAM)?.parse().ok()
}

/// Inverse of [`decode_offset`]: sets `start` on `href`.
pub fn encode_offset(href: &str, offset: usize) -> String {
    links::set_query_param(href, OFFSET_PARAM, &offset.to_string())
}

/// Offset of an anchor node.
pub fn link_offset<N: QueryNode>(link: &N) -> Option<usize> {
    decode_offset(&link.attr("href")?)
}

/// Offset of the first anchor inside `node`.
pub fn inner_link_offset<N: QueryNode>(node: &N) -> Option<usize> {
    link_offset(&node.select_one("a")?)
}
