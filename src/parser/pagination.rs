//! Pagination parsers.
//!
//! The all-results page uses a numbered table ([`parse_multi_page_pagination`]).
//! Image and video pages only offer previous/next navigation, rendered either
//! as a fixed row of cells or as a run of sibling links next to a label; both
//! decode into [`SinglePagePagination`]. The cardinality rules below were
//! derived from observed pages and are kept as explicit tables.

use crate::data_models::{MultiPagePagination, PageLink, SinglePagePagination};
use crate::diagnostics::Parsed;
use crate::dom::QueryNode;
use crate::error::ParseError;
use crate::offset::{inner_link_offset, link_offset};

const SECTION: &str = "pagination";

const MULTI_PAGE_TABLE: &str = "div[role=\"navigation\"] table[role=\"presentation\"]";
const CELL_TABLE: &str = "body > table";
const LINK_LIST_REGION: &str = "footer > div";
const LINK_LIST_ANCHOR: &str = "div > a";

/// How a multi-page pagination cell is read.
#[derive(Debug, PartialEq)]
enum PageCell {
    Previous,
    Next,
    Page(PageLink),
    Malformed,
}

fn classify_page_cell<N: QueryNode>(index: usize, cell: &N) -> PageCell {
    // previous/next cells carry a role marker, numbered cells don't
    if cell.attr("role").is_some() {
        return if index == 0 {
            PageCell::Previous
        } else {
            PageCell::Next
        };
    }

    let link = cell.select_one("a[href]");
    let is_current = link.is_none() && cell.exists("span");

    match cell.text().trim().parse::<u32>() {
        Ok(page_number) if link.is_some() || is_current => PageCell::Page(PageLink {
            page_number,
            offset: link.as_ref().and_then(link_offset).unwrap_or_default(),
            is_current,
        }),
        _ => PageCell::Malformed,
    }
}

/// Parses the numbered pagination table of the all-results page.
///
/// Malformed cells are reported as warnings and skipped. Page numbers are
/// returned in document order without further validation.
pub fn parse_multi_page_pagination<N: QueryNode>(
    root: &N,
) -> Result<Parsed<MultiPagePagination>, ParseError> {
    let table = root
        .select_one(MULTI_PAGE_TABLE)
        .ok_or(ParseError::NotFound(SECTION))?;

    let mut parsed = Parsed::new(MultiPagePagination::default());

    for (index, cell) in table.select_all("td").iter().enumerate() {
        match classify_page_cell(index, cell) {
            PageCell::Previous => {
                parsed.value.previous_offset = inner_link_offset(cell).unwrap_or_default();
            }
            PageCell::Next => {
                parsed.value.next_offset = inner_link_offset(cell).unwrap_or_default();
            }
            PageCell::Page(link) => parsed.value.page_links.push(link),
            PageCell::Malformed => {
                parsed.warn(SECTION, format!("malformed page cell `{}`", cell.html()));
            }
        }
    }

    Ok(parsed)
}

/// Layouts of the cell-row pagination, keyed by cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellRowLayout {
    /// `[next]`
    FirstPage,
    /// `[_, previous, current title, next, _]`
    Interior,
}

fn classify_cell_row(cells: usize) -> Result<CellRowLayout, ParseError> {
    match cells {
        1 => Ok(CellRowLayout::FirstPage),
        5 => Ok(CellRowLayout::Interior),
        found => Err(ParseError::ShapeMismatch {
            section: SECTION,
            found,
            expected: "1 or 5 cells",
        }),
    }
}

/// Decodes pagination rendered as a single row of table cells.
pub fn parse_cell_row_pagination<N: QueryNode>(
    root: &N,
) -> Result<SinglePagePagination, ParseError> {
    let table = root
        .select_one(CELL_TABLE)
        .ok_or(ParseError::NotFound(SECTION))?;
    let cells = table.select_all("td");

    let mut pagination = SinglePagePagination::default();

    match classify_cell_row(cells.len())? {
        CellRowLayout::FirstPage => {
            pagination.next_link_present = true;
            pagination.next_offset = inner_link_offset(&cells[0]).unwrap_or_default();
        }
        CellRowLayout::Interior => {
            let previous = cells[1].select_one("a");
            pagination.previous_link_present = previous.is_some();
            pagination.previous_offset = previous.as_ref().and_then(link_offset).unwrap_or_default();

            pagination.current_title = cells[2].text().trim().to_string();

            // a next link without a usable offset is not followed
            if let Some(offset) = cells[3].select_one("a").as_ref().and_then(link_offset) {
                pagination.next_link_present = true;
                pagination.next_offset = offset;
            }
        }
    }

    Ok(pagination)
}

/// Layouts of the link-list pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkListLayout {
    /// `next`
    FirstPage,
    /// `previous label`
    SecondAndLastPage,
    /// `previous next label`
    SecondPage,
    /// `first previous label`
    LastPage,
    /// `first previous next label`
    InteriorPage,
}

/// Maps (link count, label present, label is the last child) to a layout.
fn classify_link_list(
    links: usize,
    has_label: bool,
    label_is_last: bool,
) -> Result<LinkListLayout, ParseError> {
    match (links, has_label, label_is_last) {
        (0, _, _) => Err(ParseError::NotFound("pagination links")),
        (1, true, _) => Ok(LinkListLayout::SecondAndLastPage),
        (1, false, _) => Ok(LinkListLayout::FirstPage),
        (2, _, true) => Ok(LinkListLayout::LastPage),
        (2, _, false) => Ok(LinkListLayout::SecondPage),
        (3, _, _) => Ok(LinkListLayout::InteriorPage),
        (found, _, _) => Err(ParseError::ShapeMismatch {
            section: SECTION,
            found,
            expected: "1-3 links",
        }),
    }
}

/// Decodes pagination rendered as sibling links plus a current-page label.
///
/// The container is the parent of the first link inside the footer region.
pub fn parse_link_list_pagination<N: QueryNode>(
    root: &N,
) -> Result<SinglePagePagination, ParseError> {
    let container = root
        .select_one(LINK_LIST_REGION)
        .and_then(|region| region.select_one(LINK_LIST_ANCHOR))
        .and_then(|anchor| anchor.parent())
        .ok_or(ParseError::NotFound(SECTION))?;

    let links = container.select_all("a");
    let children = container.children();
    let label = children.iter().find(|child| child.is("span"));
    let label_is_last = children.last().is_some_and(|child| child.is("span"));

    let offset_of = |index: usize| link_offset(&links[index]).unwrap_or_default();
    let title = label
        .map(|label| label.text().trim().to_string())
        .unwrap_or_default();

    let mut pagination = SinglePagePagination::default();

    match classify_link_list(links.len(), label.is_some(), label_is_last)? {
        LinkListLayout::FirstPage => {
            pagination.next_link_present = true;
            pagination.next_offset = offset_of(0);
        }
        LinkListLayout::SecondAndLastPage => {
            pagination.previous_link_present = true;
            pagination.previous_offset = offset_of(0);
            pagination.current_title = title;
        }
        LinkListLayout::LastPage => {
            pagination.previous_link_present = true;
            pagination.previous_offset = offset_of(1);
            pagination.current_title = title;
        }
        LinkListLayout::SecondPage => {
            pagination.previous_link_present = true;
            pagination.previous_offset = offset_of(0);
            pagination.next_link_present = true;
            pagination.next_offset = offset_of(1);
            pagination.current_title = title;
        }
        LinkListLayout::InteriorPage => {
            pagination.previous_link_present = true;
            pagination.previous_offset = offset_of(1);
            pagination.next_link_present = true;
            pagination.next_offset = offset_of(2);
            pagination.current_title = title;
        }
    }

    Ok(pagination)
}

/// Picks the single-page decoder from the markup: a top-level table means
/// the cell row, anything else is read as a link list.
pub fn parse_single_page_pagination<N: QueryNode>(
    root: &N,
) -> Result<SinglePagePagination, ParseError> {
    if root.exists(CELL_TABLE) {
        parse_cell_row_pagination(root)
    } else {
        parse_link_list_pagination(root)
    }
}
