use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Default number of listings per page
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// Default width of the page-number window on wide viewports
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Narrowest supported page-number window
pub const MIN_VISIBLE: usize = 3;

/// One element of the rendered page-control sequence
///
/// Serialized the way the controls are rendered: page numbers as JSON
/// numbers, gaps as the literal string `"..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Serialize for PageToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PageToken::Page(n) => serializer.serialize_u64(*n as u64),
            PageToken::Ellipsis => serializer.serialize_str("..."),
        }
    }
}

impl<'de> Deserialize<'de> for PageToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl<'de> Visitor<'de> for TokenVisitor {
            type Value = PageToken;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a page number or \"...\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<PageToken, E> {
                Ok(PageToken::Page(value as usize))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PageToken, E> {
                if value == "..." {
                    Ok(PageToken::Ellipsis)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_any(TokenVisitor)
    }
}

/// The "showing X - Y of Z" display range, 1-based and inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRange {
    #[serde(rename = "startItem")]
    pub start_item: usize,
    #[serde(rename = "endItem")]
    pub end_item: usize,
}

/// Number of pages needed for `total_items` at `page_size` items per page
#[inline]
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1))
}

/// Compute the display range for a page
///
/// Callers hide the range entirely when there are zero items; a zero total
/// still yields the degenerate 0..0 range rather than a panic, since this
/// sits on a render path.
pub fn item_range(current_page: usize, page_size: usize, total_items: usize) -> ItemRange {
    if total_items == 0 {
        return ItemRange {
            start_item: 0,
            end_item: 0,
        };
    }

    let page = current_page.max(1);
    ItemRange {
        start_item: (page - 1) * page_size + 1,
        end_item: (page * page_size).min(total_items),
    }
}

/// Compute the page-token sequence for the pagination controls
///
/// Small page counts list every page. Larger counts always anchor on page 1
/// and the last page, with a contiguous window around the current page and
/// ellipses for the gaps. Near either edge the window sticks to that edge so
/// the control keeps a stable width.
///
/// `max_visible` is a rendering-density knob (5 wide, 3 narrow); anything
/// below 3 is clamped up. An out-of-range `current_page` is clamped into
/// `[1, total_pages]` rather than rejected.
pub fn page_tokens(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }

    let max_visible = max_visible.max(MIN_VISIBLE);
    let current = current_page.clamp(1, total_pages);

    if total_pages <= max_visible {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let mut tokens = vec![PageToken::Page(1)];

    let mut start = (current.saturating_sub(1)).max(2);
    let mut end = (current + 1).min(total_pages - 1);

    // Anchor the window to the nearest edge when the current page is close
    // to it, so the control width does not shrink at the extremes.
    if current <= 3 {
        end = (max_visible - 1).min(total_pages - 1);
    }
    if current + 2 >= total_pages {
        start = total_pages.saturating_sub(max_visible - 2).max(2);
    }

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }

    for page in start..=end {
        tokens.push(PageToken::Page(page));
    }

    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}
