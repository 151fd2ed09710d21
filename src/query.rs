//! List Query State
//!
//! The filter and page fields driving the contribution list, with their
//! canonical serializations: one minimal parameter set mirrored into the
//! address bar, one parameter set sent to the listing endpoint.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Records per page, fixed by the listing endpoint contract.
pub const PAGE_LIMIT: u64 = 14;

/// Characters escaped in query-string values. Covers the separators and
/// anything a browser would refuse to echo back verbatim.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Free-text filters plus the zero-based page index.
///
/// This is the whole of the view state that outlives a render: it is read
/// from the URL once at mount, edited by the filter inputs and pagination
/// controls, and written back to the URL on every change.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListQuery {
    pub title: String,
    pub description: String,
    pub owner: String,
    pub page: u32,
}

impl ListQuery {
    // ========================
    // Transitions
    // ========================

    /// Filter edits restart pagination from the first page.
    pub fn edit_title(&mut self, value: String) {
        self.title = value;
        self.page = 0;
    }

    pub fn edit_description(&mut self, value: String) {
        self.description = value;
        self.page = 0;
    }

    pub fn edit_owner(&mut self, value: String) {
        self.owner = value;
        self.page = 0;
    }

    /// Steps back one page, floored at the first page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Steps forward one page unless the next page would start past `total`.
    pub fn next_page(&mut self, total: u64) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: u64) -> bool {
        (u64::from(self.page) + 1) * PAGE_LIMIT < total
    }

    /// One-based page label shown between the pagination controls.
    pub fn page_label(&self) -> String {
        format!("Page {}", self.page + 1)
    }

    /// Offset of the first record on the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page) * PAGE_LIMIT
    }

    // ========================
    // Serialization
    // ========================

    /// Minimal address-bar parameters: filters only when non-empty, page
    /// only when non-zero, in a fixed order.
    pub fn to_url_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.title.is_empty() {
            pairs.push(("title", self.title.clone()));
        }
        if !self.description.is_empty() {
            pairs.push(("description", self.description.clone()));
        }
        if !self.owner.is_empty() {
            pairs.push(("owner", self.owner.clone()));
        }
        if self.page != 0 {
            pairs.push(("page", self.page.to_string()));
        }
        pairs
    }

    /// Parameters for the listing request: the paging window always, the
    /// filters under the same inclusion rule as the address bar.
    pub fn to_request_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("skip", self.skip().to_string()),
            ("limit", PAGE_LIMIT.to_string()),
        ];
        if !self.title.is_empty() {
            pairs.push(("title", self.title.clone()));
        }
        if !self.description.is_empty() {
            pairs.push(("description", self.description.clone()));
        }
        if !self.owner.is_empty() {
            pairs.push(("owner", self.owner.clone()));
        }
        pairs
    }

    /// Encoded form of [`Self::to_url_pairs`], without a leading `?`.
    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.to_url_pairs())
    }

    /// Parses a query string (with or without a leading `?`).
    ///
    /// Unknown keys are ignored, so they disappear on the next write. A
    /// `page` value that fails to parse falls back to the first page.
    pub fn from_query_str(query: &str) -> Self {
        let mut parsed = Self::default();
        for part in query.trim_start_matches('?').split('&') {
            if part.is_empty() {
                continue;
            }
            let (key, value) = part.split_once('=').unwrap_or((part, ""));
            let value = decode_component(value);
            match decode_component(key).as_str() {
                "title" => parsed.title = value,
                "description" => parsed.description = value,
                "owner" => parsed.owner = value,
                "page" => parsed.page = value.parse().unwrap_or(0),
                _ => {}
            }
        }
        parsed
    }
}

/// Joins pairs into `k=v&k=v` form, percent-encoding the values. Keys are
/// fixed identifiers and need no escaping.
pub fn encode_pairs(pairs: &[(&'static str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}

fn decode_component(raw: &str) -> String {
    // Browsers hand back both %20 and + for a space.
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_on_page(page: u32) -> ListQuery {
        ListQuery {
            page,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_edits_reset_the_page() {
        let mut q = query_on_page(3);
        q.edit_title("launch".to_string());
        assert_eq!(q.page, 0);
        assert_eq!(q.title, "launch");

        let mut q = query_on_page(3);
        q.edit_description("teaser".to_string());
        assert_eq!(q.page, 0);

        let mut q = query_on_page(3);
        q.edit_owner("studio".to_string());
        assert_eq!(q.page, 0);
    }

    #[test]
    fn test_url_pairs_omit_empty_and_zero() {
        assert!(ListQuery::default().to_url_pairs().is_empty());

        let q = ListQuery {
            title: "x".to_string(),
            page: 2,
            ..Default::default()
        };
        assert_eq!(
            q.to_url_pairs(),
            vec![("title", "x".to_string()), ("page", "2".to_string())]
        );
    }

    #[test]
    fn test_url_pairs_are_idempotent() {
        let q = ListQuery {
            title: "launch".to_string(),
            owner: "studio".to_string(),
            page: 4,
            ..Default::default()
        };
        assert_eq!(q.to_url_pairs(), q.to_url_pairs());
        assert_eq!(q.to_query_string(), q.to_query_string());
    }

    #[test]
    fn test_url_round_trip() {
        let q = ListQuery::from_query_str("title=x&page=2");
        assert_eq!(q.title, "x");
        assert_eq!(q.page, 2);
        assert_eq!(q.to_query_string(), "title=x&page=2");
    }

    #[test]
    fn test_round_trip_with_reserved_characters() {
        let q = ListQuery {
            title: "a&b=c+d %".to_string(),
            owner: "tilde ~ fine".to_string(),
            ..Default::default()
        };
        assert_eq!(ListQuery::from_query_str(&q.to_query_string()), q);
    }

    #[test]
    fn test_parse_tolerates_junk() {
        let q = ListQuery::from_query_str("?title=a%20b&flavor=unknown&page=abc");
        assert_eq!(q.title, "a b");
        assert_eq!(q.page, 0);

        let q = ListQuery::from_query_str("title=a+b");
        assert_eq!(q.title, "a b");
    }

    #[test]
    fn test_request_pairs_always_carry_the_window() {
        let q = query_on_page(2);
        assert_eq!(
            q.to_request_pairs(),
            vec![("skip", "28".to_string()), ("limit", "14".to_string())]
        );

        let q = ListQuery {
            owner: "studio".to_string(),
            ..Default::default()
        };
        assert_eq!(
            q.to_request_pairs(),
            vec![
                ("skip", "0".to_string()),
                ("limit", "14".to_string()),
                ("owner", "studio".to_string()),
            ]
        );
    }

    #[test]
    fn test_pagination_gating() {
        // Page 0 of 30 records: a full page plus more behind it.
        let q = query_on_page(0);
        assert!(q.has_next(30));
        assert!(!q.has_prev());
        assert_eq!(q.page_label(), "Page 1");

        // Page 1 of 30: records 14..27 shown, 28th and 29th remain, so one
        // more page exists; page 2 holds the tail.
        let q = query_on_page(1);
        assert!(q.has_next(30));
        let q = query_on_page(2);
        assert!(!q.has_next(30));

        // An exact multiple leaves no partial page behind.
        let q = query_on_page(1);
        assert!(!q.has_next(28));
    }

    #[test]
    fn test_page_transitions_respect_bounds() {
        let mut q = query_on_page(0);
        q.prev_page();
        assert_eq!(q.page, 0);

        q.next_page(30);
        assert_eq!(q.page, 1);
        q.next_page(30);
        assert_eq!(q.page, 2);
        // 3 * 14 >= 30: stepping past the last page is a no-op.
        q.next_page(30);
        assert_eq!(q.page, 2);

        q.prev_page();
        assert_eq!(q.page, 1);
    }
}
