/// Domain models for launch records and pagination metadata
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single launch entry as returned by the remote endpoint.
///
/// Replaced wholesale on every query; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Launch {
    pub id: String,
    pub flight_number: i64,
    pub date_utc: DateTime<Utc>,
    pub date_precision: String,
    pub rocket: Rocket,
    pub details: Option<String>,
    #[serde(default)]
    pub links: LaunchLinks,
}

/// Populated rocket reference, selected down to its display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
}

/// External media and reference links attached to a launch.
///
/// Every field is independently optional; absence means "not applicable",
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LaunchLinks {
    pub youtube_id: Option<String>,
    pub webcast: Option<String>,
    pub article: Option<String>,
    pub wikipedia: Option<String>,
    pub presskit: Option<String>,
    pub patch: Option<Patch>,
    pub reddit: Option<Reddit>,
    pub flickr: Option<Flickr>,
}

/// Mission patch artwork in two sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Reddit threads associated with a launch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reddit {
    pub campaign: Option<String>,
    pub launch: Option<String>,
    pub media: Option<String>,
    pub recovery: Option<String>,
}

/// Flickr photo galleries, list-valued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flickr {
    #[serde(default)]
    pub small: Vec<String>,
    #[serde(default)]
    pub original: Vec<String>,
}

/// Server-computed pagination metadata.
///
/// Wholly derived from and overwritten by each query response. The flags are
/// whatever the server reports and are trusted as-is; the client never
/// recomputes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_docs: i64,
    pub limit: i64,
    pub page: i64,
    pub total_pages: i64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl Pagination {
    /// Pre-first-query placeholder: nothing fetched yet, page 1, no
    /// navigation available until the server says otherwise.
    pub fn initial(limit: i64) -> Self {
        Self {
            limit,
            page: 1,
            ..Self::default()
        }
    }
}

/// One page of launch records together with its pagination metadata.
///
/// The two halves always travel together so controller state stays mutually
/// consistent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchPage {
    pub docs: Vec<Launch>,
    #[serde(flatten)]
    pub pagination: Pagination,
}

/// Ordering preference applied to launch date.
///
/// The full tri-state is `Option<SortDirection>`: `None` keeps the server's
/// default ordering and omits the sort clause from the outgoing query
/// entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Numeric order value understood by the query endpoint.
    pub fn as_order(self) -> i32 {
        match self {
            SortDirection::Ascending => 1,
            SortDirection::Descending => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_page_from_v4_response() {
        let raw = serde_json::json!({
            "docs": [{
                "id": "5eb87d42ffd86e000604b384",
                "flight_number": 19,
                "date_utc": "2013-12-03T22:41:00.000Z",
                "date_precision": "hour",
                "rocket": { "id": "5e9d0d95eda69973a809d1ec", "name": "Falcon 9" },
                "details": "First GTO launch for Falcon 9.",
                "links": {
                    "youtube_id": "yE2e8XLkiC8",
                    "webcast": "https://www.youtube.com/watch?v=yE2e8XLkiC8",
                    "wikipedia": "https://en.wikipedia.org/wiki/SES-8",
                    "patch": { "small": "https://images2.imgbox.com/3c/b7/LLL1CzBW_o.png" },
                    "flickr": { "small": [], "original": [] }
                }
            }],
            "totalDocs": 12,
            "limit": 5,
            "page": 2,
            "totalPages": 3,
            "hasPrevPage": true,
            "hasNextPage": true
        });

        let page: LaunchPage = serde_json::from_value(raw).expect("v4 page should decode");
        assert_eq!(page.docs.len(), 1);

        let launch = &page.docs[0];
        assert_eq!(launch.flight_number, 19);
        assert_eq!(launch.rocket.name, "Falcon 9");
        assert_eq!(launch.links.youtube_id.as_deref(), Some("yE2e8XLkiC8"));
        // Fields absent from the payload decode as "not applicable".
        assert_eq!(launch.links.article, None);
        assert_eq!(launch.links.reddit, None);
        assert!(launch.links.flickr.as_ref().unwrap().small.is_empty());

        assert_eq!(
            page.pagination,
            Pagination {
                total_docs: 12,
                limit: 5,
                page: 2,
                total_pages: 3,
                has_prev_page: true,
                has_next_page: true,
            }
        );
    }

    #[test]
    fn test_launch_decodes_without_links_field() {
        let raw = serde_json::json!({
            "id": "x",
            "flight_number": 1,
            "date_utc": "2006-03-24T22:30:00.000Z",
            "date_precision": "hour",
            "rocket": { "id": "r1", "name": "Falcon 1" },
            "details": null
        });

        let launch: Launch = serde_json::from_value(raw).expect("launch should decode");
        assert_eq!(launch.links, LaunchLinks::default());
        assert_eq!(launch.details, None);
    }

    #[test]
    fn test_initial_pagination_disallows_navigation() {
        let p = Pagination::initial(5);
        assert_eq!(p.page, 1);
        assert_eq!(p.limit, 5);
        assert!(!p.has_prev_page);
        assert!(!p.has_next_page);
        assert_eq!(p.total_docs, 0);
    }

    #[test]
    fn test_sort_direction_order_values() {
        assert_eq!(SortDirection::Ascending.as_order(), 1);
        assert_eq!(SortDirection::Descending.as_order(), -1);
    }
}
