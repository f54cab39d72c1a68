/// Remote launch-query client
use crate::domain::{LaunchPage, SortDirection};
use crate::errors::{QueryError, QueryResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Launches with unknown or placeholder dates are excluded from every query.
const DATE_PRECISIONS: &[&str] = &["year", "month", "day", "hour"];

/// The fields a launch record is selected down to.
const LAUNCH_FIELDS: &[&str] = &[
    "flight_number",
    "date_utc",
    "date_precision",
    "rocket",
    "details",
    "links",
];

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> QueryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("launchboard/0.1")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// A source of launch pages.
///
/// The controller talks to the network through this seam; tests substitute a
/// scripted source.
#[async_trait]
pub trait LaunchSource {
    /// Fetch one page of launches. Exactly one request per call; no retry,
    /// no batching, no caching of prior pages.
    async fn query_launches(
        &self,
        page: i64,
        limit: i64,
        sort: Option<SortDirection>,
    ) -> QueryResult<LaunchPage>;
}

/// SpaceX v4 launch-query API client
pub struct SpaceXClient {
    http_client: HttpClient,
    base_url: String,
}

impl SpaceXClient {
    pub fn new(base_url: String, timeout: Duration) -> QueryResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url,
        })
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LaunchSource for SpaceXClient {
    async fn query_launches(
        &self,
        page: i64,
        limit: i64,
        sort: Option<SortDirection>,
    ) -> QueryResult<LaunchPage> {
        let url = format!("{}/launches/query", self.base_url);
        let body = build_query_body(page, limit, sort);

        let resp = self
            .http_client
            .get_client()
            .post(&url)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QueryError::Status { status });
        }

        let launch_page = resp.json::<LaunchPage>().await?;
        Ok(launch_page)
    }
}

/// Wire shape of the `launches/query` request body.
#[derive(Debug, Serialize)]
struct QueryBody {
    query: LaunchFilter,
    options: QueryOptions,
}

#[derive(Debug, Serialize)]
struct LaunchFilter {
    date_precision: PrecisionFilter,
    tbd: bool,
}

#[derive(Debug, Serialize)]
struct PrecisionFilter {
    #[serde(rename = "$in")]
    any_of: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct QueryOptions {
    page: i64,
    limit: i64,
    // Omitted entirely when no direction is set; a neutral value is never sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<SortClause>,
    select: &'static [&'static str],
    populate: Populate,
}

#[derive(Debug, Serialize)]
struct SortClause {
    date_utc: i32,
}

#[derive(Debug, Serialize)]
struct Populate {
    path: &'static str,
    select: &'static [&'static str],
}

fn build_query_body(page: i64, limit: i64, sort: Option<SortDirection>) -> QueryBody {
    QueryBody {
        query: LaunchFilter {
            date_precision: PrecisionFilter {
                any_of: DATE_PRECISIONS,
            },
            tbd: false,
        },
        options: QueryOptions {
            page,
            limit,
            sort: sort.map(|direction| SortClause {
                date_utc: direction.as_order(),
            }),
            select: LAUNCH_FIELDS,
            populate: Populate {
                path: "rocket",
                select: &["name"],
            },
        },
    }
}
