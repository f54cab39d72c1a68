/// Shared test fixtures: a scripted launch source and record builders
use crate::clients::LaunchSource;
use crate::domain::{Launch, LaunchLinks, LaunchPage, Pagination, Rocket, SortDirection};
use crate::errors::QueryResult;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One request observed by a [`ScriptedSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub page: i64,
    pub limit: i64,
    pub sort: Option<SortDirection>,
}

/// Launch source that replays a fixed script of responses and records every
/// request it receives. Panics if queried more times than the script allows.
pub struct ScriptedSource {
    responses: Mutex<Vec<QueryResult<LaunchPage>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedSource {
    pub fn new(responses: Vec<QueryResult<LaunchPage>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LaunchSource for Arc<ScriptedSource> {
    async fn query_launches(
        &self,
        page: i64,
        limit: i64,
        sort: Option<SortDirection>,
    ) -> QueryResult<LaunchPage> {
        self.requests
            .lock()
            .unwrap()
            .push(RecordedRequest { page, limit, sort });
        self.responses.lock().unwrap().remove(0)
    }
}

pub fn launch(id: &str, flight_number: i64) -> Launch {
    Launch {
        id: id.to_string(),
        flight_number,
        date_utc: "2020-05-30T19:22:00Z".parse().unwrap(),
        date_precision: "hour".to_string(),
        rocket: Rocket {
            id: "5e9d0d95eda69973a809d1ec".to_string(),
            name: "Falcon 9".to_string(),
        },
        details: None,
        links: LaunchLinks::default(),
    }
}

/// A server-shaped page response; the navigation flags are derived here only
/// because this stands in for the server, which owns them.
pub fn page_of(docs: Vec<Launch>, page: i64, limit: i64, total_docs: i64) -> LaunchPage {
    let total_pages = if total_docs == 0 {
        0
    } else {
        (total_docs + limit - 1) / limit
    };
    LaunchPage {
        docs,
        pagination: Pagination {
            total_docs,
            limit,
            page,
            total_pages,
            has_prev_page: page > 1,
            has_next_page: page < total_pages,
        },
    }
}
