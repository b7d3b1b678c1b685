use crate::clock::{Clock, DateTime, Utc};
use crate::http::{HTTPError, HTTPResult, HTTPService};
use crate::mastodon::client::{Error, TimelineSource};
use crate::mastodon::service::Service;
use crate::mastodon::{Status, StatusId};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::fs;
use std::future::{self, Future};
use std::sync::Mutex;

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

pub fn load_output(filename: &str) -> String {
    let filename = format!("tests/output/{filename}.out");
    String::from(
        fs::read_to_string(&filename)
            .expect(&format!("could not load test data from {filename}"))
            .trim_end(),
    )
}

/// Serves timeline pages from `tests/data/home_<suffix>_<max_id>.json`,
/// where the newest page uses `first` in place of a `max_id`.
pub struct TestService<'a> {
    suffix: &'a str,
}

impl<'a> TestService<'a> {
    pub fn new(suffix: &'a str) -> Self {
        Self { suffix }
    }
}

impl<'a> HTTPService for TestService<'a> {
    fn user_agent() -> String {
        format!("test-service-please-ignore v{}", env!("CARGO_PKG_VERSION"))
    }
}

impl<'a> Service for TestService<'a> {
    async fn get_home_timeline(&self, max_id: Option<&StatusId>, _limit: u32) -> HTTPResult<String> {
        if self.suffix == "401" {
            return Err(HTTPError::Http(StatusCode::UNAUTHORIZED));
        }
        let page = max_id.map(|id| id.as_str()).unwrap_or("first");
        Ok(load_data(&format!("home_{}_{page}", self.suffix)))
    }
}

/// An in-memory timeline that hands out pre-arranged pages in order and
/// remembers how it was called.
///
/// Once the scripted pages run out, every further page is empty.
pub struct ScriptedTimeline {
    pages: Mutex<VecDeque<Result<Vec<Status>, Error>>>,
    calls: Mutex<Vec<(Option<String>, u32)>>,
}

impl ScriptedTimeline {
    pub fn new(pages: Vec<Result<Vec<Status>, Error>>) -> Self {
        Self {
            pages: Mutex::new(pages.into()),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn requests(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(cursor, _)| cursor.clone())
            .collect()
    }

    pub fn limits(&self) -> Vec<u32> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, limit)| *limit)
            .collect()
    }
}

impl TimelineSource for ScriptedTimeline {
    fn fetch_page(
        &self,
        cursor: Option<&StatusId>,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<Status>, Error>> + Send {
        let cursor = cursor.map(|id| id.as_str().to_string());
        self.calls.lock().unwrap().push((cursor, limit));
        let page = self.pages.lock().unwrap().pop_front().unwrap_or(Ok(vec![]));
        future::ready(page)
    }
}

pub struct FrozenClock {
    datetime: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(datetime: DateTime<Utc>) -> Self {
        FrozenClock { datetime }
    }
}

impl Default for FrozenClock {
    fn default() -> Self {
        let datetime = DateTime::parse_from_rfc3339("2025-05-23T10:13:00-07:00")
            .expect("invalid date supplied")
            .with_timezone(&Utc);
        Self::new(datetime)
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.datetime
    }
}
