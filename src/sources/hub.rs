//! Dataset server rows API.
//!
//! Fetches a dataset split page by page through `GET <endpoint>/rows`,
//! which returns at most [MAX_PAGE_LEN] rows per call:
//!
//! ```text
//! {"rows": [{"row_idx": 0, "row": {"id": "12", "title": "..", "text": ".."}}], "num_rows_total": 6407814}
//! ```
use std::collections::VecDeque;

use log::{debug, info};
use reqwest::Url;
use serde::Deserialize;

use crate::error::Error;

use super::Record;

pub const DEFAULT_ENDPOINT: &str = "https://datasets-server.huggingface.co";
pub const DEFAULT_DATASET: &str = "wikimedia/wikipedia";
pub const DEFAULT_SNAPSHOT: &str = "20231101";
pub const DEFAULT_SPLIT: &str = "train";
pub const MAX_PAGE_LEN: usize = 100;

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: Record,
}

#[derive(Debug, Deserialize)]
struct RowsPage {
    rows: Vec<RowEntry>,
    #[serde(default)]
    num_rows_total: Option<usize>,
}

/// Location of a dataset split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubSplit {
    pub endpoint: String,
    pub dataset: String,
    pub config: String,
    pub split: String,
}

impl HubSplit {
    /// Wikipedia split for a snapshot/language pair (config `<snapshot>.<lang>`).
    pub fn wikipedia(endpoint: &str, snapshot: &str, lang: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            dataset: DEFAULT_DATASET.to_string(),
            config: format!("{}.{}", snapshot, lang),
            split: DEFAULT_SPLIT.to_string(),
        }
    }

    /// Build the url of the page starting at `offset`.
    pub fn rows_url(&self, offset: usize, length: usize) -> Result<Url, Error> {
        let mut url = Url::parse(&self.endpoint)?;
        url.path_segments_mut()
            .map_err(|_| Error::Custom(format!("{} can't be a base url", self.endpoint)))?
            .pop_if_empty()
            .push("rows");
        url.query_pairs_mut()
            .append_pair("dataset", &self.dataset)
            .append_pair("config", &self.config)
            .append_pair("split", &self.split)
            .append_pair("offset", &offset.to_string())
            .append_pair("length", &length.to_string());
        Ok(url)
    }
}

/// Lazy iterator over the rows of a [HubSplit].
///
/// Each page is a batch that is buffered and drained before the next request.
pub struct HubRows {
    split: HubSplit,
    client: reqwest::blocking::Client,
    page_len: usize,
    offset: usize,
    total: Option<usize>,
    buffer: VecDeque<Record>,
    done: bool,
}

impl HubRows {
    /// Open the split, eagerly fetching the first page
    /// so that an unreachable dataset fails here.
    pub fn open(split: HubSplit, page_len: usize) -> Result<Self, Error> {
        let page_len = page_len.clamp(1, MAX_PAGE_LEN);
        let mut rows = Self {
            split,
            client: reqwest::blocking::Client::new(),
            page_len,
            offset: 0,
            total: None,
            buffer: VecDeque::with_capacity(page_len),
            done: false,
        };
        rows.fetch_page()?;

        info!(
            "opened {} ({}/{}), {} rows",
            rows.split.dataset,
            rows.split.config,
            rows.split.split,
            rows.total
                .map_or_else(|| "unknown number of".to_string(), |t| t.to_string())
        );
        Ok(rows)
    }

    /// Total number of rows announced by the server.
    pub fn total(&self) -> Option<usize> {
        self.total
    }

    fn fetch_page(&mut self) -> Result<(), Error> {
        let url = self.split.rows_url(self.offset, self.page_len)?;
        debug!("fetching {}", url);

        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        let page: RowsPage = serde_json::from_str(&body)?;

        self.absorb(page);
        Ok(())
    }

    fn absorb(&mut self, page: RowsPage) {
        if page.num_rows_total.is_some() {
            self.total = page.num_rows_total;
        }
        let nb_rows = page.rows.len();
        self.offset += nb_rows;
        self.buffer.extend(page.rows.into_iter().map(|entry| entry.row));

        let exhausted = self.total.map_or(false, |total| self.offset >= total);
        if nb_rows == 0 || exhausted {
            self.done = true;
        }
    }
}

impl Iterator for HubRows {
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffer.pop_front() {
                return Some(Ok(record));
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fetch_page() {
                // stop on failure, the error is surfaced once
                self.done = true;
                return Some(Err(e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: &str) -> RowsPage {
        serde_json::from_str(json).unwrap()
    }

    fn offline(split: HubSplit) -> HubRows {
        HubRows {
            split,
            client: reqwest::blocking::Client::new(),
            page_len: 2,
            offset: 0,
            total: None,
            buffer: VecDeque::new(),
            done: false,
        }
    }

    #[test]
    fn wikipedia_split() {
        let split = HubSplit::wikipedia(DEFAULT_ENDPOINT, DEFAULT_SNAPSHOT, "ko");
        assert_eq!(split.dataset, "wikimedia/wikipedia");
        assert_eq!(split.config, "20231101.ko");
        assert_eq!(split.split, "train");
    }

    #[test]
    fn url() {
        let split = HubSplit::wikipedia("https://example.org/", "20231101", "en");
        let url = split.rows_url(200, 100).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.org/rows?dataset=wikimedia%2Fwikipedia&config=20231101.en&split=train&offset=200&length=100"
        );
    }

    #[test]
    fn url_invalid() {
        let split = HubSplit::wikipedia("not an url", "20231101", "en");
        assert!(matches!(split.rows_url(0, 1), Err(Error::Url(_))));
    }

    #[test]
    fn pages_are_drained() {
        let mut rows = offline(HubSplit::wikipedia(DEFAULT_ENDPOINT, "20231101", "en"));
        rows.absorb(page(
            r#"{"rows":[{"row_idx":0,"row":{"id":"1","text":"a"}},{"row_idx":1,"row":{"id":"2","text":"b"}}],"num_rows_total":3,"partial":false}"#,
        ));
        assert_eq!(rows.total(), Some(3));
        assert!(!rows.done);

        rows.absorb(page(
            r#"{"rows":[{"row_idx":2,"row":{"id":"3","text":"c"}}],"num_rows_total":3}"#,
        ));
        assert!(rows.done);

        let texts: Vec<String> = rows.map(|r| r.unwrap().text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_page_stops() {
        let mut rows = offline(HubSplit::wikipedia(DEFAULT_ENDPOINT, "20231101", "en"));
        rows.absorb(page(r#"{"rows":[]}"#));
        assert!(rows.done);
        assert!(rows.next().is_none());
    }
}
