// Scripted collaborators shared by the unit tests in this crate

use async_trait::async_trait;
use cinescope_config::{KeyValueStore, MemoryStore, StorageError};
use cinescope_omdb::{OmdbRequest, OmdbTransport, TransportError};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
    Offline,
}

/// Answers provider requests from a script and counts every call
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<OmdbRequest, Reply>>,
    calls: Mutex<Vec<OmdbRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, request: OmdbRequest, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(request, reply);
        self
    }

    pub fn search_page(self, query: &str, page: u32, reply: Reply) -> Self {
        self.reply(
            OmdbRequest::Search {
                query: query.to_string(),
                page,
            },
            reply,
        )
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<OmdbRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OmdbTransport for ScriptedTransport {
    async fn fetch(&self, request: &OmdbRequest) -> Result<Value, TransportError> {
        self.calls.lock().unwrap().push(request.clone());
        let reply = self.replies.lock().unwrap().get(request).cloned();
        match reply {
            Some(Reply::Json(body)) => Ok(body),
            Some(Reply::Status(status)) => Err(TransportError::Status {
                status,
                body: String::new(),
            }),
            Some(Reply::Offline) | None => Err(TransportError::Connection("unscripted request".to_string())),
        }
    }
}

/// Id of the n-th hit on a scripted provider page
pub fn hit_id(query: &str, page: u32, n: usize) -> String {
    format!("tt-{}-{}-{}", query, page, n)
}

/// A successful provider search page with `count` hits
pub fn search_body(query: &str, page: u32, count: usize, total: u32) -> Reply {
    let hits: Vec<Value> = (0..count)
        .map(|n| {
            json!({
                "Title": format!("{} {}", query, n),
                "Year": "2001",
                "imdbID": hit_id(query, page, n),
                "Type": "movie",
                "Poster": "N/A"
            })
        })
        .collect();
    Reply::Json(json!({
        "Search": hits,
        "totalResults": total.to_string(),
        "Response": "True"
    }))
}

pub fn not_found_body() -> Reply {
    Reply::Json(json!({"Response": "False", "Error": "Movie not found!"}))
}

pub fn details_body(imdb_id: &str, title: &str) -> Reply {
    Reply::Json(json!({
        "Title": title,
        "Year": "1999",
        "Runtime": "136 min",
        "Genre": "Action, Sci-Fi",
        "imdbRating": "8.7",
        "imdbID": imdb_id,
        "Type": "movie",
        "Poster": "N/A",
        "Response": "True"
    }))
}

/// Memory store that counts writes and can be told to fail them
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueStore for CountingStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "quota exceeded",
            )));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove_item(key)
    }
}
