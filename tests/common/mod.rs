//! Shared test infrastructure for the HTTP integration tests.
//!
//! - `StubGenerator` - canned completion text in place of the OpenAI client
//! - `MemoryHistoryStore` - in-process history in place of PostgreSQL
//! - `spawn_app()` - serves the real router on an ephemeral port
#![allow(dead_code)]

use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use slide_forge::error::AppError;
use slide_forge::models::PresentationHistoryEntry;
use slide_forge::services::{HistoryStore, PresentationService, TextGenerator};
use slide_forge::storage::DeckStorage;
use slide_forge::{app_router, AppState};

// ============================================================================
// GENERATOR
// ============================================================================

#[derive(Clone)]
pub struct StubGenerator {
    reply: Result<String, String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(AppError::Upstream)
    }

    fn model_name(&self) -> &str {
        "stub-model"
    }
}

/// Completion text with one slide per `(header, content, references)` triple.
pub fn slides_json(slides: &[(Option<&str>, Option<&str>, Option<&str>)]) -> String {
    let slides: Vec<serde_json::Value> = slides
        .iter()
        .map(|(header, content, references)| {
            let mut slide = serde_json::Map::new();
            if let Some(h) = header {
                slide.insert("header".into(), (*h).into());
            }
            if let Some(c) = content {
                slide.insert("content".into(), (*c).into());
            }
            if let Some(r) = references {
                slide.insert("references".into(), (*r).into());
            }
            serde_json::Value::Object(slide)
        })
        .collect();
    serde_json::json!({ "slides": slides }).to_string()
}

// ============================================================================
// HISTORY
// ============================================================================

#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<PresentationHistoryEntry>>,
}

impl MemoryHistoryStore {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<PresentationHistoryEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn create(
        &self,
        title: &str,
        download_link: &str,
    ) -> Result<PresentationHistoryEntry, AppError> {
        let mut entries = self.entries.lock().unwrap();
        let entry = PresentationHistoryEntry {
            id: entries.len() as i64 + 1,
            title: title.to_string(),
            created_at: chrono::Utc::now(),
            download_link: download_link.to_string(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, filter: Option<&str>) -> Result<Vec<PresentationHistoryEntry>, AppError> {
        let needle = filter.map(str::to_lowercase);
        let mut entries: Vec<PresentationHistoryEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| match &needle {
                Some(n) => e.title.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(entries)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

// ============================================================================
// APP
// ============================================================================

pub struct TestApp {
    pub addr: SocketAddr,
    pub base_url: String,
    pub history: Arc<MemoryHistoryStore>,
    pub generator: StubGenerator,
    pub storage_root: std::path::PathBuf,
    pub client: reqwest::Client,
    /// Keeps the storage directory alive for the test's duration.
    pub dir: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn generate(&self, title: &str) -> reqwest::Response {
        self.client
            .post(self.url("/generate"))
            .json(&serde_json::json!({ "title": title }))
            .send()
            .await
            .expect("generate request failed")
    }

    /// Number of files written under the storage root.
    pub fn stored_file_count(&self) -> usize {
        fn count(path: &std::path::Path) -> usize {
            std::fs::read_dir(path)
                .map(|entries| {
                    entries
                        .flatten()
                        .map(|e| {
                            let p = e.path();
                            if p.is_dir() {
                                count(&p)
                            } else {
                                1
                            }
                        })
                        .sum()
                })
                .unwrap_or(0)
        }
        count(&self.storage_root)
    }
}

pub async fn spawn_app(generator: StubGenerator) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage_root = dir.path().join("PPTX");
    let storage = DeckStorage::new(&storage_root);
    storage.ensure_root().await.expect("Failed to create storage root");

    let history = Arc::new(MemoryHistoryStore::default());
    let state = Arc::new(AppState {
        presentations: PresentationService::new(
            Arc::new(generator.clone()),
            history.clone(),
            storage,
        ),
        public_base_url: None,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, app_router(state))
            .await
            .expect("test server failed");
    });

    TestApp {
        addr,
        base_url: format!("http://{}/", addr),
        history,
        generator,
        storage_root,
        client: reqwest::Client::new(),
        dir,
    }
}

// ============================================================================
// PPTX INSPECTION
// ============================================================================

pub fn read_part(bytes: &[u8], name: &str) -> String {
    use std::io::Read;
    let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("not a zip archive");
    let mut file = archive.by_name(name).expect("missing part");
    let mut out = String::new();
    file.read_to_string(&mut out).expect("part is not utf-8");
    out
}

pub fn slide_count(bytes: &[u8]) -> usize {
    let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("not a zip archive");
    let count = archive
        .file_names()
        .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
        .count();
    count
}
