//! Test fixture for filequery integration tests
//!
//! Provides an isolated service instance per test: a temporary working
//! directory for the durable documents, a temporary data directory to
//! discover files in, and stub reader/engine collaborators whose
//! interaction logs the tests can inspect.

use super::stubs::{EngineLog, ReaderLog, StubEngine, StubReader};
use filequery::{CatalogService, RewriteMode, ServiceConfig};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub struct TestFixture {
    pub service: CatalogService,
    pub data_dir: PathBuf,
    pub workdir: PathBuf,
    reader_log: Arc<Mutex<ReaderLog>>,
    engine_log: Arc<Mutex<EngineLog>>,
    _temp_dir: tempfile::TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self::build(&[], None, RewriteMode::Legacy)
    }

    /// Fixture whose reader fails for the given file names.
    pub fn with_failing_reader(fail_names: &[&str]) -> Self {
        Self::build(fail_names, None, RewriteMode::Legacy)
    }

    /// Fixture whose engine fails for SQL containing the given fragment.
    pub fn with_failing_sql(fragment: &str) -> Self {
        Self::build(&[], Some(fragment), RewriteMode::Legacy)
    }

    /// Fixture using the stricter token-bounded rewrite mode.
    pub fn token_bounded() -> Self {
        Self::build(&[], None, RewriteMode::TokenBounded)
    }

    fn build(fail_names: &[&str], fail_sql: Option<&str>, rewrite_mode: RewriteMode) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Unique names inside the tempdir guard against fixture reuse
        // within one test.
        let workdir = temp_dir.path().join(format!("work_{}", fastrand::u64(..)));
        let data_dir = temp_dir.path().join("data");
        fs::create_dir_all(&workdir).expect("Failed to create workdir");
        fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        let (reader, reader_log) = StubReader::new(fail_names);
        let (engine, engine_log) = StubEngine::new(fail_sql);

        let mut config = ServiceConfig::with_workdir(&workdir);
        config.rewrite_mode = rewrite_mode;
        let service = CatalogService::new(config, Box::new(reader), Box::new(engine));

        Self {
            service,
            data_dir,
            workdir,
            reader_log,
            engine_log,
            _temp_dir: temp_dir,
        }
    }

    /// Write a data file under the fixture's data directory, creating
    /// intermediate directories. Returns the full path as a string.
    pub fn write_file(&self, relative: &str, contents: &str) -> String {
        let path = self.data_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, contents).expect("Failed to write data file");
        path.display().to_string()
    }

    /// Run discovery over the fixture's data directory.
    pub fn discover(&mut self) -> String {
        let path = self.data_dir.display().to_string();
        self.service.list_data_files(&path)
    }

    /// Parse the durable catalog document, if present.
    pub fn catalog_document(&self) -> Option<serde_json::Value> {
        let raw = fs::read_to_string(self.workdir.join("data_files.json")).ok()?;
        serde_json::from_str(&raw).ok()
    }

    /// Parse the durable schema cache document, if present.
    pub fn cache_document(&self) -> Option<serde_json::Value> {
        let raw = fs::read_to_string(self.workdir.join("schema_descriptions.json")).ok()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn read_count(&self) -> usize {
        self.reader_log.lock().unwrap().count()
    }

    pub fn read_count_for(&self, name: &str) -> usize {
        self.reader_log.lock().unwrap().count_for(name)
    }

    /// Forced column types the reader saw on its most recent read.
    pub fn last_forced_types(&self) -> Vec<(String, String)> {
        self.reader_log
            .lock()
            .unwrap()
            .reads
            .last()
            .map(|(_, forced)| forced.clone())
            .unwrap_or_default()
    }

    pub fn registered(&self) -> Vec<String> {
        self.engine_log.lock().unwrap().registered.clone()
    }

    pub fn executed(&self) -> Vec<String> {
        self.engine_log.lock().unwrap().executed.clone()
    }
}
