//! Stub collaborators for integration tests
//!
//! The service treats the dataframe reader and the SQL engine as black
//! boxes, so tests drive it with scripted stand-ins that record every
//! interaction: reads (with any forced column types), registrations and
//! executed SQL.

use filequery::{
    ColumnOverrides, ExecError, ExecResult, FileFormat, FrameReader, LoadError, LoadResult,
    QueryEngine, ResultSet, TableFrame, Value,
};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Canned frame served by the stub reader.
pub struct StubFrame {
    pub schema: String,
    pub stats: String,
    pub rows: Vec<String>,
}

impl TableFrame for StubFrame {
    fn schema_text(&self) -> String {
        self.schema.clone()
    }

    fn stats_text(&self) -> String {
        self.stats.clone()
    }

    fn preview_text(&self, rows: usize) -> String {
        self.rows
            .iter()
            .take(rows)
            .cloned()
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Record of reader invocations, in call order.
#[derive(Default)]
pub struct ReaderLog {
    /// (path, forced column types) per read.
    pub reads: Vec<(String, Vec<(String, String)>)>,
}

impl ReaderLog {
    pub fn count(&self) -> usize {
        self.reads.len()
    }

    pub fn count_for(&self, name: &str) -> usize {
        self.reads.iter().filter(|(p, _)| p.ends_with(name)).count()
    }
}

/// Counting reader stub; fails for configured file names.
pub struct StubReader {
    log: Arc<Mutex<ReaderLog>>,
    fail_names: HashSet<String>,
}

impl StubReader {
    pub fn new(fail_names: &[&str]) -> (Self, Arc<Mutex<ReaderLog>>) {
        let log = Arc::new(Mutex::new(ReaderLog::default()));
        let reader = Self {
            log: log.clone(),
            fail_names: fail_names.iter().map(|n| n.to_string()).collect(),
        };
        (reader, log)
    }
}

impl FrameReader for StubReader {
    fn read(
        &self,
        path: &Path,
        _format: FileFormat,
        overrides: Option<&ColumnOverrides>,
    ) -> LoadResult<Box<dyn TableFrame>> {
        let forced: Vec<(String, String)> = overrides
            .map(|o| {
                o.iter()
                    .map(|(column, tag)| (column.to_string(), tag.as_str().to_string()))
                    .collect()
            })
            .unwrap_or_default();
        self.log
            .lock()
            .unwrap()
            .reads
            .push((path.display().to_string(), forced));

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.fail_names.contains(&name) {
            return Err(LoadError::Read(format!("could not parse {}", name)));
        }

        Ok(Box::new(StubFrame {
            schema: format!("{{column_a: Int64, column_b: Utf8}} [{}]", name),
            stats: "count: 2, column_a mean: 1.5".to_string(),
            rows: vec!["1, alpha".to_string(), "2, beta".to_string()],
        }))
    }
}

/// Record of engine interactions, in call order.
#[derive(Default)]
pub struct EngineLog {
    pub registered: Vec<String>,
    pub executed: Vec<String>,
}

/// Engine stub holding a set of table bindings.
///
/// Execution fails for SQL containing a configured fragment (standing in
/// for e.g. a type mismatch the engine would raise on) and for any
/// `_`-prefixed token with no binding in the session.
pub struct StubEngine {
    log: Arc<Mutex<EngineLog>>,
    tables: HashSet<String>,
    fail_on: Option<String>,
    response: ResultSet,
}

impl StubEngine {
    pub fn new(fail_on: Option<&str>) -> (Self, Arc<Mutex<EngineLog>>) {
        let log = Arc::new(Mutex::new(EngineLog::default()));
        let mut response = ResultSet::new(vec!["column_a".to_string(), "column_b".to_string()]);
        response.push_row(vec![Value::Int(1), Value::from("alpha")]);
        response.push_row(vec![Value::Int(2), Value::from("beta")]);
        let engine = Self {
            log: log.clone(),
            tables: HashSet::new(),
            fail_on: fail_on.map(|f| f.to_string()),
            response,
        };
        (engine, log)
    }
}

impl QueryEngine for StubEngine {
    fn register(&mut self, table_id: &str, _frame: Box<dyn TableFrame>) -> ExecResult<()> {
        self.tables.insert(table_id.to_string());
        self.log
            .lock()
            .unwrap()
            .registered
            .push(table_id.to_string());
        Ok(())
    }

    fn execute(&mut self, sql: &str) -> ExecResult<ResultSet> {
        self.log.lock().unwrap().executed.push(sql.to_string());

        if let Some(fragment) = &self.fail_on {
            if sql.contains(fragment.as_str()) {
                return Err(ExecError::Engine(format!(
                    "Binder Error: cannot evaluate {}",
                    fragment
                )));
            }
        }

        for raw in sql.split_whitespace() {
            let token = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '_');
            if token.starts_with('_') && !self.tables.contains(token) {
                return Err(ExecError::UnknownTable(token.to_string()));
            }
        }

        Ok(self.response.clone())
    }
}
