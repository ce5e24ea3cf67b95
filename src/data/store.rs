use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::{QuizDefinition, QuizLibrary};

/// Default location of the quiz library file.
pub const DEFAULT_STORE_PATH: &str = "quizzes.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value storage for quizzes, title to definition.
pub trait QuizStore {
    fn load_all(&self) -> Result<QuizLibrary, StoreError>;
    fn save_all(&mut self, library: &QuizLibrary) -> Result<(), StoreError>;
}

/// Stores the whole library as one pretty-printed JSON object.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl QuizStore for JsonFileStore {
    fn load_all(&self) -> Result<QuizLibrary, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no quiz library yet, starting empty");
                return Ok(QuizLibrary::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };

        let library: QuizLibrary =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), quizzes = library.len(), "loaded quiz library");
        Ok(library)
    }

    fn save_all(&mut self, library: &QuizLibrary) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let json = serde_json::to_string_pretty(library).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(|err| self.io_error(err))?;

        tracing::info!(path = %self.path.display(), quizzes = library.len(), "saved quiz library");
        Ok(())
    }
}

/// Keeps the library in memory. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    library: QuizLibrary,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(library: QuizLibrary) -> Self {
        Self { library }
    }
}

impl QuizStore for MemoryStore {
    fn load_all(&self) -> Result<QuizLibrary, StoreError> {
        Ok(self.library.clone())
    }

    fn save_all(&mut self, library: &QuizLibrary) -> Result<(), StoreError> {
        self.library = library.clone();
        Ok(())
    }
}

/// Add or replace one quiz. The last save for a title wins.
pub fn save_quiz<S: QuizStore + ?Sized>(
    store: &mut S,
    title: &str,
    definition: QuizDefinition,
) -> Result<(), StoreError> {
    let mut library = store.load_all()?;
    if library.insert(title.to_string(), definition).is_some() {
        tracing::info!(title, "replacing existing quiz");
    }
    store.save_all(&library)
}
