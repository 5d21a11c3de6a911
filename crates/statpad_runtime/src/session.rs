//! Session state for the REPL and CLI.
//!
//! A session owns the catalog queries are answered from, the router, and
//! the current output format.

use std::path::{Path, PathBuf};

use statpad_foundation::{Error, ErrorKind, Result};
use statpad_parser::QueryIntent;
use statpad_storage::Catalog;
use tracing::debug;

use crate::config::{OutputFormat, RuntimeConfig};
use crate::format;
use crate::response::QueryResponse;
use crate::router::Router;
use crate::serialize;

/// State for one interactive or batch session.
#[derive(Clone, Debug)]
pub struct Session {
    /// The catalog queries are answered from.
    catalog: Catalog,

    /// Classifier and dispatcher.
    router: Router,

    /// How responses are printed.
    format: OutputFormat,

    /// Base directory for relative snapshot paths.
    load_path: PathBuf,
}

impl Session {
    /// Creates a session over the seeded catalog (teams and seasons only).
    ///
    /// # Errors
    ///
    /// Returns an error if the seed data cannot be loaded.
    pub fn new() -> Result<Self> {
        Ok(Self::with_catalog(Catalog::seeded()?))
    }

    /// Creates a session over the given catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            router: Router::new(),
            format: OutputFormat::default(),
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Creates a session as the configuration describes.
    ///
    /// A snapshot path takes precedence over `seed`; with neither, the
    /// seeded catalog is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be loaded.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let catalog = match (&config.catalog_path, config.seed) {
            (Some(path), _) => serialize::load_from_file(path)?,
            (None, true) => Catalog::sample()?,
            (None, false) => Catalog::seeded()?,
        };
        let mut session = Self::with_catalog(catalog);
        session.format = config.format;
        Ok(session)
    }

    /// Returns a reference to the catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replaces the catalog.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Returns a reference to the router.
    #[must_use]
    pub const fn router(&self) -> &Router {
        &self.router
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Sets the output format.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    /// Returns the base directory for relative paths.
    #[must_use]
    pub fn load_path(&self) -> &Path {
        &self.load_path
    }

    /// Sets the base directory for relative paths.
    pub fn set_load_path(&mut self, path: PathBuf) {
        self.load_path = path;
    }

    /// Resolves a path relative to the load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.load_path.join(path)
        }
    }

    /// Classifies a query without answering it.
    #[must_use]
    pub fn classify(&self, query: &str) -> QueryIntent {
        self.router.classify(query)
    }

    /// Answers a query against the catalog.
    ///
    /// # Errors
    ///
    /// See [`Router::dispatch`].
    pub fn answer(&self, query: &str) -> Result<QueryResponse> {
        self.router.answer(&self.catalog, query)
    }

    /// Answers a query and renders the response.
    ///
    /// In JSON mode a failed query still renders, as an `error` response.
    ///
    /// # Errors
    ///
    /// In text mode, returns the query's error.
    pub fn respond(&self, query: &str) -> Result<String> {
        match (self.answer(query), self.format) {
            (Ok(response), format) => format::render(&response, format),
            (Err(e), OutputFormat::Json) => {
                debug!(error = %e, "rendering error response");
                format::render_json(&QueryResponse::error(query, &e))
            }
            (Err(e), OutputFormat::Text) => Err(e),
        }
    }

    /// Classifies a query and renders the intent.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn describe(&self, query: &str) -> Result<String> {
        let intent = self.classify(query);
        match self.format {
            OutputFormat::Text => Ok(intent.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(&intent)
                .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string()))),
        }
    }

    /// Writes the catalog to a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &str) -> Result<()> {
        serialize::save_to_file(&self.catalog, self.resolve_path(path))
    }

    /// Replaces the catalog with a snapshot file's contents.
    ///
    /// The current catalog is kept if loading fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a snapshot.
    pub fn load(&mut self, path: &str) -> Result<()> {
        self.catalog = serialize::load_from_file(self.resolve_path(path))?;
        Ok(())
    }
}
