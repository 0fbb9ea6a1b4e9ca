use thiserror::Error;

use crate::filter::{FilterState, Selector};
use crate::loader::{self, DataSource, LoadError};
use crate::model::Company;
use crate::render::{self, View};

/// Library-level options for opening a browsing session.
#[derive(Clone, Debug, Default)]
pub struct Options {
    pub source: DataSource,
    pub timeout_seconds: Option<u64>,
    pub filter: FilterState,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("data load failed: {source}")]
    Load {
        #[source]
        source: LoadError,
    },
}

/// A browsing session: the immutable master set plus the current filter
/// state. The loader is the single writer of the master set (it is assigned
/// once in `open` and only read afterwards); filter mutations only ever
/// touch the selection criteria.
#[derive(Clone, Debug)]
pub struct Session {
    master: Vec<Company>,
    filter: FilterState,
}

impl Session {
    /// Performs the one load of the session and captures the master set.
    pub async fn open(options: Options) -> Result<Self, RunnerError> {
        let master = loader::load_companies(&options.source, options.timeout_seconds)
            .await
            .map_err(|source| RunnerError::Load { source })?;
        Ok(Self {
            master,
            filter: options.filter,
        })
    }

    /// Builds a session from records already in memory. Used by tests and by
    /// callers that do their own loading.
    pub fn from_records(master: Vec<Company>, filter: FilterState) -> Self {
        Self { master, filter }
    }

    pub fn master(&self) -> &[Company] {
        &self.master
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_visa(&mut self, selector: Selector) {
        self.filter.visa = selector;
    }

    pub fn set_remote(&mut self, selector: Selector) {
        self.filter.remote = selector;
    }

    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
    }

    /// The current filtered subsequence, recomputed from scratch.
    pub fn filtered(&self) -> Vec<&Company> {
        self.filter.apply(&self.master)
    }

    /// Renders the current filtered subsequence into a view description.
    pub fn view(&self) -> View {
        render::render(&self.filtered())
    }
}
