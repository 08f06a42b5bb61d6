// crates/ibge-core/src/error.rs
use thiserror::Error;

/// Result alias for everything that happens during the load phase.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Result alias for point queries against a built index.
pub type LookupResult<T> = std::result::Result<T, LookupError>;

/// Failure of the one-time bulk fetch or of index construction.
///
/// Every variant is fatal: a process that gets a `LoadError` must not start
/// serving queries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset (or one of its files) could not be located.
    #[error("dataset not found: {0}")]
    NotFound(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Opaque failure reported by a custom [`RecordSource`](crate::traits::RecordSource).
    #[error("record source failed: {0}")]
    Source(String),

    #[error("record source returned no states")]
    NoStates,

    #[error("duplicate state abbreviation {abbreviation:?} (state codes {first} and {second})")]
    DuplicateStateAbbreviation {
        abbreviation: String,
        first: u32,
        second: u32,
    },

    #[error("duplicate state code {0}")]
    DuplicateStateCode(u32),

    #[error("duplicate city code {0}")]
    DuplicateCityCode(u32),

    #[error("duplicate legacy (TOM) code {legacy_code} on cities {first} and {second}")]
    DuplicateLegacyCode {
        legacy_code: u32,
        first: u32,
        second: u32,
    },

    /// A city points at a state code that was never loaded.
    #[error("city {city} references unknown state code {state_code}")]
    UnknownState { city: u32, state_code: u32 },

    /// A city's denormalized abbreviation disagrees with the state it points at.
    #[error("city {city} says state {state_code} is {found:?}, but that state is {expected:?}")]
    StateMismatch {
        city: u32,
        state_code: u32,
        expected: String,
        found: String,
    },

    /// The source's precomputed grouping disagrees with the derived one.
    #[error("city grouping for state {abbreviation:?} disagrees with the city list")]
    GroupingMismatch { abbreviation: String },
}

impl LoadError {
    /// Status an HTTP adapter reports when startup data is unusable.
    pub fn http_status(&self) -> u16 {
        500
    }
}

/// Negative result of a point query. Both variants are recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No record has the requested key.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// A numeric-code query received something that is not an integer.
    #[error("invalid {field}: {value:?} must be a number")]
    InvalidArgument { field: &'static str, value: String },
}

impl LookupError {
    pub(crate) fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        LookupError::NotFound {
            entity,
            key: key.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LookupError::InvalidArgument { .. })
    }

    /// Maps the failure onto the status code of the HTTP contract:
    /// `NotFound` is 404, `InvalidArgument` is 400.
    pub fn http_status(&self) -> u16 {
        match self {
            LookupError::NotFound { .. } => 404,
            LookupError::InvalidArgument { .. } => 400,
        }
    }
}
