use thiserror::Error;

/// Failure fetching a single listing page. Page-level only: the
/// orchestrator retries, tallies and moves on.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: wreq::Error,
    },

    #[error("HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("empty response body from {url}")]
    EmptyBody { url: String },

    #[error("response from {url} does not look like HTML")]
    NotHtml { url: String },

    #[error("bot detection page served for {url}")]
    BotDetected { url: String },

    #[error("timed out after {seconds}s fetching {url}")]
    Timeout { url: String, seconds: u64 },
}

/// Failure writing the finished record collection to a destination.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error writing {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("dataframe error for {path}: {source}")]
    DataFrame {
        path: String,
        #[source]
        source: polars::prelude::PolarsError,
    },
}

/// Fatal outcome of an ingestion run. Anything below this level is
/// absorbed into the run counters instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("catalog index {url} unreachable: {source}")]
    IndexUnreachable {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("no category links found at {url}")]
    DiscoveryFailed { url: String },

    #[error("sink '{name}' failed: {source}")]
    Sink {
        name: String,
        #[source]
        source: SinkError,
    },
}
