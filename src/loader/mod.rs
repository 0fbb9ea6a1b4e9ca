use std::time::Duration;

use thiserror::Error;

use crate::model::Company;

/// Where the companies document lives. A local file is the default; an
/// http(s) URL covers hosted copies of the dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(String),
}

impl DataSource {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(trimmed.to_string())
        }
    }

    pub fn location(&self) -> &str {
        match self {
            DataSource::Url(url) => url,
            DataSource::File(path) => path,
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File("./data/companies.json".to_string())
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read data file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} fetching {url}")]
    BadStatus { url: String, status: u16 },

    #[error("malformed company data from {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build http client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

/// Performs the one retrieval of the session and parses the master set.
/// Every failure mode (I/O, network, non-2xx, malformed JSON) comes back as
/// a `LoadError` for the composition root to turn into the error view; there
/// is no retry and no partial result.
pub async fn load_companies(
    source: &DataSource,
    timeout_seconds: Option<u64>,
) -> Result<Vec<Company>, LoadError> {
    let body = match source {
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::FileRead {
                    path: path.clone(),
                    source: e,
                })?
        }
        DataSource::Url(url) => fetch_document(url, timeout_seconds).await?,
    };

    serde_json::from_str(&body).map_err(|e| LoadError::Parse {
        location: source.location().to_string(),
        source: e,
    })
}

async fn fetch_document(url: &str, timeout_seconds: Option<u64>) -> Result<String, LoadError> {
    let client = build_client(timeout_seconds)?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::Fetch {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::BadStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| LoadError::Fetch {
        url: url.to_string(),
        source: e,
    })
}

// No timeout unless one was configured; a hung request simply leaves the
// session in its pre-render state.
fn build_client(timeout_seconds: Option<u64>) -> Result<reqwest::Client, LoadError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::USER_AGENT,
        reqwest::header::HeaderValue::from_static(concat!("visascout/", env!("CARGO_PKG_VERSION"))),
    );

    let mut builder = reqwest::Client::builder()
        .default_headers(headers)
        .redirect(reqwest::redirect::Policy::limited(10));
    if let Some(seconds) = timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    builder
        .build()
        .map_err(|e| LoadError::HttpClientBuild { source: e })
}
