use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("no geocoder match for postcode \"{postcode}\"")]
    NoGeoMatch { postcode: String },

    #[error("store search pagination exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },
}
