//! Postcode → coordinate resolution.

use psc_core::types::GeoCoordinate;

use crate::client::{read_json, StockCheckClient};
use crate::error::ClientError;
use crate::types::GeocoderResponse;

impl StockCheckClient {
    /// Resolve a postcode to the first geocoding match's coordinate.
    ///
    /// Nothing downstream can proceed without a coordinate, so every
    /// failure here is fatal to the run.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] — network or TLS failure.
    /// - [`ClientError::UnexpectedStatus`] — non-2xx response.
    /// - [`ClientError::Deserialize`] — body does not match the expected
    ///   geocoder shape.
    /// - [`ClientError::NoGeoMatch`] — the geocoder returned no results
    ///   for the postcode.
    pub async fn resolve_postcode(&self, postcode: &str) -> Result<GeoCoordinate, ClientError> {
        let url = self.endpoint("geocoder/postalcode");
        let response = self
            .client
            .get(&url)
            .query(&[("postalcode", postcode)])
            .send()
            .await?;

        let parsed: GeocoderResponse = read_json(response, "geocoder response").await?;

        let first = parsed
            .results
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::NoGeoMatch {
                postcode: postcode.to_owned(),
            })?;

        let location = first.geometry.location;
        tracing::debug!(
            postcode,
            latitude = location.lat,
            longitude = location.lng,
            "resolved postcode"
        );

        Ok(GeoCoordinate {
            latitude: location.lat,
            longitude: location.lng,
        })
    }
}
