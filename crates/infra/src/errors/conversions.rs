//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use travex_domain::TravexError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TravexError);

impl From<InfraError> for TravexError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TravexError> for InfraError {
    fn from(value: TravexError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoTravexError {
    fn into_travex(self) -> TravexError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TravexError */
/* -------------------------------------------------------------------------- */

impl IntoTravexError for HttpError {
    fn into_travex(self) -> TravexError {
        if self.is_timeout() {
            return TravexError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return TravexError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return TravexError::Decode(format!("failed to decode HTTP response: {self}"));
        }

        if self.is_builder() {
            return TravexError::InvalidInput(format!("invalid HTTP request: {self}"));
        }

        TravexError::Network(format!("HTTP request failed: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_travex())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TravexError */
/* -------------------------------------------------------------------------- */

impl IntoTravexError for JsonError {
    fn into_travex(self) -> TravexError {
        TravexError::Decode(format!("invalid JSON payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_travex())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
