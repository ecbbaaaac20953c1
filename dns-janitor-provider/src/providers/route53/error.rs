//! Route 53 error mapping

use std::error::Error as StdError;
use std::fmt::Debug;

use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};
use crate::utils::log_sanitizer::sanitize_for_log;

use super::{PROVIDER_ID, Route53Provider};

/// Authentication failures reported by the AWS signing layer
const CREDENTIAL_CODES: &[&str] = &[
    "InvalidClientTokenId",
    "UnrecognizedClientException",
    "ExpiredToken",
    "ExpiredTokenException",
    "SignatureDoesNotMatch",
    "IncompleteSignature",
    "MissingAuthenticationToken",
];

/// Authorization failures
const ACCESS_DENIED_CODES: &[&str] = &["AccessDenied", "AccessDeniedException"];

/// Throttling and concurrent modification of the same zone
const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "RequestLimitExceeded",
    "TooManyRequestsException",
    "PriorRequestNotComplete",
];

/// Route 53 error code mapping
/// Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_ID
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some(c) if CREDENTIAL_CODES.contains(&c) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(c) if ACCESS_DENIED_CODES.contains(&c) => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(c) if THROTTLING_CODES.contains(&c) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            // NoSuchHostedZone: the zone was deleted between listing and use
            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // InvalidChangeBatch: a record no longer matches what was listed
            // InvalidInput: malformed request (bad zone id, too many changes)
            Some("InvalidChangeBatch" | "InvalidInput") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                zone: context.zone.unwrap_or_else(|| "<unknown>".to_string()),
                detail: raw.message,
            },

            _ => self.unknown_error(raw),
        }
    }
}

impl Route53Provider {
    /// Map an SDK call failure onto [`ProviderError`]
    ///
    /// Transport failures are classified by kind; service responses by their
    /// AWS error code.
    pub(crate) fn map_sdk_error<E, R>(
        &self,
        err: SdkError<E, R>,
        context: ErrorContext,
    ) -> ProviderError
    where
        E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
        R: Debug,
    {
        let detail = sanitize_for_log(&DisplayErrorContext(&err).to_string());
        match &err {
            SdkError::TimeoutError(_) => ProviderError::Timeout {
                provider: self.provider_name().to_string(),
                detail,
            },
            SdkError::DispatchFailure(_) => ProviderError::NetworkError {
                provider: self.provider_name().to_string(),
                detail,
            },
            _ => {
                let raw = match err.code() {
                    Some(code) => {
                        RawApiError::with_code(code, err.message().map_or(detail, sanitize_for_log))
                    }
                    None => RawApiError::new(detail),
                };
                log::debug!(
                    "[route53] API error code={:?} message={}",
                    raw.code,
                    raw.message
                );
                self.map_error(raw, context)
            }
        }
    }
}
