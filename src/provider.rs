//! The decision capability supplied by the embedding application.
//!
//! A provider is consulted at most once per negotiation attempt, but a
//! transport may run several attempts within one logical authentication
//! sequence (each with a possibly narrower accepted set), so implementations
//! must tolerate repeated calls in any order and must not leak state between
//! them. Returning `None` is a normal decline, not an error.

use crate::credential::Credential;
use crate::types::CredentialType;

/// Decides whether a credential can be produced for one attempt.
///
/// Given the mechanisms the transport accepts right now, plus the remote URL
/// and candidate username when the transport already knows them, an
/// implementation either commits to one mechanism by returning a
/// [`Credential`] whose tag is a member of `accepted`, or declines with
/// `None`.
///
/// Implementations may block (e.g. prompting a human); no timeout is imposed
/// here. Timeouts, if any, belong to the transport.
pub trait CredentialsProvider: Send + Sync {
    /// Produce a credential for this attempt, or decline.
    ///
    /// # Arguments
    ///
    /// * `accepted` - Mechanisms the transport will accept right now
    /// * `url` - The remote URL, when the transport knows it
    /// * `username` - The candidate username, when the transport knows it
    fn provide(
        &self,
        accepted: CredentialType,
        url: Option<&str>,
        username: Option<&str>,
    ) -> Option<Credential>;
}

/// Plain function values work as providers, so an application can pass a
/// closure at session setup instead of defining a type.
impl<F> CredentialsProvider for F
where
    F: Fn(CredentialType, Option<&str>, Option<&str>) -> Option<Credential> + Send + Sync,
{
    fn provide(
        &self,
        accepted: CredentialType,
        url: Option<&str>,
        username: Option<&str>,
    ) -> Option<Credential> {
        self(accepted, url, username)
    }
}
