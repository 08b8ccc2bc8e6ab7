//! Per-attempt orchestration between transport and provider.
//!
//! One `negotiate` call is one authentication attempt: consult the provider
//! exactly once, validate that the returned credential's mechanism is one
//! the transport offered, realise it into the transport's slot, and report
//! a terminal [`Outcome`]. The transport decides on its own whether to start
//! a fresh attempt afterwards; no retries happen in here.

use tracing::{debug, warn};

use crate::error::CredentialError;
use crate::provider::CredentialsProvider;
use crate::slot::TransportSlot;
use crate::types::CredentialType;

/// Native sentinel telling the transport "no credential, fall through to
/// your next option".
pub const STATUS_PASSTHROUGH: i32 = -30;

/// Generic native error code used when no more specific code exists.
pub const STATUS_ERROR: i32 = -1;

/// What to do when the transport offers an empty accepted set.
///
/// The native protocol leaves this case unspecified. Declining without a
/// provider call is the default; applications whose providers want to see
/// every request can opt into being consulted anyway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySetPolicy {
    /// Decline immediately; the provider is never invoked.
    #[default]
    DeclineImmediately,
    /// Forward the empty set to the provider and let it decide.
    ConsultProvider,
}

/// Terminal result of one negotiation attempt.
#[derive(Debug)]
pub enum Outcome {
    /// The credential was realised and the slot is populated; carries the
    /// native success status.
    Succeeded(i32),
    /// The provider had nothing to offer. Normal, not an error.
    Declined,
    /// Contract violation: the provider returned a credential whose
    /// mechanism was not offered. The slot was never written. This is a bug
    /// in the embedding application's provider, distinct from the server
    /// refusing a credential.
    Rejected {
        /// The set the transport offered.
        offered: CredentialType,
        /// The tag of the credential the provider returned.
        returned: CredentialType,
    },
    /// The native primitive refused the material; carries its status code
    /// and the name of the primitive that failed.
    Failed(CredentialError),
}

impl Outcome {
    /// Map this outcome onto the integer status codes the transport speaks.
    ///
    /// Success returns the native OK status, a decline returns the
    /// passthrough sentinel, a contract violation maps to the generic error
    /// code, and a native failure propagates its own code unchanged.
    pub fn status(&self) -> i32 {
        match self {
            Self::Succeeded(status) => *status,
            Self::Declined => STATUS_PASSTHROUGH,
            Self::Rejected { .. } => STATUS_ERROR,
            Self::Failed(err) => err.code(),
        }
    }

    /// Whether the slot was populated by this attempt.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }
}

/// Runs negotiation attempts against one provider.
///
/// A negotiator is cheap and stateless across attempts; an application
/// wanting concurrent access to several remotes runs one negotiator per
/// transport, they share nothing.
pub struct Negotiator<P> {
    provider: P,
    empty_set_policy: EmptySetPolicy,
}

impl<P: CredentialsProvider> Negotiator<P> {
    /// Create a negotiator around the application's provider.
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            empty_set_policy: EmptySetPolicy::default(),
        }
    }

    /// Override the handling of an empty accepted set.
    pub fn with_empty_set_policy(mut self, policy: EmptySetPolicy) -> Self {
        self.empty_set_policy = policy;
        self
    }

    /// Run one authentication attempt.
    ///
    /// Consults the provider exactly once with the offered set, URL and
    /// candidate username, validates the returned credential's mechanism
    /// against the offer, and realises it into `slot`. All four outcomes
    /// are terminal for this attempt.
    pub fn negotiate(
        &self,
        accepted: CredentialType,
        url: Option<&str>,
        username: Option<&str>,
        slot: &mut dyn TransportSlot,
    ) -> Outcome {
        if accepted.is_empty() && self.empty_set_policy == EmptySetPolicy::DeclineImmediately {
            debug!("empty accepted set, declining without consulting provider");
            return Outcome::Declined;
        }

        debug!(?accepted, url, username, "requesting credential from provider");
        let Some(credential) = self.provider.provide(accepted, url, username) else {
            debug!("provider declined");
            return Outcome::Declined;
        };

        let returned = credential.credential_type();
        if !accepted.contains(returned) {
            warn!(
                ?accepted,
                ?returned,
                "provider returned a credential outside the offered set"
            );
            return Outcome::Rejected {
                offered: accepted,
                returned,
            };
        }

        debug!(mechanism = credential.mechanism(), "realising credential");
        match credential.realise(slot) {
            Ok(status) => {
                debug!(status, "credential realised");
                Outcome::Succeeded(status)
            }
            Err(err) => {
                debug!(%err, "credential realisation failed");
                Outcome::Failed(err)
            }
        }
    }
}
