//! Credential variants and their realisation into a transport slot.
//!
//! [`Credential`] is a closed set: the accepted-type bitset already
//! enumerates every legal mechanism, so no open-ended dispatch is needed.
//! Each variant holds the material for one mechanism and knows how to write
//! it into a [`TransportSlot`] via exactly one native primitive call.

use std::fmt;

use crate::error::CredentialError;
use crate::slot::{STATUS_OK, TransportSlot};
use crate::types::CredentialType;

/// A single keyboard-interactive prompt forwarded to a [`ChallengeResponder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// The prompt text issued by the server.
    pub text: String,
    /// Whether the response may be echoed back to the user.
    pub echo: bool,
}

/// Answers keyboard-interactive challenges on behalf of the embedding
/// application.
///
/// The transport invokes this when the server issues its prompts; responses
/// must be returned in prompt order.
pub trait ChallengeResponder: Send + Sync {
    /// Produce one response per challenge, in order.
    fn respond(&self, challenges: &[Challenge]) -> Vec<String>;
}

impl<F> ChallengeResponder for F
where
    F: Fn(&[Challenge]) -> Vec<String> + Send + Sync,
{
    fn respond(&self, challenges: &[Challenge]) -> Vec<String> {
        self(challenges)
    }
}

/// Authentication material for one mechanism.
///
/// A credential is exclusively owned by the call stack of one negotiation
/// attempt. Nothing here is cached, persisted, or reused across attempts;
/// secret fields live in memory only and drop with the value.
pub enum Credential {
    /// SSH key pair already loaded into memory.
    SshMemory {
        username: String,
        public_key: String,
        private_key: String,
        /// Passphrase unlocking the private key, empty if none.
        passphrase: String,
    },
    /// Plaintext username and password.
    UserPassPlaintext { username: String, password: String },
    /// Username only, for transports that probe the username first.
    Username { username: String },
    /// Keyboard-interactive challenge/response.
    SshInteractive {
        username: String,
        responder: Box<dyn ChallengeResponder>,
    },
    /// The transport's default, negotiated mechanism.
    Default,
}

impl Credential {
    /// Build an in-memory SSH key pair credential.
    ///
    /// # Arguments
    ///
    /// * `username` - The username the key pair corresponds to
    /// * `public_key` - The public key data as a string
    /// * `private_key` - The private key data as a string
    /// * `passphrase` - The passphrase unlocking the private key, blank
    ///   string if none
    pub fn ssh_memory(
        username: impl Into<String>,
        public_key: impl Into<String>,
        private_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self::SshMemory {
            username: username.into(),
            public_key: public_key.into(),
            private_key: private_key.into(),
            passphrase: passphrase.into(),
        }
    }

    /// Build a plaintext username/password credential.
    pub fn userpass_plaintext(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::UserPassPlaintext {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a username-only credential.
    pub fn username(username: impl Into<String>) -> Self {
        Self::Username {
            username: username.into(),
        }
    }

    /// Build a keyboard-interactive credential around a responder.
    pub fn ssh_interactive(
        username: impl Into<String>,
        responder: impl ChallengeResponder + 'static,
    ) -> Self {
        Self::SshInteractive {
            username: username.into(),
            responder: Box::new(responder),
        }
    }

    /// The mechanism tag of this credential, for membership checks against
    /// the offered [`CredentialType`] set.
    pub fn credential_type(&self) -> CredentialType {
        match self {
            Self::SshMemory { .. } => CredentialType::SSH_MEMORY,
            Self::UserPassPlaintext { .. } => CredentialType::USERPASS_PLAINTEXT,
            Self::Username { .. } => CredentialType::USERNAME,
            Self::SshInteractive { .. } => CredentialType::SSH_INTERACTIVE,
            Self::Default => CredentialType::DEFAULT,
        }
    }

    /// Get the name of this credential's mechanism.
    ///
    /// Used for logging and debugging purposes.
    pub fn mechanism(&self) -> &'static str {
        match self {
            Self::SshMemory { .. } => "ssh-memory",
            Self::UserPassPlaintext { .. } => "userpass-plaintext",
            Self::Username { .. } => "username",
            Self::SshInteractive { .. } => "ssh-interactive",
            Self::Default => "default",
        }
    }

    /// Write this credential's material into the transport's slot.
    ///
    /// Delegates to the one native primitive matching this mechanism,
    /// passing every field verbatim. On a non-success status the slot is
    /// untouched and the returned error names the primitive plus its raw
    /// status code. No retries happen here; retry policy belongs to the
    /// transport.
    pub fn realise(&self, slot: &mut dyn TransportSlot) -> Result<i32, CredentialError> {
        let (status, operation) = match self {
            Self::SshMemory {
                username,
                public_key,
                private_key,
                passphrase,
            } => (
                slot.ssh_key_from_memory(username, public_key, private_key, passphrase),
                "ssh key memory construction",
            ),
            Self::UserPassPlaintext { username, password } => (
                slot.userpass_plaintext(username, password),
                "plaintext credential construction",
            ),
            Self::Username { username } => (
                slot.username_only(username),
                "username credential construction",
            ),
            Self::SshInteractive {
                username,
                responder,
            } => (
                slot.ssh_interactive(username, responder.as_ref()),
                "ssh interactive credential construction",
            ),
            Self::Default => (slot.default_credential(), "default credential construction"),
        };

        if status != STATUS_OK {
            return Err(CredentialError::Native {
                code: status,
                operation,
            });
        }

        Ok(status)
    }
}

// Secret fields stay out of Debug output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SshMemory { username, .. } => f
                .debug_struct("SshMemory")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::UserPassPlaintext { username, .. } => f
                .debug_struct("UserPassPlaintext")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Username { username } => f
                .debug_struct("Username")
                .field("username", username)
                .finish(),
            Self::SshInteractive { username, .. } => f
                .debug_struct("SshInteractive")
                .field("username", username)
                .finish_non_exhaustive(),
            Self::Default => f.write_str("Default"),
        }
    }
}
