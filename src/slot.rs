//! The transport-owned output slot realised credentials are written into.
//!
//! The native layer models this as a double-indirected out-parameter; here it
//! is a trait the transport implements. The core never inspects the slot's
//! internals and writes it at most once per attempt, on success only.

use crate::credential::ChallengeResponder;

/// Native "all good" status code shared by every slot primitive.
pub const STATUS_OK: i32 = 0;

/// Destination for realised credential material, owned by the transport.
///
/// Each method corresponds to one native credential-construction primitive:
/// it receives the raw fields verbatim and returns the native status code,
/// [`STATUS_OK`] on success. On any non-success status the slot must be left
/// untouched.
///
/// A populated slot is valid for exactly the authentication attempt it was
/// handed out for; this layer makes no retention guarantee beyond the call.
pub trait TransportSlot {
    /// Construct an SSH credential from an in-memory key pair.
    ///
    /// `passphrase` is the passphrase unlocking the private key, empty if
    /// the key has none.
    fn ssh_key_from_memory(
        &mut self,
        username: &str,
        public_key: &str,
        private_key: &str,
        passphrase: &str,
    ) -> i32;

    /// Construct a plaintext username/password credential.
    fn userpass_plaintext(&mut self, username: &str, password: &str) -> i32;

    /// Construct a username-only credential for transports that probe the
    /// username before offering real mechanisms.
    fn username_only(&mut self, username: &str) -> i32;

    /// Construct a keyboard-interactive credential; the transport calls back
    /// into `responder` when the server issues its challenges.
    fn ssh_interactive(&mut self, username: &str, responder: &dyn ChallengeResponder) -> i32;

    /// Construct the transport's default, negotiated credential.
    fn default_credential(&mut self) -> i32;
}
