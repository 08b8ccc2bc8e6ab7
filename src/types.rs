//! The accepted-mechanism bitset a transport offers during negotiation.
//!
//! The transport hands over a raw `u32` bitmask naming every credential
//! mechanism it is currently willing to accept. [`CredentialType`] maps that
//! mask onto a typed, immutable flag set supporting only set algebra: union,
//! intersection and membership. Flags are independent bits with no ordering
//! semantics.

use bitflags::bitflags;

bitflags! {
    /// Credential mechanisms a transport accepts for one negotiation attempt.
    ///
    /// Bit values match the native transport library's credential type
    /// constants, so a set round-trips through the raw mask unchanged as
    /// long as every bit is one the host defines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CredentialType: u32 {
        /// Plaintext username and password.
        const USERPASS_PLAINTEXT = 1 << 0;
        /// SSH key pair read from files on disk.
        const SSH_KEY = 1 << 1;
        /// SSH credential with a host-defined signing callback.
        const SSH_CUSTOM = 1 << 2;
        /// Default mechanism negotiated by the transport itself.
        const DEFAULT = 1 << 3;
        /// SSH keyboard-interactive challenge/response.
        const SSH_INTERACTIVE = 1 << 4;
        /// Username only, for transports that probe the username first.
        const USERNAME = 1 << 5;
        /// SSH key pair already loaded into memory.
        const SSH_MEMORY = 1 << 6;
    }
}

impl CredentialType {
    /// Build a set from the raw bitmask handed over by the transport.
    ///
    /// Bits the host library does not define are dropped, so the result is
    /// always a subset of the known mechanisms.
    pub fn from_raw(raw: u32) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// The raw bitmask for handing back to the native layer.
    pub fn as_raw(self) -> u32 {
        self.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_known_bits() {
        let set = CredentialType::from_raw(0b100_0001);
        assert_eq!(
            set,
            CredentialType::USERPASS_PLAINTEXT | CredentialType::SSH_MEMORY
        );
    }

    #[test]
    fn test_from_raw_drops_unknown_bits() {
        // Bit 7 and above are not defined by the host library
        let set = CredentialType::from_raw(0b1000_0010);
        assert_eq!(set, CredentialType::SSH_KEY);
        assert_eq!(set.as_raw(), 0b10);
    }

    #[test]
    fn test_from_raw_zero_is_empty() {
        let set = CredentialType::from_raw(0);
        assert!(set.is_empty());
    }

    #[test]
    fn test_membership() {
        let set = CredentialType::SSH_MEMORY | CredentialType::USERNAME;
        assert!(set.contains(CredentialType::SSH_MEMORY));
        assert!(set.contains(CredentialType::USERNAME));
        assert!(!set.contains(CredentialType::USERPASS_PLAINTEXT));
    }

    #[test]
    fn test_union_and_intersection() {
        let a = CredentialType::SSH_KEY | CredentialType::SSH_MEMORY;
        let b = CredentialType::SSH_MEMORY | CredentialType::DEFAULT;

        assert_eq!(
            a | b,
            CredentialType::SSH_KEY | CredentialType::SSH_MEMORY | CredentialType::DEFAULT
        );
        assert_eq!(a & b, CredentialType::SSH_MEMORY);
    }

    #[test]
    fn test_raw_round_trip() {
        let set = CredentialType::SSH_INTERACTIVE | CredentialType::USERNAME;
        assert_eq!(CredentialType::from_raw(set.as_raw()), set);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(CredentialType::default().is_empty());
    }
}
