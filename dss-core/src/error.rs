//! Error types.

use frost_core::Ciphersuite;
#[cfg(feature = "std")]
use thiserror::Error;
#[cfg(not(feature = "std"))]
use thiserror_nostd_notrait::Error;

/// Represents all possible errors that can occur in FROST primitives.
pub type FrostError<C> = frost_core::Error<C>;

/// Represents all possible errors that can occur in DSS protocol.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum DssError {
    /// Own public key is not in the list of participants.
    #[error("Public key not found in list of participants")]
    ParticipantNotFound,
    /// Partial signature refers to an index outside of the participant list.
    #[error("Partial signature with invalid index {index}")]
    IndexOutOfRange {
        /// Index claimed by the partial signature.
        index: u16,
    },
    /// Authentication tag of partial signature is missing or invalid.
    #[error("Invalid partial signature authentication")]
    InvalidAuthentication,
    /// Partial signature is bound to another session.
    #[error("Session id do not match")]
    SessionMismatch,
    /// Partial signature has already been received from this participant.
    #[error("Partial signature already received from participant {index}")]
    DuplicateShare {
        /// Index of the participant.
        index: u16,
    },
    /// Partial signature does not match the public commitments.
    #[error("Partial signature not valid")]
    InvalidPartialValue,
    /// Not enough partial signatures to recover the signature.
    #[error("Not enough partial signatures: {accepted} < {threshold}")]
    InsufficientShares {
        /// Number of accepted partial signatures.
        accepted: usize,
        /// Required number of partial signatures.
        threshold: u16,
    },
    /// Lagrange interpolation failed.
    #[error("Failed to recover signature from partial signatures")]
    RecoveryFailure,
    /// Signature does not verify.
    #[error("Invalid signature")]
    InvalidSignature,
    /// Threshold is zero, larger than the number of participants, or does
    /// not match the degree of the distributed keys.
    #[error("Invalid threshold")]
    InvalidThreshold,
    /// List of participants is longer than the index space.
    #[error("Too many participants, at most {max} are supported")]
    TooManyParticipants {
        /// Maximum number of participants.
        max: usize,
    },
    /// Key share identifier does not map to a participant index.
    #[error("Invalid key share")]
    InvalidKeyShare,
    /// Distributed key share has no public commitments.
    #[error("Missing public commitments")]
    MissingCommitments,
    /// Group element can not be serialized.
    #[error("Malformed element")]
    MalformedElement,
    /// Scalar can not be deserialized.
    #[error("Malformed scalar")]
    MalformedScalar,
    /// Encoding failed.
    #[error("Serialization error")]
    Serialization,
    /// Decoding failed.
    #[error("Deserialization error")]
    Deserialization,
}

/// Represents all possible errors that can occur.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error<C: Ciphersuite> {
    /// Error in FROST primitives.
    #[error("FROST error: {0}")]
    Frost(#[from] FrostError<C>),
    /// Error in DSS protocol.
    #[error("DSS error: {0}")]
    Dss(#[from] DssError),
}
