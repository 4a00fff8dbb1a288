#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![doc = document_features::document_features!()]

pub mod error {
    //! Error types.

    /// Represents all possible errors that can occur in FROST primitives.
    pub type FrostError = dss_core::error::FrostError<frost_ed448::Ed448Shake256>;

    pub use dss_core::error::DssError;

    /// Represents all possible errors that can occur.
    pub type Error = dss_core::error::Error<frost_ed448::Ed448Shake256>;
}

mod keys {
    pub use dss_core::DistributedKeyShare;

    /// Represents a share of a distributed secret owned by one participant.
    pub type PrivateShare = dss_core::PrivateShare<frost_ed448::Ed448Shake256>;

    /// Represents a private share together with the public commitments of
    /// the polynomial it lies on.
    pub type KeyShare = dss_core::KeyShare<frost_ed448::Ed448Shake256>;

    /// Represents a commitment to a polynomial in the exponent.
    pub type PublicPolynomial = dss_core::PublicPolynomial<frost_ed448::Ed448Shake256>;
}

mod session {
    /// Represents a partial signature of one participant.
    pub type PartialSignature = dss_core::PartialSignature<frost_ed448::Ed448Shake256>;

    /// Represents the view of one participant on a distributed signing.
    pub type Session = dss_core::Session<frost_ed448::Ed448Shake256>;
}

pub use dss_core::dealer;
pub use frost_ed448 as frost;

pub use error::{DssError, Error};
pub use keys::*;
pub use session::*;

/// Verifies a signature recovered with [`Session::signature`] against
/// `public_key`. Any RFC 8032 Ed448 verifier accepts the same signatures.
pub fn verify(
    public_key: &frost::VerifyingKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), Error> {
    dss_core::verify(public_key, message, signature)
}
