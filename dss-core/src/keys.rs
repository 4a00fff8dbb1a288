//! Distributed key shares.

use crate::{
    error::DssError,
    polynomial::{index_from_identifier, Element, Scalar},
};
use alloc::vec::Vec;
use core::fmt;
use frost_core::{keys::SecretShare, Ciphersuite};

/// Represents a share of a distributed secret owned by one participant.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PrivateShare<C: Ciphersuite> {
    index: u16,
    value: Scalar<C>,
}

impl<C: Ciphersuite> PrivateShare<C> {
    /// Creates a new [`PrivateShare`].
    pub fn new(index: u16, value: Scalar<C>) -> Self {
        Self { index, value }
    }

    /// Returns the zero-based index of the share.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Returns the value of the share.
    pub fn value(&self) -> Scalar<C> {
        self.value
    }
}

impl<C: Ciphersuite> fmt::Debug for PrivateShare<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateShare")
            .field("index", &self.index)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Output of a distributed key generation that can be used for signing.
///
/// Allows plugging key shares produced by different schemes into a
/// [`Session`](crate::Session). FROST [`SecretShare`]s, from the trusted
/// dealer or from the DKG, implement it directly.
pub trait DistributedKeyShare<C: Ciphersuite> {
    /// Returns the private share of this participant.
    fn private_share(&self) -> Result<PrivateShare<C>, DssError>;

    /// Returns the ordered commitments to the coefficients of the sharing
    /// polynomial. The first one commits to the distributed secret.
    fn commitments(&self) -> Vec<Element<C>>;
}

impl<C: Ciphersuite> DistributedKeyShare<C> for SecretShare<C> {
    fn private_share(&self) -> Result<PrivateShare<C>, DssError> {
        let index = index_from_identifier(self.identifier())?;
        Ok(PrivateShare::new(index, self.signing_share().to_scalar()))
    }

    fn commitments(&self) -> Vec<Element<C>> {
        self.commitment()
            .coefficients()
            .iter()
            .map(|coefficient| coefficient.value())
            .collect()
    }
}

/// Represents a private share together with the public commitments of the
/// polynomial it lies on, for key shares that do not come from FROST.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyShare<C: Ciphersuite> {
    private_share: PrivateShare<C>,
    commitments: Vec<Element<C>>,
}

impl<C: Ciphersuite> KeyShare<C> {
    /// Creates a new [`KeyShare`].
    pub fn new(private_share: PrivateShare<C>, commitments: Vec<Element<C>>) -> Self {
        Self {
            private_share,
            commitments,
        }
    }
}

impl<C: Ciphersuite> DistributedKeyShare<C> for KeyShare<C> {
    fn private_share(&self) -> Result<PrivateShare<C>, DssError> {
        Ok(self.private_share)
    }

    fn commitments(&self) -> Vec<Element<C>> {
        self.commitments.clone()
    }
}

impl<C: Ciphersuite> fmt::Debug for KeyShare<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyShare")
            .field("private_share", &self.private_share)
            .field("commitments", &self.commitments.len())
            .finish()
    }
}
