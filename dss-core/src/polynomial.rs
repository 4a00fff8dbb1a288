//! Public polynomials and Lagrange interpolation.

use crate::{
    error::{DssError, Error},
    keys::{DistributedKeyShare, PrivateShare},
};
use alloc::{collections::BTreeSet, vec::Vec};
use frost_core::{
    compute_lagrange_coefficient, Ciphersuite, Field, Group, Identifier, VerifyingKey,
};

/// Scalar of the ciphersuite's field.
pub type Scalar<C> = <<<C as Ciphersuite>::Group as Group>::Field as Field>::Scalar;

/// Element of the ciphersuite's group.
pub type Element<C> = <<C as Ciphersuite>::Group as Group>::Element;

type FieldOf<C> = <<C as Ciphersuite>::Group as Group>::Field;

/// Commitment to a degree `t - 1` polynomial in the exponent.
///
/// Evaluating it at a participant index yields the public commitment to
/// that participant's private share, while the 0th coefficient commits to
/// the shared secret itself.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicPolynomial<C: Ciphersuite> {
    commitments: Vec<Element<C>>,
}

impl<C: Ciphersuite> PublicPolynomial<C> {
    /// Creates a new [`PublicPolynomial`] from the ordered coefficient
    /// commitments.
    pub fn new(commitments: Vec<Element<C>>) -> Result<Self, DssError> {
        if commitments.is_empty() {
            return Err(DssError::MissingCommitments);
        }

        Ok(Self { commitments })
    }

    /// Creates a new [`PublicPolynomial`] from the commitments of a
    /// distributed key share.
    pub fn from_key_share<K: DistributedKeyShare<C>>(key_share: &K) -> Result<Self, DssError> {
        Self::new(key_share.commitments())
    }

    /// Returns the commitment to the shared secret.
    pub fn commitment(&self) -> Element<C> {
        self.commitments[0]
    }

    /// Returns the coefficient commitments.
    pub fn commitments(&self) -> &[Element<C>] {
        &self.commitments
    }

    /// Returns the number of shares needed to recover the secret.
    pub fn threshold(&self) -> usize {
        self.commitments.len()
    }

    /// Returns the commitment to the private share with the given `index`.
    pub fn evaluate(&self, index: u16) -> Result<Element<C>, DssError> {
        let x = identifier_from_index::<C>(index)?.to_scalar();
        Ok(self
            .commitments
            .iter()
            .rev()
            .fold(<C::Group as Group>::identity(), |acc, commitment| {
                acc * x + *commitment
            }))
    }

    /// Returns the commitment to the shared secret as a [`VerifyingKey`].
    pub fn verifying_key(&self) -> Result<VerifyingKey<C>, Error<C>> {
        let serialization = serialize_element::<C>(&self.commitment())?;
        Ok(VerifyingKey::deserialize(serialization.as_ref())?)
    }
}

/// Maps a zero-based participant index to the FROST identifier the sharing
/// polynomial is evaluated at, i.e. `index + 1`.
pub(crate) fn identifier_from_index<C: Ciphersuite>(
    index: u16,
) -> Result<Identifier<C>, DssError> {
    index
        .checked_add(1)
        .and_then(|x| Identifier::try_from(x).ok())
        .ok_or(DssError::IndexOutOfRange { index })
}

/// Maps a FROST identifier back to the zero-based participant index. Only
/// identifiers `1..=u16::MAX` have one.
pub(crate) fn index_from_identifier<C: Ciphersuite>(
    identifier: &Identifier<C>,
) -> Result<u16, DssError> {
    (0..u16::MAX)
        .find(|&index| identifier_from_index::<C>(index).ok() == Some(*identifier))
        .ok_or(DssError::InvalidKeyShare)
}

/// Recovers the value at 0 of the polynomial the `shares` lie on.
///
/// The Lagrange basis is built from the indices of the given shares, so
/// any subset of at least `t` shares with distinct indices works.
pub fn interpolate<C: Ciphersuite>(shares: &[PrivateShare<C>]) -> Result<Scalar<C>, DssError> {
    let identifiers = shares
        .iter()
        .map(|share| identifier_from_index::<C>(share.index()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| DssError::RecoveryFailure)?;

    let identifier_set: BTreeSet<_> = identifiers.iter().copied().collect();
    if identifier_set.len() != shares.len() {
        return Err(DssError::RecoveryFailure);
    }

    let mut secret = FieldOf::<C>::zero();

    for (identifier, share) in identifiers.into_iter().zip(shares) {
        let lambda = compute_lagrange_coefficient(&identifier_set, None, identifier)
            .map_err(|_| DssError::RecoveryFailure)?;
        secret = secret + lambda * share.value();
    }

    Ok(secret)
}

pub(crate) fn serialize_element<C: Ciphersuite>(
    element: &Element<C>,
) -> Result<<C::Group as Group>::Serialization, DssError> {
    <C::Group as Group>::serialize(element).map_err(|_| DssError::MalformedElement)
}

pub(crate) fn serialize_scalar<C: Ciphersuite>(
    scalar: &Scalar<C>,
) -> <FieldOf<C> as Field>::Serialization {
    FieldOf::<C>::serialize(scalar)
}

#[cfg(any(test, feature = "serde"))]
pub(crate) fn deserialize_scalar<C: Ciphersuite>(bytes: &[u8]) -> Result<Scalar<C>, DssError> {
    frost_core::keys::SigningShare::<C>::deserialize(bytes)
        .map(|share| share.to_scalar())
        .map_err(|_| DssError::MalformedScalar)
}
