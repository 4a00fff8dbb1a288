//! Partial signatures exchanged between participants.

use crate::{
    error::{DssError, Error},
    keys::PrivateShare,
    polynomial::{serialize_scalar, Scalar},
};
use alloc::vec::Vec;
use core::fmt;
use frost_core::{Ciphersuite, Signature, SigningKey, VerifyingKey};
use rand_core::{CryptoRng, RngCore};

/// Represents a partial signature of one participant. It must be sent to
/// every other participant or to a combiner.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        bound = "C: Ciphersuite",
        into = "PartialSignatureWire",
        try_from = "PartialSignatureWire"
    )
)]
pub struct PartialSignature<C: Ciphersuite> {
    partial: PrivateShare<C>,
    session_id: Vec<u8>,
    authentication: Vec<u8>,
}

impl<C: Ciphersuite> PartialSignature<C> {
    /// Creates a new unauthenticated [`PartialSignature`].
    pub fn new(index: u16, value: Scalar<C>, session_id: Vec<u8>) -> Self {
        Self {
            partial: PrivateShare::new(index, value),
            session_id,
            authentication: Vec::new(),
        }
    }

    /// Returns the index of the issuer.
    pub fn index(&self) -> u16 {
        self.partial.index()
    }

    /// Returns the response scalar.
    pub fn value(&self) -> Scalar<C> {
        self.partial.value()
    }

    /// Returns the response scalar together with the index of the issuer.
    pub fn partial(&self) -> PrivateShare<C> {
        self.partial
    }

    /// Returns the session id the partial signature is bound to.
    pub fn session_id(&self) -> &[u8] {
        &self.session_id
    }

    /// Returns the serialized authentication signature.
    pub fn authentication(&self) -> &[u8] {
        &self.authentication
    }

    /// Returns the message covered by the authentication signature,
    /// i.e. the hash of index, response scalar and session id.
    pub fn authentication_message(&self) -> C::HashOutput {
        let value = serialize_scalar::<C>(&self.partial.value());

        let mut preimage = Vec::with_capacity(2 + value.as_ref().len() + self.session_id.len());
        preimage.extend_from_slice(&self.partial.index().to_be_bytes());
        preimage.extend_from_slice(value.as_ref());
        preimage.extend_from_slice(&self.session_id);

        C::H4(&preimage)
    }

    /// Signs the partial signature with the long-term individual key of the
    /// issuer, replacing any previous authentication.
    pub fn authenticate<RNG: RngCore + CryptoRng>(
        &mut self,
        signing_key: &SigningKey<C>,
        rng: &mut RNG,
    ) -> Result<(), Error<C>> {
        let message = self.authentication_message();
        let signature = signing_key.sign(&mut *rng, message.as_ref());
        self.authentication = signature.serialize()?;
        Ok(())
    }

    /// Checks the authentication signature against the long-term individual
    /// key of the claimed issuer.
    pub fn verify_authentication(&self, verifying_key: &VerifyingKey<C>) -> Result<(), DssError> {
        let signature = Signature::<C>::deserialize(&self.authentication)
            .map_err(|_| DssError::InvalidAuthentication)?;

        verifying_key
            .verify(self.authentication_message().as_ref(), &signature)
            .map_err(|_| DssError::InvalidAuthentication)
    }
}

#[cfg(feature = "serialization")]
impl<C: Ciphersuite> PartialSignature<C> {
    /// Serializes the partial signature using `postcard`.
    pub fn serialize(&self) -> Result<Vec<u8>, DssError> {
        postcard::to_allocvec(self).map_err(|_| DssError::Serialization)
    }

    /// Deserializes a partial signature encoded with
    /// [`PartialSignature::serialize`].
    pub fn deserialize(bytes: &[u8]) -> Result<Self, DssError> {
        postcard::from_bytes(bytes).map_err(|_| DssError::Deserialization)
    }
}

impl<C: Ciphersuite> fmt::Debug for PartialSignature<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialSignature")
            .field("index", &self.partial.index())
            .field("session_id", &self.session_id)
            .field("authentication", &self.authentication)
            .finish_non_exhaustive()
    }
}

/// Wire representation of [`PartialSignature`].
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PartialSignatureWire {
    index: u16,
    value: Vec<u8>,
    session_id: Vec<u8>,
    authentication: Vec<u8>,
}

#[cfg(feature = "serde")]
impl<C: Ciphersuite> From<PartialSignature<C>> for PartialSignatureWire {
    fn from(partial_signature: PartialSignature<C>) -> Self {
        Self {
            index: partial_signature.index(),
            value: serialize_scalar::<C>(&partial_signature.value())
                .as_ref()
                .to_vec(),
            session_id: partial_signature.session_id,
            authentication: partial_signature.authentication,
        }
    }
}

#[cfg(feature = "serde")]
impl<C: Ciphersuite> TryFrom<PartialSignatureWire> for PartialSignature<C> {
    type Error = DssError;

    fn try_from(wire: PartialSignatureWire) -> Result<Self, Self::Error> {
        Ok(Self {
            partial: PrivateShare::new(
                wire.index,
                crate::polynomial::deserialize_scalar::<C>(&wire.value)?,
            ),
            session_id: wire.session_id,
            authentication: wire.authentication,
        })
    }
}
