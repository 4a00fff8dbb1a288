use crate::{
    error::{DssError, Error},
    keys::{DistributedKeyShare, PrivateShare},
    partial::PartialSignature,
    polynomial::{interpolate, serialize_element, serialize_scalar, PublicPolynomial, Scalar},
};
use alloc::{collections::BTreeSet, vec::Vec};
use core::fmt;
use frost_core::{Ciphersuite, Group, SigningKey, VerifyingKey};
use rand_core::{CryptoRng, RngCore};

/// Maximum length of the list of participants. Indices are `u16` and the
/// sharing polynomial is evaluated at `index + 1`.
pub const MAX_PARTICIPANTS: usize = u16::MAX as usize;

/// Represents the view of one participant on a distributed signing of one
/// message.
///
/// A session issues the partial signature of its owner, verifies and
/// accumulates the partial signatures of other participants, and recovers
/// the final signature once `threshold` of them are accepted. The final
/// signature verifies like a single-party signature under the long-term
/// distributed public key.
pub struct Session<C: Ciphersuite> {
    signing_key: SigningKey<C>,
    index: u16,
    participants: Vec<VerifyingKey<C>>,
    threshold: u16,
    long_term_share: PrivateShare<C>,
    ephemeral_share: PrivateShare<C>,
    long_term_polynomial: PublicPolynomial<C>,
    ephemeral_polynomial: PublicPolynomial<C>,
    message: Vec<u8>,
    session_id: Vec<u8>,
    challenge: Scalar<C>,
    partials: Vec<PrivateShare<C>>,
    partials_indices: BTreeSet<u16>,
    partial_signature: Option<PartialSignature<C>>,
}

impl<C: Ciphersuite> Session<C> {
    /// Creates a new [`Session`] for the participant owning `signing_key`.
    ///
    /// `long_term` is the share of the distributed key the signature will
    /// verify under, `ephemeral` a share of a fresh distributed random
    /// secret that must never be reused for another message. Both must be
    /// shared with exactly `threshold` commitments, and `threshold` must not
    /// exceed the number of participants.
    pub fn new<K: DistributedKeyShare<C>>(
        signing_key: SigningKey<C>,
        participants: Vec<VerifyingKey<C>>,
        long_term: &K,
        ephemeral: &K,
        message: Vec<u8>,
        threshold: u16,
    ) -> Result<Self, Error<C>> {
        if participants.len() > MAX_PARTICIPANTS {
            return Err(Error::Dss(DssError::TooManyParticipants {
                max: MAX_PARTICIPANTS,
            }));
        }

        let verifying_key = VerifyingKey::from(&signing_key);
        let index = participants
            .iter()
            .position(|participant| *participant == verifying_key)
            .ok_or(DssError::ParticipantNotFound)?;
        let index = u16::try_from(index).map_err(|_| DssError::TooManyParticipants {
            max: MAX_PARTICIPANTS,
        })?;

        if threshold == 0 || threshold as usize > participants.len() {
            return Err(Error::Dss(DssError::InvalidThreshold));
        }

        let long_term_polynomial = PublicPolynomial::from_key_share(long_term)?;
        let ephemeral_polynomial = PublicPolynomial::from_key_share(ephemeral)?;

        // t shares only determine a polynomial of degree t - 1
        if long_term_polynomial.threshold() != threshold as usize
            || ephemeral_polynomial.threshold() != threshold as usize
        {
            return Err(Error::Dss(DssError::InvalidThreshold));
        }

        let long_term_share = long_term.private_share()?;
        let ephemeral_share = ephemeral.private_share()?;
        let session_id = session_id(&long_term_polynomial, &ephemeral_polynomial)?;
        let challenge = challenge(&long_term_polynomial, &ephemeral_polynomial, &message)?;

        tracing::debug!(index, threshold, "created signing session");

        Ok(Self {
            signing_key,
            index,
            participants,
            threshold,
            long_term_share,
            ephemeral_share,
            long_term_polynomial,
            ephemeral_polynomial,
            message,
            session_id,
            challenge,
            partials: Vec::new(),
            partials_indices: BTreeSet::new(),
            partial_signature: None,
        })
    }

    /// Returns the index of the owner in the list of participants.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Returns the participants.
    pub fn participants(&self) -> &[VerifyingKey<C>] {
        &self.participants
    }

    /// Returns the number of partial signatures needed to recover the
    /// signature.
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Returns the message to sign.
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Returns the session id, shared by every participant using the same
    /// long-term and ephemeral distributed keys.
    pub fn session_id(&self) -> &[u8] {
        &self.session_id
    }

    /// Returns the challenge `H(R || A || message)`.
    pub fn challenge(&self) -> Scalar<C> {
        self.challenge
    }

    /// Returns the long-term distributed public key.
    pub fn public_key(&self) -> Result<VerifyingKey<C>, Error<C>> {
        self.long_term_polynomial.verifying_key()
    }

    /// Returns the indices of the accepted partial signatures, own one
    /// included.
    pub fn accepted_indices(&self) -> impl Iterator<Item = u16> + '_ {
        self.partials.iter().map(|partial| partial.index())
    }

    /// Returns the partial signature of the owner.
    ///
    /// The first call computes and authenticates it and records it as
    /// accepted. Subsequent calls return the same partial signature.
    pub fn partial_signature<RNG: RngCore + CryptoRng>(
        &mut self,
        rng: &mut RNG,
    ) -> Result<PartialSignature<C>, Error<C>> {
        if let Some(partial_signature) = &self.partial_signature {
            return Ok(partial_signature.clone());
        }

        // following the notations from the paper
        let alpha = self.long_term_share.value();
        let beta = self.ephemeral_share.value();
        let value = self.challenge * alpha + beta;

        let mut partial_signature =
            PartialSignature::new(self.index, value, self.session_id.clone());
        partial_signature.authenticate(&self.signing_key, rng)?;

        if self.partials_indices.insert(self.index) {
            self.partials.push(partial_signature.partial());
        }
        self.partial_signature = Some(partial_signature.clone());

        tracing::debug!(index = self.index, "issued partial signature");

        Ok(partial_signature)
    }

    /// Checks a partial signature without recording it.
    ///
    /// Rejects partial signatures with an unknown index, an invalid
    /// authentication, another session id, an index already accepted, or a
    /// value inconsistent with the public commitments.
    pub fn verify_partial_signature(
        &self,
        partial_signature: &PartialSignature<C>,
    ) -> Result<(), DssError> {
        let index = partial_signature.index();
        let public = self
            .participants
            .get(index as usize)
            .ok_or(DssError::IndexOutOfRange { index })?;

        partial_signature.verify_authentication(public)?;

        // nothing secret here
        if partial_signature.session_id() != self.session_id.as_slice() {
            return Err(DssError::SessionMismatch);
        }

        if self.partials_indices.contains(&index) {
            return Err(DssError::DuplicateShare { index });
        }

        let long_term_commitment = self.long_term_polynomial.evaluate(index)?;
        let ephemeral_commitment = self.ephemeral_polynomial.evaluate(index)?;
        let left = <C::Group as Group>::generator() * partial_signature.value();
        let right = long_term_commitment * self.challenge + ephemeral_commitment;

        if left != right {
            return Err(DssError::InvalidPartialValue);
        }

        Ok(())
    }

    /// Verifies a partial signature of another participant and stores it
    /// for recovering the signature. Nothing is stored if verification
    /// fails.
    ///
    /// To know whether the signature can be recovered after this call, use
    /// [`Session::has_enough_partial_signatures`].
    pub fn process_partial_signature(
        &mut self,
        partial_signature: &PartialSignature<C>,
    ) -> Result<(), Error<C>> {
        let index = partial_signature.index();

        if let Err(err) = self.verify_partial_signature(partial_signature) {
            tracing::warn!(index, error = %err, "rejected partial signature");
            return Err(err.into());
        }

        self.partials_indices.insert(index);
        self.partials.push(partial_signature.partial());

        tracing::debug!(
            index,
            accepted = self.partials.len(),
            threshold = self.threshold,
            "accepted partial signature"
        );

        Ok(())
    }

    /// Returns `true` if enough partial signatures were accepted to recover
    /// the signature.
    pub fn has_enough_partial_signatures(&self) -> bool {
        self.partials.len() >= self.threshold as usize
    }

    /// Recovers the distributed signature `R || s` from the accepted
    /// partial signatures, where `R` is the ephemeral distributed public key.
    ///
    /// The signature is compatible with the single-party Schnorr
    /// verification of the ciphersuite (EdDSA for Ed25519 and Ed448).
    pub fn signature(&self) -> Result<Vec<u8>, Error<C>> {
        if !self.has_enough_partial_signatures() {
            return Err(Error::Dss(DssError::InsufficientShares {
                accepted: self.partials.len(),
                threshold: self.threshold,
            }));
        }

        let gamma = interpolate(&self.partials[..self.threshold as usize])?;

        // R || gamma
        let commitment = serialize_element::<C>(&self.ephemeral_polynomial.commitment())?;
        let gamma = serialize_scalar::<C>(&gamma);

        let mut signature = Vec::with_capacity(commitment.as_ref().len() + gamma.as_ref().len());
        signature.extend_from_slice(commitment.as_ref());
        signature.extend_from_slice(gamma.as_ref());

        tracing::debug!(
            index = self.index,
            partials = self.partials.len(),
            "recovered distributed signature"
        );

        Ok(signature)
    }
}

impl<C: Ciphersuite> fmt::Debug for Session<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("index", &self.index)
            .field("participants", &self.participants)
            .field("threshold", &self.threshold)
            .field("session_id", &self.session_id)
            .field("partials_indices", &self.partials_indices)
            .field("signed", &self.partial_signature.is_some())
            .finish_non_exhaustive()
    }
}

/// Hashes the ordered commitments of both distributed keys.
fn session_id<C: Ciphersuite>(
    long_term: &PublicPolynomial<C>,
    ephemeral: &PublicPolynomial<C>,
) -> Result<Vec<u8>, DssError> {
    let mut preimage = Vec::new();

    for commitment in long_term
        .commitments()
        .iter()
        .chain(ephemeral.commitments())
    {
        preimage.extend_from_slice(serialize_element::<C>(commitment)?.as_ref());
    }

    Ok(C::H5(&preimage).as_ref().to_vec())
}

/// Computes `H(R || A || message)` with
///  * `R` the ephemeral distributed public key,
///  * `A` the long-term distributed public key.
fn challenge<C: Ciphersuite>(
    long_term: &PublicPolynomial<C>,
    ephemeral: &PublicPolynomial<C>,
    message: &[u8],
) -> Result<Scalar<C>, DssError> {
    let mut preimage = Vec::new();
    preimage.extend_from_slice(serialize_element::<C>(&ephemeral.commitment())?.as_ref());
    preimage.extend_from_slice(serialize_element::<C>(&long_term.commitment())?.as_ref());
    preimage.extend_from_slice(message);

    Ok(C::H2(&preimage))
}
