//! Trusted dealer key generation.
//!
//! Produces FROST [`SecretShare`]s of a fresh random secret, ordered by
//! participant index. Useful where a distributed key generation is not
//! available, and for tests.

use crate::{
    error::{DssError, Error},
    polynomial::identifier_from_index,
};
use alloc::vec::Vec;
use frost_core::{
    keys::{self, IdentifierList, SecretShare},
    Ciphersuite,
};
use rand_core::{CryptoRng, RngCore};

/// Splits a random secret into `max_signers` shares so that any
/// `min_signers` of them recover it. The share at position `i` belongs to
/// the participant with index `i`.
///
/// FROST requires `2 <= min_signers <= max_signers`.
pub fn generate_with_dealer<C: Ciphersuite, RNG: RngCore + CryptoRng>(
    max_signers: u16,
    min_signers: u16,
    rng: &mut RNG,
) -> Result<Vec<SecretShare<C>>, Error<C>> {
    if min_signers < 2 || min_signers > max_signers {
        return Err(Error::Dss(DssError::InvalidThreshold));
    }

    let (mut shares, _) =
        keys::generate_with_dealer(max_signers, min_signers, IdentifierList::Default, rng)?;

    (0..max_signers)
        .map(|index| -> Result<SecretShare<C>, Error<C>> {
            let identifier = identifier_from_index::<C>(index)?;
            shares
                .remove(&identifier)
                .ok_or(Error::Dss(DssError::InvalidKeyShare))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::DistributedKeyShare;
    use frost_ed25519::Ed25519Sha512;
    use rand_core::OsRng;

    #[test]
    fn dealt_shares_are_consistent() {
        let shares = generate_with_dealer::<Ed25519Sha512, _>(4, 3, &mut OsRng).unwrap();

        assert_eq!(shares.len(), 4);
        for (index, share) in shares.iter().enumerate() {
            share.verify().unwrap();
            assert_eq!(share.private_share().unwrap().index() as usize, index);
        }
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        for min_signers in [0, 1, 4] {
            assert_eq!(
                generate_with_dealer::<Ed25519Sha512, _>(3, min_signers, &mut OsRng).map(|_| ()),
                Err(Error::Dss(DssError::InvalidThreshold))
            );
        }
    }
}
