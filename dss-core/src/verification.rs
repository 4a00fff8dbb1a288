use crate::error::{DssError, Error};
use frost_core::{Ciphersuite, Signature, VerifyingKey};

/// Verifies a signature recovered with [`Session::signature`] (or produced
/// by any single signer of the ciphersuite) against `public_key`.
///
/// [`Session::signature`]: crate::Session::signature
pub fn verify<C: Ciphersuite>(
    public_key: &VerifyingKey<C>,
    message: &[u8],
    signature: &[u8],
) -> Result<(), Error<C>> {
    let signature =
        Signature::<C>::deserialize(signature).map_err(|_| DssError::InvalidSignature)?;

    public_key
        .verify(message, &signature)
        .map_err(|_| DssError::InvalidSignature)?;

    Ok(())
}
