use dss_core::tests;
use dss_p256::{frost::P256Sha256, Error};
use rand_core::OsRng;

#[test]
fn test_basic() -> Result<(), Error> {
    let mut rng = OsRng;
    tests::test_basic::<P256Sha256, _>(2, 2, &mut rng)?;
    tests::test_basic::<P256Sha256, _>(2, 3, &mut rng)?;
    tests::test_basic::<P256Sha256, _>(7, 10, &mut rng)?;
    Ok(())
}

#[test]
fn test_random_signers() -> Result<(), Error> {
    let mut rng = OsRng;
    tests::test_random_signers::<P256Sha256, _>(3, 5, &mut rng)?;
    tests::test_random_signers::<P256Sha256, _>(5, 5, &mut rng)?;
    Ok(())
}

#[test]
fn test_all_partial_signatures() -> Result<(), Error> {
    let mut rng = OsRng;
    tests::test_all_partial_signatures::<P256Sha256, _>(2, 2, &mut rng)?;
    tests::test_all_partial_signatures::<P256Sha256, _>(3, 7, &mut rng)?;
    Ok(())
}

#[test]
fn test_single_signer() -> Result<(), Error> {
    tests::test_single_signer::<P256Sha256, _>(&mut OsRng)
}

#[test]
fn test_two_of_three() -> Result<(), Error> {
    tests::test_two_of_three::<P256Sha256, _>(&mut OsRng)
}

#[test]
fn test_insufficient_shares() -> Result<(), Error> {
    tests::test_insufficient_shares::<P256Sha256, _>(2, 3, &mut OsRng)
}

#[test]
fn test_invalid_session() -> Result<(), Error> {
    tests::test_invalid_session::<P256Sha256, _>(2, 3, &mut OsRng)
}

#[test]
fn test_threshold_mismatch() -> Result<(), Error> {
    tests::test_threshold_mismatch::<P256Sha256, _>(3, 4, &mut OsRng)
}

#[test]
fn test_session_mismatch() -> Result<(), Error> {
    tests::test_session_mismatch::<P256Sha256, _>(2, 3, &mut OsRng)
}

#[test]
fn test_duplicate_share() -> Result<(), Error> {
    tests::test_duplicate_share::<P256Sha256, _>(2, 3, &mut OsRng)
}

#[test]
fn test_tampered_partial_signature() -> Result<(), Error> {
    tests::test_tampered_partial_signature::<P256Sha256, _>(2, 4, &mut OsRng)
}

#[test]
fn test_idempotent_partial_signature() -> Result<(), Error> {
    tests::test_idempotent_partial_signature::<P256Sha256, _>(2, 3, &mut OsRng)
}
