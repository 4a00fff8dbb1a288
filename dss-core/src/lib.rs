#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![doc = include_str!("../README.md")]
#![doc = document_features::document_features!()]

extern crate alloc;

pub mod dealer;
pub mod error;
mod keys;
mod partial;
mod polynomial;
mod session;
mod verification;

pub use frost_core as frost;

pub use error::{DssError, Error, FrostError};
pub use keys::*;
pub use partial::*;
pub use polynomial::{interpolate, Element, PublicPolynomial, Scalar};
pub use session::*;
pub use verification::*;
