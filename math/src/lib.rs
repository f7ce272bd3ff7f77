// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Arithmetic in the quadratic extension field $\mathbb{F}_{q^2}$ used by the BLS12-381
//! pairing-friendly curve.
//!
//! Field elements implement the [FieldElement] trait; the BLS12-381 base field additionally
//! implements [PrimeField], [ExtensibleField] and [ComplexExtensibleField], which together make
//! [QuadExtension] over it a complete $\mathbb{F}_{q^2}$ with square roots, Legendre symbols,
//! canonical ordering and constant-time selection.
//!
//! ```
//! use tower_math::{fields::Fp2, FieldElement};
//!
//! let x: Fp2 = "3+4*u".parse().unwrap();
//! assert_eq!(1, x.legendre());
//! let root = x.sqrt();
//! assert_eq!(x, root.square());
//! ```

pub mod utils;
pub use utils::batch_inversion;

mod field;
pub use field::{
    ComplexExtensibleField, ExtensibleField, FieldElement, PrimeField, QuadExtension,
    SqrtExponents,
};
pub mod fields {
    //! Finite field implementations.
    //!
    //! This module contains the BLS12-381 base field as well as its quadratic extension.

    pub use super::field::bls12_381;
    pub use super::field::bls12_381::Fp2;
}

mod errors;
pub use errors::{ElementDecodingError, FieldError};
