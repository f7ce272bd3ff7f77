// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod quadratic;
pub use quadratic::QuadExtension;

use super::PrimeField;
use num_bigint::BigUint;

// EXTENSIBLE FIELD TRAIT
// ================================================================================================

/// Defines basic arithmetic in an extension of a [PrimeField] of a given degree.
///
/// Extension elements are passed around as arrays of their coefficients over the base field.
pub trait ExtensibleField<const N: usize>: PrimeField {
    /// Returns a product of `a` and `b` in the field defined by this extension.
    fn mul(a: [Self; N], b: [Self; N]) -> [Self; N];

    /// Returns `a` raised to power 2 in the field defined by this extension.
    fn square(a: [Self; N]) -> [Self; N] {
        <Self as ExtensibleField<N>>::mul(a, a)
    }

    /// Returns the norm of `x`, i.e. the product of all of its conjugates; the norm is always
    /// an element of the base field.
    fn norm(x: [Self; N]) -> Self;
}

/// A base field with q = 3 mod 4 whose quadratic extension is built with u<sup>2</sup> = -1.
///
/// Such extensions admit a square root algorithm requiring only two exponentiations by
/// exponents derived from the modulus.
pub trait ComplexExtensibleField: ExtensibleField<2> {
    /// Returns exponents used by the square root algorithm.
    fn sqrt_exponents() -> &'static SqrtExponents;
}

// SQUARE ROOT EXPONENTS
// ================================================================================================

/// Exponents (q - 3) / 4 and (q - 1) / 2 derived from a base field modulus q.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqrtExponents {
    e1: BigUint,
    e2: BigUint,
}

impl SqrtExponents {
    /// Derives square root exponents from the provided `modulus`.
    ///
    /// # Panics
    /// Panics if `modulus` is not congruent to 3 modulo 4.
    pub fn from_modulus(modulus: &BigUint) -> Self {
        assert!(
            modulus.bit(0) && modulus.bit(1),
            "modulus must be congruent to 3 modulo 4"
        );
        let e1 = (modulus - BigUint::from(3u32)) >> 2usize;
        let e2 = (modulus - BigUint::from(1u32)) >> 1usize;
        tracing::debug!(bits = modulus.bits(), "derived square root exponents");
        Self { e1, e2 }
    }

    /// Returns (q - 3) / 4.
    pub fn e1(&self) -> &BigUint {
        &self.e1
    }

    /// Returns (q - 1) / 2.
    pub fn e2(&self) -> &BigUint {
        &self.e2
    }
}
