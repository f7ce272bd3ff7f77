// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::FieldError;
use core::{
    fmt::{Debug, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use num_bigint::{BigInt, BigUint, Sign};
use rand::RngCore;
use subtle::ConditionallySelectable;

// FIELD ELEMENT
// ================================================================================================

pub trait FieldElement:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + PartialEq
    + Sized
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + Neg<Output = Self>
    + From<Self::BaseField>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + ConditionallySelectable
{
    type BaseField: PrimeField;

    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Returns this field element added to itself.
    fn double(self) -> Self {
        self + self
    }

    /// Returns this field element raised to power 2.
    fn square(self) -> Self {
        self * self
    }

    /// Exponentiates this field element by `power` parameter.
    ///
    /// Bits of the exponent are processed from the most significant one; ZERO raised to
    /// power 0 is ONE.
    fn exp(self, power: &BigUint) -> Self {
        let mut r = Self::ONE;
        for i in (0..power.bits()).rev() {
            r = r.square();
            if power.bit(i) {
                r *= self;
            }
        }
        r
    }

    /// Exponentiates this field element by a signed `power`. A negative power raises the
    /// inverse of this element to the absolute value of `power`.
    ///
    /// # Errors
    /// Returns an error if `power` is negative and this element is ZERO.
    fn exp_signed(self, power: &BigInt) -> Result<Self, FieldError> {
        let base = match power.sign() {
            Sign::NoSign => return Ok(Self::ONE),
            Sign::Minus => self.try_inv()?,
            Sign::Plus => self,
        };
        Ok(base.exp(power.magnitude()))
    }

    /// Returns a multiplicative inverse of this field element. If this element is ZERO, ZERO is
    /// returned.
    fn inv(self) -> Self;

    /// Returns a multiplicative inverse of this field element.
    ///
    /// # Errors
    /// Returns an error if this element is ZERO.
    fn try_inv(self) -> Result<Self, FieldError> {
        if self.is_zero() {
            Err(FieldError::NotInvertible)
        } else {
            Ok(self.inv())
        }
    }

    /// Returns this element divided by `rhs`.
    ///
    /// # Errors
    /// Returns an error if `rhs` is ZERO.
    fn try_div(self, rhs: Self) -> Result<Self, FieldError> {
        Ok(self * rhs.try_inv()?)
    }

    /// Returns a conjugate of this field element.
    fn conjugate(&self) -> Self;

    /// Returns true if this element is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Returns true if this element is the multiplicative identity.
    fn is_one(&self) -> bool {
        *self == Self::ONE
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns an element drawn uniformly from the entire field using randomness from `rng`.
    ///
    /// # Errors
    /// Returns an error if `rng` fails to produce bytes; no partially sampled element is
    /// returned in that case.
    fn try_random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, FieldError>;
}

// PRIME FIELD
// ================================================================================================

pub trait PrimeField: FieldElement<BaseField = Self> + Ord + FromStr<Err = FieldError> {
    /// The number of bits needed to represents the field modulus.
    const MODULUS_BITS: u32;

    /// Returns the prime modulus of the field.
    fn modulus() -> &'static BigUint;

    /// Returns x such that 2 * x equals this element.
    fn halve(self) -> Self;

    /// Returns the Legendre symbol of this element: 1 for non-zero squares, -1 for
    /// non-squares, and 0 for ZERO.
    fn legendre(&self) -> i8;

    /// Returns true if the canonical value of this element is greater than (MODULUS - 1) / 2.
    fn lexicographically_largest(&self) -> bool;

    /// Returns a canonical integer representation of the field element.
    fn to_biguint(&self) -> BigUint;

    /// Returns the field element congruent to `value`.
    fn from_biguint(value: &BigUint) -> Self;
}
