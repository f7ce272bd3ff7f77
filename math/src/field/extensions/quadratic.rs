// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{ComplexExtensibleField, ExtensibleField};
use crate::{
    errors::FieldError,
    field::{FieldElement, PrimeField},
};
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable};

// QUADRATIC EXTENSION FIELD
// ================================================================================================

/// Represents an element in a quadratic extension of a [PrimeField](crate::PrimeField).
///
/// The extension element is defined as α + β * u, where u is a root of an irreducible
/// polynomial defined by the implementation of the [ExtensibleField] trait, and α and β are
/// base field elements.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct QuadExtension<B: ExtensibleField<2>>(B, B);

impl<B: ExtensibleField<2>> QuadExtension<B> {
    /// Returns a new extension element instantiated from the provided base elements.
    pub fn new(a0: B, a1: B) -> Self {
        Self(a0, a1)
    }

    /// Returns an extension element built from two base field literals.
    ///
    /// # Errors
    /// Returns an error if either of the literals is not a valid base field element.
    pub fn from_strs(a0: &str, a1: &str) -> Result<Self, FieldError> {
        Ok(Self(a0.parse()?, a1.parse()?))
    }

    /// Returns the coefficient of 1.
    pub fn a0(&self) -> B {
        self.0
    }

    /// Returns the coefficient of u.
    pub fn a1(&self) -> B {
        self.1
    }

    /// Returns both coefficients of this element, starting with the coefficient of 1.
    pub fn to_base_elements(self) -> [B; 2] {
        [self.0, self.1]
    }

    /// Multiplies both coefficients of this element by the base field element `scalar`.
    #[inline]
    pub fn mul_base(self, scalar: B) -> Self {
        Self(self.0 * scalar, self.1 * scalar)
    }

    /// Returns x such that 2 * x equals this element.
    #[inline]
    pub fn halve(self) -> Self {
        Self(self.0.halve(), self.1.halve())
    }

    /// Returns the norm of this element; the norm is a base field element.
    #[inline]
    pub fn norm(&self) -> B {
        <B as ExtensibleField<2>>::norm([self.0, self.1])
    }

    /// Returns the Legendre symbol of this element, computed as the Legendre symbol of its norm
    /// in the base field.
    pub fn legendre(&self) -> i8 {
        self.norm().legendre()
    }

    /// Returns true if this element is lexicographically larger than its negation.
    ///
    /// The coefficient of u decides unless it is ZERO, in which case the coefficient of 1 does.
    pub fn lexicographically_largest(&self) -> bool {
        if self.1.is_zero() {
            self.0.lexicographically_largest()
        } else {
            self.1.lexicographically_largest()
        }
    }

    /// Returns `case_zero` if `cond` is 0 and `case_nonzero` otherwise, without branching on
    /// `cond`.
    pub fn select(cond: u64, case_zero: &Self, case_nonzero: &Self) -> Self {
        let is_nonzero = ((cond | cond.wrapping_neg()) >> 63) as u8;
        Self::conditional_select(case_zero, case_nonzero, Choice::from(is_nonzero))
    }
}

impl<B: ComplexExtensibleField> QuadExtension<B> {
    /// Returns a square root of this element.
    ///
    /// This is Algorithm 9 from <https://eprint.iacr.org/2012/685.pdf>. The result is only
    /// meaningful when this element is a square: callers must check that [Self::legendre]
    /// is not -1 first, since the result for a non-square is an arbitrary element.
    pub fn sqrt(self) -> Self {
        let exponents = B::sqrt_exponents();

        let a1 = self.exp(exponents.e1());
        let alpha = a1.square() * self;
        let x0 = self * a1;

        if alpha == -Self::ONE {
            // x0 * u
            return Self(-x0.1, x0.0);
        }

        (Self::ONE + alpha).exp(exponents.e2()) * x0
    }
}

impl<B: ExtensibleField<2>> FieldElement for QuadExtension<B> {
    type BaseField = B;

    const ZERO: Self = Self(B::ZERO, B::ZERO);
    const ONE: Self = Self(B::ONE, B::ZERO);

    #[inline]
    fn double(self) -> Self {
        Self(self.0.double(), self.1.double())
    }

    #[inline]
    fn square(self) -> Self {
        let result = <B as ExtensibleField<2>>::square([self.0, self.1]);
        Self(result[0], result[1])
    }

    #[inline]
    fn inv(self) -> Self {
        if self == Self::ZERO {
            return self;
        }

        let denom_inv = self.norm().inv();
        self.conjugate().mul_base(denom_inv)
    }

    #[inline]
    fn conjugate(&self) -> Self {
        Self(self.0, -self.1)
    }

    fn try_random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, FieldError> {
        let a0 = B::try_random(rng)?;
        let a1 = B::try_random(rng)?;
        Ok(Self(a0, a1))
    }
}

impl<B: ExtensibleField<2>> ConditionallySelectable for QuadExtension<B> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(
            B::conditional_select(&a.0, &b.0, choice),
            B::conditional_select(&a.1, &b.1, choice),
        )
    }
}

/// Elements are ordered by the coefficient of u first and by the coefficient of 1 second.
impl<B: ExtensibleField<2>> Ord for QuadExtension<B> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1).then_with(|| self.0.cmp(&other.0))
    }
}

impl<B: ExtensibleField<2>> PartialOrd for QuadExtension<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: ExtensibleField<2>> fmt::Display for QuadExtension<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}+{}*u", self.0, self.1)
    }
}

/// Parses either `"<a0>+<a1>*u"` or a single base field literal.
impl<B: ExtensibleField<2>> FromStr for QuadExtension<B> {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || FieldError::InvalidLiteral(s.to_string());
        match s.strip_suffix("*u") {
            Some(body) => {
                let (a0, a1) = body.split_once('+').ok_or_else(invalid)?;
                Self::from_strs(a0, a1).map_err(|_| invalid())
            }
            None => Ok(Self(s.parse().map_err(|_| invalid())?, B::ZERO)),
        }
    }
}

// OVERLOADED OPERATORS
// ------------------------------------------------------------------------------------------------

impl<B: ExtensibleField<2>> Add for QuadExtension<B> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl<B: ExtensibleField<2>> AddAssign for QuadExtension<B> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl<B: ExtensibleField<2>> Sub for QuadExtension<B> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl<B: ExtensibleField<2>> SubAssign for QuadExtension<B> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<B: ExtensibleField<2>> Mul for QuadExtension<B> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let result = <B as ExtensibleField<2>>::mul([self.0, self.1], [rhs.0, rhs.1]);
        Self(result[0], result[1])
    }
}

impl<B: ExtensibleField<2>> MulAssign for QuadExtension<B> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl<B: ExtensibleField<2>> Neg for QuadExtension<B> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0, -self.1)
    }
}

// TYPE CONVERSIONS
// ------------------------------------------------------------------------------------------------

impl<B: ExtensibleField<2>> From<B> for QuadExtension<B> {
    fn from(value: B) -> Self {
        Self(value, B::ZERO)
    }
}

impl<B: ExtensibleField<2>> From<u64> for QuadExtension<B> {
    fn from(value: u64) -> Self {
        Self(B::from(value), B::ZERO)
    }
}

impl<B: ExtensibleField<2>> From<u32> for QuadExtension<B> {
    fn from(value: u32) -> Self {
        Self(B::from(value), B::ZERO)
    }
}

impl<B: ExtensibleField<2>> From<u16> for QuadExtension<B> {
    fn from(value: u16) -> Self {
        Self(B::from(value), B::ZERO)
    }
}

impl<B: ExtensibleField<2>> From<u8> for QuadExtension<B> {
    fn from(value: u8) -> Self {
        Self(B::from(value), B::ZERO)
    }
}

// TESTS
// ================================================================================================
