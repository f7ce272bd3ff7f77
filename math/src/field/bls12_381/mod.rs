// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of the BLS12-381 base field using Montgomery representation, together with
//! its quadratic extension $\mathbb{F}_{q^2} = \mathbb{F}_q[u] / (u^2 + 1)$.
//!
//! The modulus is the 381-bit prime
//! q = 0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab.
//!
//! Since q = 3 mod 4, -1 is a quadratic non-residue and can be used to build the extension.
//! Additions, subtractions, multiplications and selections are constant-time. Inversion and the
//! Legendre symbol are computed by exponentiation to public exponents.

use core::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Num;
use rand::RngCore;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::{
    ComplexExtensibleField, ExtensibleField, FieldElement, PrimeField, QuadExtension,
    SqrtExponents,
};
use crate::errors::{ElementDecodingError, FieldError};


// CONSTANTS
// ================================================================================================

/// Field modulus q in little-endian limbs.
const MODULUS: [u64; 6] = [
    0xb9fe_ffff_ffff_aaab,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// INV = -(q^{-1} mod 2^64) mod 2^64
const INV: u64 = 0x89f3_fffc_fffc_fffd;

/// R = 2^384 mod q; this is the Montgomery form of ONE.
const R: BaseElement = BaseElement([
    0x7609_0000_0002_fffd,
    0xebf4_000b_c40c_0002,
    0x5f48_9857_53c7_58ba,
    0x77ce_5853_7052_5745,
    0x5c07_1a97_a256_ec6d,
    0x15f6_5ec3_fa80_e493,
]);

/// R^2 = 2^768 mod q; this is used for conversion of elements into Montgomery representation.
const R2: BaseElement = BaseElement([
    0xf4df_1f34_1c34_1746,
    0x0a76_e6a6_09d1_04f1,
    0x8de5_476c_4c95_b6d5,
    0x67eb_88a9_939d_83c0,
    0x9a79_3e85_b519_952d,
    0x1198_8fe5_92ca_e3aa,
]);

/// q - 2; the exponent used for inversion.
const Q_MINUS_TWO: [u64; 6] = [
    0xb9fe_ffff_ffff_aaa9,
    0x1eab_fffe_b153_ffff,
    0x6730_d2a0_f6b0_f624,
    0x6477_4b84_f385_12bf,
    0x4b1b_a7b6_434b_acd7,
    0x1a01_11ea_397f_e69a,
];

/// (q - 1) / 2; the exponent used by Euler's criterion.
const Q_MINUS_ONE_DIV_TWO: [u64; 6] = [
    0xdcff_7fff_ffff_d555,
    0x0f55_ffff_58a9_ffff,
    0xb398_6950_7b58_7b12,
    0xb23b_a5c2_79c2_895f,
    0x258d_d3db_21a5_d66b,
    0x0d00_88f5_1cbf_f34d,
];

/// Number of bytes needed to represent field element
const ELEMENT_BYTES: usize = 48;

/// Mask applied to the most significant byte of a random sample to clear bits above the
/// bit length of the modulus.
const TOP_BYTE_MASK: u8 =
    0xff >> (ELEMENT_BYTES as u32 * 8 - <BaseElement as PrimeField>::MODULUS_BITS);

// FIELD ELEMENT
// ================================================================================================

/// Represents base field element in the field using Montgomery representation.
///
/// Internal values represent x * R mod q where R = 2^384 mod q and x in [0, q). The backing
/// type is `[u64; 6]` in little-endian limb order.
#[derive(Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct BaseElement([u64; 6]);

/// The quadratic extension of the BLS12-381 base field.
pub type Fp2 = QuadExtension<BaseElement>;

impl BaseElement {
    /// Creates a new field element from the provided `value`; the value is converted into
    /// Montgomery representation.
    pub const fn new(value: u64) -> Self {
        Self([value, 0, 0, 0, 0, 0]).mul_mont(&R2)
    }

    /// Decodes a field element from its 48-byte big-endian canonical encoding.
    ///
    /// # Errors
    /// Returns an error if `bytes` is not exactly 48 bytes long or if the encoded value is not
    /// smaller than the field modulus.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, ElementDecodingError> {
        if bytes.len() < ELEMENT_BYTES {
            return Err(ElementDecodingError::NotEnoughBytes(ELEMENT_BYTES, bytes.len()));
        }
        if bytes.len() > ELEMENT_BYTES {
            return Err(ElementDecodingError::TooManyBytes(ELEMENT_BYTES, bytes.len()));
        }

        let mut limbs = [0u64; 6];
        for (i, chunk) in bytes.chunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[5 - i] = u64::from_be_bytes(word);
        }

        if !is_below_modulus(&limbs) {
            return Err(ElementDecodingError::ValueTooLarge(
                BigUint::from_bytes_be(bytes).to_string(),
            ));
        }

        Ok(Self(limbs).mul_mont(&R2))
    }

    /// Returns the 48-byte big-endian encoding of the canonical value of this element.
    pub fn to_bytes_be(&self) -> [u8; ELEMENT_BYTES] {
        let limbs = self.canonical_limbs();
        let mut result = [0u8; ELEMENT_BYTES];
        for (i, chunk) in result.chunks_exact_mut(8).enumerate() {
            chunk.copy_from_slice(&limbs[5 - i].to_be_bytes());
        }
        result
    }

    /// Exponentiates this element by a little-endian limb exponent. The running time depends
    /// on the exponent, so it must only be used with public exponents.
    pub fn pow_vartime(&self, power: &[u64; 6]) -> Self {
        let mut result = Self::ONE;
        for limb in power.iter().rev() {
            for i in (0..64).rev() {
                result = result.square_mont();
                if (limb >> i) & 1 == 1 {
                    result = result.mul_mont(self);
                }
            }
        }
        result
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    /// Returns the limbs of the canonical (non-Montgomery) value of this element.
    #[inline]
    const fn canonical_limbs(&self) -> [u64; 6] {
        let l = self.0;
        Self::montgomery_reduce([l[0], l[1], l[2], l[3], l[4], l[5], 0, 0, 0, 0, 0, 0]).0
    }

    /// Subtracts the modulus once if the value is not already reduced.
    #[inline]
    const fn subtract_p(&self) -> Self {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);
        let (r4, borrow) = sbb(self.0[4], MODULUS[4], borrow);
        let (r5, borrow) = sbb(self.0[5], MODULUS[5], borrow);

        // borrow is all ones when the value was already below the modulus
        Self([
            (self.0[0] & borrow) | (r0 & !borrow),
            (self.0[1] & borrow) | (r1 & !borrow),
            (self.0[2] & borrow) | (r2 & !borrow),
            (self.0[3] & borrow) | (r3 & !borrow),
            (self.0[4] & borrow) | (r4 & !borrow),
            (self.0[5] & borrow) | (r5 & !borrow),
        ])
    }

    #[inline]
    const fn add_mod(&self, rhs: &Self) -> Self {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, carry) = adc(self.0[3], rhs.0[3], carry);
        let (d4, carry) = adc(self.0[4], rhs.0[4], carry);
        let (d5, _) = adc(self.0[5], rhs.0[5], carry);

        Self([d0, d1, d2, d3, d4, d5]).subtract_p()
    }

    #[inline]
    const fn neg_mod(&self) -> Self {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, borrow) = sbb(MODULUS[3], self.0[3], borrow);
        let (d4, borrow) = sbb(MODULUS[4], self.0[4], borrow);
        let (d5, _) = sbb(MODULUS[5], self.0[5], borrow);

        // zero must map to zero rather than to the modulus
        let is_nonzero = (self.0[0] | self.0[1] | self.0[2] | self.0[3] | self.0[4] | self.0[5]) != 0;
        let mask = 0u64.wrapping_sub(is_nonzero as u64);

        Self([d0 & mask, d1 & mask, d2 & mask, d3 & mask, d4 & mask, d5 & mask])
    }

    #[inline]
    const fn sub_mod(&self, rhs: &Self) -> Self {
        rhs.neg_mod().add_mod(self)
    }

    #[inline]
    const fn mul_mont(&self, rhs: &Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;

        let (t0, carry) = mac(0, a[0], b[0], 0);
        let (t1, carry) = mac(0, a[0], b[1], carry);
        let (t2, carry) = mac(0, a[0], b[2], carry);
        let (t3, carry) = mac(0, a[0], b[3], carry);
        let (t4, carry) = mac(0, a[0], b[4], carry);
        let (t5, t6) = mac(0, a[0], b[5], carry);

        let (t1, carry) = mac(t1, a[1], b[0], 0);
        let (t2, carry) = mac(t2, a[1], b[1], carry);
        let (t3, carry) = mac(t3, a[1], b[2], carry);
        let (t4, carry) = mac(t4, a[1], b[3], carry);
        let (t5, carry) = mac(t5, a[1], b[4], carry);
        let (t6, t7) = mac(t6, a[1], b[5], carry);

        let (t2, carry) = mac(t2, a[2], b[0], 0);
        let (t3, carry) = mac(t3, a[2], b[1], carry);
        let (t4, carry) = mac(t4, a[2], b[2], carry);
        let (t5, carry) = mac(t5, a[2], b[3], carry);
        let (t6, carry) = mac(t6, a[2], b[4], carry);
        let (t7, t8) = mac(t7, a[2], b[5], carry);

        let (t3, carry) = mac(t3, a[3], b[0], 0);
        let (t4, carry) = mac(t4, a[3], b[1], carry);
        let (t5, carry) = mac(t5, a[3], b[2], carry);
        let (t6, carry) = mac(t6, a[3], b[3], carry);
        let (t7, carry) = mac(t7, a[3], b[4], carry);
        let (t8, t9) = mac(t8, a[3], b[5], carry);

        let (t4, carry) = mac(t4, a[4], b[0], 0);
        let (t5, carry) = mac(t5, a[4], b[1], carry);
        let (t6, carry) = mac(t6, a[4], b[2], carry);
        let (t7, carry) = mac(t7, a[4], b[3], carry);
        let (t8, carry) = mac(t8, a[4], b[4], carry);
        let (t9, t10) = mac(t9, a[4], b[5], carry);

        let (t5, carry) = mac(t5, a[5], b[0], 0);
        let (t6, carry) = mac(t6, a[5], b[1], carry);
        let (t7, carry) = mac(t7, a[5], b[2], carry);
        let (t8, carry) = mac(t8, a[5], b[3], carry);
        let (t9, carry) = mac(t9, a[5], b[4], carry);
        let (t10, t11) = mac(t10, a[5], b[5], carry);

        Self::montgomery_reduce([t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
    }

    #[inline]
    const fn square_mont(&self) -> Self {
        let a = &self.0;

        // off-diagonal products
        let (t1, carry) = mac(0, a[0], a[1], 0);
        let (t2, carry) = mac(0, a[0], a[2], carry);
        let (t3, carry) = mac(0, a[0], a[3], carry);
        let (t4, carry) = mac(0, a[0], a[4], carry);
        let (t5, t6) = mac(0, a[0], a[5], carry);

        let (t3, carry) = mac(t3, a[1], a[2], 0);
        let (t4, carry) = mac(t4, a[1], a[3], carry);
        let (t5, carry) = mac(t5, a[1], a[4], carry);
        let (t6, t7) = mac(t6, a[1], a[5], carry);

        let (t5, carry) = mac(t5, a[2], a[3], 0);
        let (t6, carry) = mac(t6, a[2], a[4], carry);
        let (t7, t8) = mac(t7, a[2], a[5], carry);

        let (t7, carry) = mac(t7, a[3], a[4], 0);
        let (t8, t9) = mac(t8, a[3], a[5], carry);

        let (t9, t10) = mac(t9, a[4], a[5], 0);

        // double them
        let t11 = t10 >> 63;
        let t10 = (t10 << 1) | (t9 >> 63);
        let t9 = (t9 << 1) | (t8 >> 63);
        let t8 = (t8 << 1) | (t7 >> 63);
        let t7 = (t7 << 1) | (t6 >> 63);
        let t6 = (t6 << 1) | (t5 >> 63);
        let t5 = (t5 << 1) | (t4 >> 63);
        let t4 = (t4 << 1) | (t3 >> 63);
        let t3 = (t3 << 1) | (t2 >> 63);
        let t2 = (t2 << 1) | (t1 >> 63);
        let t1 = t1 << 1;

        // add the diagonal
        let (t0, carry) = mac(0, a[0], a[0], 0);
        let (t1, carry) = adc(t1, 0, carry);
        let (t2, carry) = mac(t2, a[1], a[1], carry);
        let (t3, carry) = adc(t3, 0, carry);
        let (t4, carry) = mac(t4, a[2], a[2], carry);
        let (t5, carry) = adc(t5, 0, carry);
        let (t6, carry) = mac(t6, a[3], a[3], carry);
        let (t7, carry) = adc(t7, 0, carry);
        let (t8, carry) = mac(t8, a[4], a[4], carry);
        let (t9, carry) = adc(t9, 0, carry);
        let (t10, carry) = mac(t10, a[5], a[5], carry);
        let (t11, _) = adc(t11, 0, carry);

        Self::montgomery_reduce([t0, t1, t2, t3, t4, t5, t6, t7, t8, t9, t10, t11])
    }

    /// Montgomery reduction of a 768-bit value; the input must be smaller than q * 2^384.
    #[inline(always)]
    const fn montgomery_reduce(t: [u64; 12]) -> Self {
        let k = t[0].wrapping_mul(INV);
        let (_, carry) = mac(t[0], k, MODULUS[0], 0);
        let (r1, carry) = mac(t[1], k, MODULUS[1], carry);
        let (r2, carry) = mac(t[2], k, MODULUS[2], carry);
        let (r3, carry) = mac(t[3], k, MODULUS[3], carry);
        let (r4, carry) = mac(t[4], k, MODULUS[4], carry);
        let (r5, carry) = mac(t[5], k, MODULUS[5], carry);
        let (r6, r7) = adc(t[6], 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry) = mac(r5, k, MODULUS[4], carry);
        let (r6, carry) = mac(r6, k, MODULUS[5], carry);
        let (r7, r8) = adc(t[7], r7, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry) = mac(r6, k, MODULUS[4], carry);
        let (r7, carry) = mac(r7, k, MODULUS[5], carry);
        let (r8, r9) = adc(t[8], r8, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, carry) = mac(r7, k, MODULUS[4], carry);
        let (r8, carry) = mac(r8, k, MODULUS[5], carry);
        let (r9, r10) = adc(t[9], r9, carry);

        let k = r4.wrapping_mul(INV);
        let (_, carry) = mac(r4, k, MODULUS[0], 0);
        let (r5, carry) = mac(r5, k, MODULUS[1], carry);
        let (r6, carry) = mac(r6, k, MODULUS[2], carry);
        let (r7, carry) = mac(r7, k, MODULUS[3], carry);
        let (r8, carry) = mac(r8, k, MODULUS[4], carry);
        let (r9, carry) = mac(r9, k, MODULUS[5], carry);
        let (r10, r11) = adc(t[10], r10, carry);

        let k = r5.wrapping_mul(INV);
        let (_, carry) = mac(r5, k, MODULUS[0], 0);
        let (r6, carry) = mac(r6, k, MODULUS[1], carry);
        let (r7, carry) = mac(r7, k, MODULUS[2], carry);
        let (r8, carry) = mac(r8, k, MODULUS[3], carry);
        let (r9, carry) = mac(r9, k, MODULUS[4], carry);
        let (r10, carry) = mac(r10, k, MODULUS[5], carry);
        let (r11, _) = adc(t[11], r11, carry);

        Self([r6, r7, r8, r9, r10, r11]).subtract_p()
    }
}

impl FieldElement for BaseElement {
    type BaseField = Self;

    const ZERO: Self = Self([0, 0, 0, 0, 0, 0]);
    const ONE: Self = R;

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    #[inline]
    fn double(self) -> Self {
        self.add_mod(&self)
    }

    #[inline]
    fn square(self) -> Self {
        self.square_mont()
    }

    /// Computes the inverse as x^(q - 2); ZERO is mapped to ZERO.
    #[inline]
    fn inv(self) -> Self {
        self.pow_vartime(&Q_MINUS_TWO)
    }

    fn conjugate(&self) -> Self {
        *self
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Samples a uniformly random element by rejection sampling 381-bit strings.
    fn try_random<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self, FieldError> {
        let mut bytes = [0u8; ELEMENT_BYTES];
        loop {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|err| FieldError::RandomSource(err.to_string()))?;
            bytes[0] &= TOP_BYTE_MASK;
            if let Ok(element) = Self::from_bytes_be(&bytes) {
                return Ok(element);
            }
        }
    }
}

impl PrimeField for BaseElement {
    const MODULUS_BITS: u32 = 381;

    fn modulus() -> &'static BigUint {
        static MODULUS_INT: OnceLock<BigUint> = OnceLock::new();
        MODULUS_INT.get_or_init(|| limbs_to_biguint(&MODULUS))
    }

    /// Adds the modulus to odd values so that the division by two is exact.
    #[inline]
    fn halve(self) -> Self {
        let mask = 0u64.wrapping_sub(self.0[0] & 1);
        let (d0, carry) = adc(self.0[0], MODULUS[0] & mask, 0);
        let (d1, carry) = adc(self.0[1], MODULUS[1] & mask, carry);
        let (d2, carry) = adc(self.0[2], MODULUS[2] & mask, carry);
        let (d3, carry) = adc(self.0[3], MODULUS[3] & mask, carry);
        let (d4, carry) = adc(self.0[4], MODULUS[4] & mask, carry);
        let (d5, carry) = adc(self.0[5], MODULUS[5] & mask, carry);

        Self([
            (d0 >> 1) | (d1 << 63),
            (d1 >> 1) | (d2 << 63),
            (d2 >> 1) | (d3 << 63),
            (d3 >> 1) | (d4 << 63),
            (d4 >> 1) | (d5 << 63),
            (d5 >> 1) | (carry << 63),
        ])
    }

    fn legendre(&self) -> i8 {
        let symbol = self.pow_vartime(&Q_MINUS_ONE_DIV_TWO);
        if symbol.is_zero() {
            0
        } else if symbol == Self::ONE {
            1
        } else {
            -1
        }
    }

    /// Returns true if the canonical value of this element is greater than (q - 1) / 2.
    fn lexicographically_largest(&self) -> bool {
        let limbs = self.canonical_limbs();

        // subtract (q - 1) / 2 + 1; no borrow means the value is at least that large
        let (_, borrow) = sbb(limbs[0], 0xdcff_7fff_ffff_d556, 0);
        let (_, borrow) = sbb(limbs[1], 0x0f55_ffff_58a9_ffff, borrow);
        let (_, borrow) = sbb(limbs[2], 0xb398_6950_7b58_7b12, borrow);
        let (_, borrow) = sbb(limbs[3], 0xb23b_a5c2_79c2_895f, borrow);
        let (_, borrow) = sbb(limbs[4], 0x258d_d3db_21a5_d66b, borrow);
        let (_, borrow) = sbb(limbs[5], 0x0d00_88f5_1cbf_f34d, borrow);

        borrow == 0
    }

    fn to_biguint(&self) -> BigUint {
        limbs_to_biguint(&self.canonical_limbs())
    }

    fn from_biguint(value: &BigUint) -> Self {
        let reduced = value % Self::modulus();
        let mut limbs = [0u64; 6];
        for (i, byte) in reduced.to_bytes_le().into_iter().enumerate() {
            limbs[i / 8] |= (byte as u64) << (8 * (i % 8));
        }
        Self(limbs).mul_mont(&R2)
    }
}

impl Debug for BaseElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

impl Display for BaseElement {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

// QUADRATIC EXTENSION
// ================================================================================================

/// Defines a quadratic extension of the base field over the irreducible polynomial u<sup>2</sup>
/// + 1. Thus, an extension element is defined as α + β * u, where u<sup>2</sup> = -1, and α and β
/// are base field elements.
impl ExtensibleField<2> for BaseElement {
    #[inline(always)]
    fn mul(a: [Self; 2], b: [Self; 2]) -> [Self; 2] {
        // Karatsuba: 3 multiplications in the base field instead of 4
        let a0b0 = a[0] * b[0];
        let a1b1 = a[1] * b[1];
        [a0b0 - a1b1, (a[0] + a[1]) * (b[0] + b[1]) - a0b0 - a1b1]
    }

    #[inline(always)]
    fn square(a: [Self; 2]) -> [Self; 2] {
        // (a0 + a1 * u)^2 = (a0 + a1) * (a0 - a1) + 2 * a0 * a1 * u
        [(a[0] + a[1]) * (a[0] - a[1]), (a[0] * a[1]).double()]
    }

    #[inline(always)]
    fn norm(x: [Self; 2]) -> Self {
        x[0].square() + x[1].square()
    }
}

impl ComplexExtensibleField for BaseElement {
    fn sqrt_exponents() -> &'static SqrtExponents {
        static SQRT_EXPONENTS: OnceLock<SqrtExponents> = OnceLock::new();
        SQRT_EXPONENTS.get_or_init(|| SqrtExponents::from_modulus(Self::modulus()))
    }
}

impl QuadExtension<BaseElement> {
    /// Multiplies this element by the non-residue ξ = 1 + u used to build the sextic extension
    /// on top of this field.
    #[inline]
    pub fn mul_by_nonresidue(self) -> Self {
        let [a0, a1] = self.to_base_elements();
        Self::new(a0 - a1, a0 + a1)
    }

    /// Multiplies this element by ξ<sup>-1</sup> = (1 - u) / 2.
    #[inline]
    pub fn mul_by_nonresidue_inv(self) -> Self {
        let [a0, a1] = self.to_base_elements();
        Self::new((a0 + a1).halve(), (a1 - a0).halve())
    }
}

// EQUALITY CHECKS AND SELECTION
// ================================================================================================

impl ConstantTimeEq for BaseElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
            & self.0[4].ct_eq(&other.0[4])
            & self.0[5].ct_eq(&other.0[5])
    }
}

impl PartialEq for BaseElement {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for BaseElement {}

impl ConditionallySelectable for BaseElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
            u64::conditional_select(&a.0[4], &b.0[4], choice),
            u64::conditional_select(&a.0[5], &b.0[5], choice),
        ])
    }
}

// ORDERING
// ================================================================================================

/// Elements are ordered by their canonical integer values.
impl Ord for BaseElement {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.canonical_limbs();
        let rhs = other.canonical_limbs();
        lhs.iter().rev().cmp(rhs.iter().rev())
    }
}

impl PartialOrd for BaseElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// OVERLOADED OPERATORS
// ================================================================================================

impl Add for BaseElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.add_mod(&rhs)
    }
}

impl AddAssign for BaseElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl Sub for BaseElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.sub_mod(&rhs)
    }
}

impl SubAssign for BaseElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for BaseElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mont(&rhs)
    }
}

impl MulAssign for BaseElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl Neg for BaseElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.neg_mod()
    }
}

// TYPE CONVERSIONS
// ================================================================================================

impl From<u8> for BaseElement {
    fn from(value: u8) -> Self {
        Self::new(value.into())
    }
}

impl From<u16> for BaseElement {
    fn from(value: u16) -> Self {
        Self::new(value.into())
    }
}

impl From<u32> for BaseElement {
    fn from(value: u32) -> Self {
        Self::new(value.into())
    }
}

impl From<u64> for BaseElement {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Parses an integer literal with an optional `+` or `-` sign. The base is taken from the
/// prefix: `0x` or `0X` selects 16, `0b` or `0B` selects 2, `0o` or `0O` selects 8, and a bare
/// leading `0` followed by more digits also selects 8; anything else is decimal. Underscore
/// separators are not accepted. Values outside of [0, q) are reduced modulo q.
impl FromStr for BaseElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FieldError::InvalidLiteral(s.to_string());

        let (negative, unsigned) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (radix, digits) = match unsigned.as_bytes() {
            [b'0', b'x' | b'X', ..] => (16, &unsigned[2..]),
            [b'0', b'b' | b'B', ..] => (2, &unsigned[2..]),
            [b'0', b'o' | b'O', ..] => (8, &unsigned[2..]),
            [b'0', _, ..] => (8, &unsigned[1..]),
            _ => (10, unsigned),
        };

        // from_str_radix tolerates a leading sign and underscores; neither is valid here
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(invalid());
        }

        let value = BigUint::from_str_radix(digits, radix).map_err(|_| invalid())?;
        let element = Self::from_biguint(&value);

        Ok(if negative { -element } else { element })
    }
}

impl TryFrom<String> for BaseElement {
    type Error = FieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BaseElement> for String {
    fn from(value: BaseElement) -> Self {
        value.to_string()
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Compute a + b + carry, returning (result, carry)
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + (b as u128) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a - (b + borrow), returning (result, borrow); the borrow is all ones or zero.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let ret = (a as u128).wrapping_sub((b as u128) + ((borrow >> 63) as u128));
    (ret as u64, (ret >> 64) as u64)
}

/// Compute a + (b * c) + carry, returning (result, carry)
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let ret = (a as u128) + ((b as u128) * (c as u128)) + (carry as u128);
    (ret as u64, (ret >> 64) as u64)
}

/// Returns true if the little-endian limbs encode a value smaller than the modulus.
fn is_below_modulus(limbs: &[u64; 6]) -> bool {
    let (_, borrow) = sbb(limbs[0], MODULUS[0], 0);
    let (_, borrow) = sbb(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = sbb(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = sbb(limbs[3], MODULUS[3], borrow);
    let (_, borrow) = sbb(limbs[4], MODULUS[4], borrow);
    let (_, borrow) = sbb(limbs[5], MODULUS[5], borrow);
    borrow != 0
}

fn limbs_to_biguint(limbs: &[u64; 6]) -> BigUint {
    let bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}
