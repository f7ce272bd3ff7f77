// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::{
    bls12_381::{BaseElement, Fp2},
    rand_value, FieldElement,
};

// MATH FUNCTIONS
// ================================================================================================

#[test]
fn batch_inversion() {
    let values = [Fp2::from(2u8), Fp2::ZERO, Fp2::from(3u8)];
    let expected = vec![Fp2::from(2u8).inv(), Fp2::ZERO, Fp2::from(3u8).inv()];
    assert_eq!(expected, super::batch_inversion(&values));
}

#[test]
fn batch_inversion_empty() {
    assert!(super::batch_inversion::<Fp2>(&[]).is_empty());
}

#[test]
fn batch_inversion_all_zeros() {
    let values = vec![BaseElement::ZERO; 5];
    assert_eq!(values, super::batch_inversion(&values));
}

#[test]
fn batch_inversion_random() {
    // big enough for concurrent inversion
    let n = 1024 * 2;
    let mut values: Vec<Fp2> = (0..n).map(|_| rand_value()).collect();
    for i in (0..n).step_by(7) {
        values[i] = Fp2::ZERO;
    }

    let result = super::batch_inversion(&values);
    assert_eq!(values.len(), result.len());
    for (value, inverse) in values.iter().zip(result.iter()) {
        if value.is_zero() {
            assert_eq!(Fp2::ZERO, *inverse);
        } else {
            assert_eq!(Fp2::ONE, *value * *inverse);
        }
    }
}
