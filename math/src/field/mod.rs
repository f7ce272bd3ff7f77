// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

mod traits;
pub use traits::{FieldElement, PrimeField};

mod extensions;
pub use extensions::{ComplexExtensibleField, ExtensibleField, QuadExtension, SqrtExponents};

pub mod bls12_381;

/// Returns a random element drawn from the thread-local generator.
#[cfg(test)]
pub(crate) fn rand_value<E: FieldElement>() -> E {
    E::try_random(&mut rand::thread_rng()).expect("thread rng failed")
}
