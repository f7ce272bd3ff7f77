// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::field::FieldElement;

#[cfg(feature = "concurrent")]
use rayon::prelude::*;

#[cfg(test)]
mod tests;

// MATH FUNCTIONS
// ================================================================================================

/// Computes a multiplicative inverse of a sequence of elements using batch inversion method.
/// Any ZEROs in the provided sequence are ignored and map to ZEROs in the result.
///
/// Only one field inversion is performed for the whole sequence (or one per batch when
/// `concurrent` feature is enabled and the sequence is large enough to be split between
/// threads).
pub fn batch_inversion<E: FieldElement>(values: &[E]) -> Vec<E> {
    const MIN_CONCURRENT_SIZE: usize = 1024;
    if values.is_empty() {
        return Vec::new();
    }

    let _span = tracing::trace_span!("batch_inversion", num_values = values.len()).entered();
    let mut result = vec![E::ZERO; values.len()];
    if cfg!(feature = "concurrent") && values.len() >= MIN_CONCURRENT_SIZE {
        #[cfg(feature = "concurrent")]
        {
            let batch_size =
                (values.len() / rayon::current_num_threads().next_power_of_two()).max(1);
            result
                .par_chunks_mut(batch_size)
                .zip(values.par_chunks(batch_size))
                .for_each(|(result, values)| {
                    serial_batch_inversion(values, result);
                });
        }
    } else {
        serial_batch_inversion(values, &mut result);
    }

    result
}

// HELPER FUNCTIONS
// ------------------------------------------------------------------------------------------------

fn serial_batch_inversion<E: FieldElement>(values: &[E], result: &mut [E]) {
    // result[i] holds the product of all non-zero values before position i
    let mut last = E::ONE;
    for (result, &value) in result.iter_mut().zip(values.iter()) {
        *result = last;
        if !value.is_zero() {
            last *= value;
        }
    }

    last = last.inv();

    for (result, &value) in result.iter_mut().zip(values.iter()).rev() {
        if value.is_zero() {
            *result = E::ZERO;
        } else {
            *result *= last;
            last *= value;
        }
    }
}
