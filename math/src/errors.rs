// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Errors returned by fallible field operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid field element literal: '{0}'")]
    InvalidLiteral(String),

    #[error("random source failed: {0}")]
    RandomSource(String),

    #[error("zero element is not invertible")]
    NotInvertible,
}

/// Errors returned when decoding a base field element from bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementDecodingError {
    #[error("not enough bytes for a full field element; expected {0} bytes, but was {1} bytes")]
    NotEnoughBytes(usize, usize),

    #[error("too many bytes for a field element; expected {0} bytes, but was {1} bytes")]
    TooManyBytes(usize, usize),

    #[error("invalid field element: value {0} is greater than or equal to the field modulus")]
    ValueTooLarge(String),
}
