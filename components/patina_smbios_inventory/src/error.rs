//! SMBIOS decode errors.
//!
//! ## License
//!
//! Copyright (C) Microsoft Corporation. All rights reserved.
//!
//! SPDX-License-Identifier: BSD-2-Clause-Patent
//!

use core::fmt;

use r_efi::efi;

use crate::structure::SmbiosType;

/// Reasons a single structure could not be decoded.
///
/// Unknown enumerated codes and absent strings are not errors; they resolve to fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmbiosDecodeError {
    /// No structure was supplied to the decoder.
    MissingInput,
    /// The structure type does not match the decoder that was invoked.
    TypeMismatch { expected: SmbiosType, found: SmbiosType },
    /// A required field at `offset` (structure offset, header included) lies beyond the formatted area.
    Truncated { offset: usize, width: usize, length: usize },
}

impl fmt::Display for SmbiosDecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmbiosDecodeError::MissingInput => write!(f, "no structure supplied"),
            SmbiosDecodeError::TypeMismatch { expected, found } => {
                write!(f, "expected structure type {expected}, found type {found}")
            }
            SmbiosDecodeError::Truncated { offset, width, length } => {
                write!(f, "{width} byte field at offset {offset:#04x} exceeds structure length {length}")
            }
        }
    }
}

impl From<SmbiosDecodeError> for efi::Status {
    fn from(value: SmbiosDecodeError) -> Self {
        match value {
            SmbiosDecodeError::MissingInput => efi::Status::INVALID_PARAMETER,
            SmbiosDecodeError::TypeMismatch { .. } => efi::Status::UNSUPPORTED,
            SmbiosDecodeError::Truncated { .. } => efi::Status::VOLUME_CORRUPTED,
        }
    }
}
