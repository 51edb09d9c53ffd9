/*
 * Copyright (c) the imfilter developers. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::error::Error;

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq)]
/// Shows size mismatching.
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Caller errors detected before any destination pixel is written.
///
/// A filtering call either completes with a fully valid destination or
/// returns one of these; there is no partial completion.
#[derive(Copy, Clone, Debug)]
pub enum FilterError {
    ZeroBaseSize,
    MinimumSliceSizeMismatch(MismatchedSize),
    MinimumStrideSizeMismatch(MismatchedSize),
    ZeroKernelSize,
    AnchorOutOfBounds(MismatchedSize),
    KernelSizeMismatch(MismatchedSize),
    ImagesMustMatch,
    ChannelsMismatch(MismatchedSize),
    InsufficientPadding(MismatchedSize),
    RegionOutOfBounds,
    ExceedingPointerSize,
}

impl Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FilterError::ZeroBaseSize => f.write_str("Image size must not be zero"),
            FilterError::MinimumSliceSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum image slice size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            FilterError::MinimumStrideSizeMismatch(size) => f.write_fmt(format_args!(
                "Minimum stride must have size at least {} but it is {}",
                size.expected, size.received
            )),
            FilterError::ZeroKernelSize => f.write_str("Kernel must have at least one weight"),
            FilterError::AnchorOutOfBounds(size) => f.write_fmt(format_args!(
                "Kernel anchor must be less than {} but it is {}",
                size.expected, size.received
            )),
            FilterError::KernelSizeMismatch(size) => f.write_fmt(format_args!(
                "Kernel size mismatch: expected={}, received={}",
                size.expected, size.received
            )),
            FilterError::ImagesMustMatch => {
                f.write_str("Source and destination images must match in their dimensions")
            }
            FilterError::ChannelsMismatch(size) => f.write_fmt(format_args!(
                "Image declares {} channels but the call expects {}",
                size.received, size.expected
            )),
            FilterError::InsufficientPadding(size) => f.write_fmt(format_args!(
                "Padded border handling requires a margin of {} but only {} is available",
                size.expected, size.received
            )),
            FilterError::RegionOutOfBounds => {
                f.write_str("Requested region does not fit into the image")
            }
            FilterError::ExceedingPointerSize => {
                f.write_str("Image bounds and filtering kernel exceed pointer capacity")
            }
        }
    }
}
