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
//! Spatial filtering of multi-channel images.
//!
//! The crate applies numeric kernels (blur, edge, derivative and morphological
//! structuring elements) to rectangular pixel grids. Both correlation and
//! convolution are provided for 1D row/column kernels and square 2D kernels,
//! with six boundary handling policies, see [BorderMode].
//!
//! All entry points are generic over the pixel element type `T`, the
//! accumulator type `F` and the channel count `CN`. Intermediate arithmetic is
//! always carried out in `F`, and the final store into `T` rounds and
//! saturates, so `u8` images may be filtered with `f32` precision without
//! overflow.
//!
//! 2D kernels are automatically tested for separability; a rank-1 kernel is
//! executed as two 1D passes through a full-precision intermediate image.
#![allow(clippy::too_many_arguments)]

mod border_mode;
mod error;
mod filter1d;
mod filter2d;
mod image;
mod img_size;
mod safe_math;
mod threading_policy;
mod to_storage;

pub use border_mode::BorderMode;
pub use error::{FilterError, MismatchedSize};
pub use filter1d::{
    convolve_cols, convolve_rows, correlate_cols, correlate_rows, Kernel1d,
};
pub use filter2d::{convolve_2d, correlate_2d, Kernel2d};
pub use image::{FilterImage, FilterImageMut, PixelStore};
pub use img_size::ImageSize;
pub use threading_policy::ThreadingPolicy;
pub use to_storage::ToStorage;
