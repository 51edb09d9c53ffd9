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
use crate::to_storage::ToStorage;
use num_traits::{AsPrimitive, MulAdd};
use std::ops::Mul;

/// Runs a 1D kernel horizontally over one prepared row window.
///
/// Destination pixel `x` reads `window[x * CN..(x + taps) * CN]`; the caller
/// positions the window so that index 0 is the leftmost tap of the first
/// destination pixel.
pub(crate) fn filter_row_window<S, F, D, const CN: usize>(
    window: &[S],
    dst_row: &mut [D],
    weights: &[F],
) where
    S: Copy + AsPrimitive<F>,
    F: Copy + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<D> + 'static,
    D: Copy + 'static,
{
    let w0 = weights[0];
    for (x, dst) in dst_row.chunks_exact_mut(CN).enumerate() {
        for (c, d) in dst.iter_mut().enumerate() {
            let mut k = window[x * CN + c].as_().mul(w0);
            for (i, &w) in weights.iter().enumerate().skip(1) {
                k = MulAdd::mul_add(window[(x + i) * CN + c].as_(), w, k);
            }
            *d = k.to_();
        }
    }
}

/// Single-weight kernel fast path: a per-channel scale of the whole row.
pub(crate) fn filter_scalar_row<S, F, D>(src_row: &[S], dst_row: &mut [D], weight: F)
where
    S: Copy + AsPrimitive<F>,
    F: Copy + Mul<Output = F> + ToStorage<D> + 'static,
    D: Copy + 'static,
{
    for (d, s) in dst_row.iter_mut().zip(src_row.iter()) {
        *d = s.as_().mul(weight).to_();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_inner_product() {
        let window = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        let mut dst = [0.0f32; 3];
        filter_row_window::<f32, f32, f32, 1>(&window, &mut dst, &[1.0, 0.0, -1.0]);
        assert_eq!(dst, [-2.0, -2.0, -2.0]);
    }

    #[test]
    fn window_respects_channels() {
        // Two pixels of two channels each, averaged with the next pixel.
        let window = [2.0f32, 10.0, 4.0, 20.0, 6.0, 30.0];
        let mut dst = [0.0f32; 4];
        filter_row_window::<f32, f32, f32, 2>(&window, &mut dst, &[0.5, 0.5]);
        assert_eq!(dst, [3.0, 15.0, 5.0, 25.0]);
    }

    #[test]
    fn scalar_row_scales() {
        let src = [1u8, 2, 3];
        let mut dst = [0u8; 3];
        filter_scalar_row(&src, &mut dst, 2.0f32);
        assert_eq!(dst, [2, 4, 6]);
    }
}
