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
use crate::filter2d::scan::KernelTap2d;
use crate::to_storage::ToStorage;
use num_traits::{AsPrimitive, MulAdd};
use std::ops::Mul;

/// Accumulates the sparse 2D taps for one output row out of a padded arena.
///
/// The arena margin equals the kernel reach, so for destination pixel `x` of
/// row `y` a tap `(kx, ky)` lives at arena position `(x + kx, y + ky)` with
/// no bounds handling left to do.
pub(crate) fn filter_window_2d<S, F, D, const CN: usize>(
    arena: &[S],
    arena_stride: usize,
    dst_row: &mut [D],
    y: usize,
    taps: &[KernelTap2d<F>],
) where
    S: Copy + AsPrimitive<F>,
    F: Copy + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<D> + 'static,
    D: Copy + 'static,
{
    let rows: Vec<&[S]> = taps
        .iter()
        .map(|t| &arena[(y + t.ky) * arena_stride + t.kx * CN..])
        .collect();
    let w0 = taps[0].weight;
    let first = rows[0];
    for (i, d) in dst_row.iter_mut().enumerate() {
        let mut k = first[i].as_().mul(w0);
        for (row, t) in rows.iter().zip(taps.iter()).skip(1) {
            k = MulAdd::mul_add(row[i].as_(), t.weight, k);
        }
        *d = k.to_();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_taps_at_their_offsets() {
        // 4x3 arena, one destination row of two pixels with a full 3x3 window.
        let arena: Vec<f32> = (0..12).map(|v| v as f32).collect();
        let taps = vec![
            KernelTap2d {
                kx: 0,
                ky: 0,
                weight: 1.0f32,
            },
            KernelTap2d {
                kx: 2,
                ky: 2,
                weight: 1.0f32,
            },
        ];
        let mut dst = [0.0f32; 2];
        filter_window_2d::<f32, f32, f32, 1>(&arena, 4, &mut dst, 0, &taps);
        assert_eq!(dst, [10.0, 12.0]);
    }
}
