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

/// Runs a 1D kernel vertically over one output row.
///
/// `brows` holds the `taps` source rows feeding this output row, topmost tap
/// first; every slice and `dst_row` carry the same number of items.
pub(crate) fn filter_column_window<S, F, D>(brows: &[&[S]], dst_row: &mut [D], weights: &[F])
where
    S: Copy + AsPrimitive<F>,
    F: Copy + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<D> + 'static,
    D: Copy + 'static,
{
    let w0 = weights[0];
    let first = brows[0];
    for (i, d) in dst_row.iter_mut().enumerate() {
        let mut k = first[i].as_().mul(w0);
        for (row, &w) in brows.iter().zip(weights.iter()).skip(1) {
            k = MulAdd::mul_add(row[i].as_(), w, k);
        }
        *d = k.to_();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_inner_product() {
        let r0 = [1.0f32, 10.0];
        let r1 = [2.0f32, 20.0];
        let r2 = [3.0f32, 30.0];
        let brows: Vec<&[f32]> = vec![&r0, &r1, &r2];
        let mut dst = [0.0f32; 2];
        filter_column_window(&brows, &mut dst, &[1.0f32, 1.0, 1.0]);
        assert_eq!(dst, [6.0, 60.0]);
    }

    #[test]
    fn stores_saturate() {
        let r0 = [200u8, 0];
        let r1 = [200u8, 0];
        let brows: Vec<&[u8]> = vec![&r0, &r1];
        let mut dst = [0u8; 2];
        filter_column_window(&brows, &mut dst, &[1.0f32, 1.0]);
        assert_eq!(dst, [255, 0]);
    }
}
