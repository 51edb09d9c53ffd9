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
use crate::filter2d::Kernel2d;
use num_traits::Zero;

/// One nonzero kernel weight with its position inside the kernel grid.
#[derive(Copy, Clone, Debug)]
pub(crate) struct KernelTap2d<F> {
    pub kx: usize,
    pub ky: usize,
    pub weight: F,
}

/// Flattens a 2D kernel into its nonzero taps, row-major.
///
/// An all-zero kernel yields a single zero-weight tap at the anchor so the
/// accumulation loop never runs empty.
pub(crate) fn scan_kernel_2d<F>(kernel: &Kernel2d<F>) -> Vec<KernelTap2d<F>>
where
    F: Copy + PartialEq + Zero,
{
    let mut taps = Vec::with_capacity(kernel.size() * kernel.size());
    for ky in 0..kernel.size() {
        for (kx, &weight) in kernel.row(ky).iter().enumerate() {
            if weight != F::zero() {
                taps.push(KernelTap2d { kx, ky, weight });
            }
        }
    }
    if taps.is_empty() {
        taps.push(KernelTap2d {
            kx: kernel.left_size(),
            ky: kernel.upper_size(),
            weight: F::zero(),
        });
    }
    taps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_zero_weights() {
        let weights = vec![0.0f32, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];
        let kernel = Kernel2d::centered(weights, 3).unwrap();
        let taps = scan_kernel_2d(&kernel);
        assert_eq!(taps.len(), 5);
        assert_eq!(taps[0].kx, 1);
        assert_eq!(taps[0].ky, 0);
    }

    #[test]
    fn zero_kernel_keeps_one_anchor_tap() {
        let kernel = Kernel2d::centered(vec![0.0f32; 9], 3).unwrap();
        let taps = scan_kernel_2d(&kernel);
        assert_eq!(taps.len(), 1);
        assert_eq!(taps[0].kx, 1);
        assert_eq!(taps[0].ky, 1);
        assert_eq!(taps[0].weight, 0.0);
    }
}
