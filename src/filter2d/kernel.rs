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
use crate::filter1d::Kernel1d;
use crate::{FilterError, MismatchedSize};
use num_traits::Zero;
use std::ops::{Div, Mul};

/// A square 2D filtering kernel stored row-major, with a 2D anchor.
///
/// The anchor `(anchor_x, anchor_y)` is the weight aligned with the
/// destination pixel being computed.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2d<F> {
    weights: Vec<F>,
    size: usize,
    anchor_x: usize,
    anchor_y: usize,
}

impl<F: Copy> Kernel2d<F> {
    /// Creates a kernel from `size * size` row-major weights and an explicit
    /// anchor.
    pub fn new(
        weights: Vec<F>,
        size: usize,
        anchor_x: usize,
        anchor_y: usize,
    ) -> Result<Kernel2d<F>, FilterError> {
        if size == 0 {
            return Err(FilterError::ZeroKernelSize);
        }
        if weights.len() != size * size {
            return Err(FilterError::KernelSizeMismatch(MismatchedSize {
                expected: size * size,
                received: weights.len(),
            }));
        }
        if anchor_x >= size || anchor_y >= size {
            return Err(FilterError::AnchorOutOfBounds(MismatchedSize {
                expected: size,
                received: anchor_x.max(anchor_y),
            }));
        }
        Ok(Kernel2d {
            weights,
            size,
            anchor_x,
            anchor_y,
        })
    }

    /// Creates a kernel anchored at its center, `(size / 2, size / 2)`.
    pub fn centered(weights: Vec<F>, size: usize) -> Result<Kernel2d<F>, FilterError> {
        let anchor = size / 2;
        Kernel2d::new(weights, size, anchor, anchor)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn anchor_x(&self) -> usize {
        self.anchor_x
    }

    #[inline]
    pub fn anchor_y(&self) -> usize {
        self.anchor_y
    }

    #[inline]
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// One kernel row, `size` weights.
    #[inline]
    pub fn row(&self, ky: usize) -> &[F] {
        &self.weights[ky * self.size..(ky + 1) * self.size]
    }

    /// Columns to the left of the anchor.
    #[inline]
    pub fn left_size(&self) -> usize {
        self.anchor_x
    }

    /// Columns to the right of the anchor.
    #[inline]
    pub fn right_size(&self) -> usize {
        self.size - 1 - self.anchor_x
    }

    /// Rows above the anchor.
    #[inline]
    pub fn upper_size(&self) -> usize {
        self.anchor_y
    }

    /// Rows below the anchor.
    #[inline]
    pub fn lower_size(&self) -> usize {
        self.size - 1 - self.anchor_y
    }

    /// The kernel reversed along both axes with a mirrored anchor, so that
    /// convolution equals correlation with the reversed kernel.
    pub fn reversed(&self) -> Kernel2d<F> {
        Kernel2d {
            weights: self.weights.iter().rev().copied().collect(),
            size: self.size,
            anchor_x: self.right_size(),
            anchor_y: self.lower_size(),
        }
    }
}

impl<F> Kernel2d<F>
where
    F: Copy + PartialEq + Zero + Div<Output = F> + Mul<Output = F>,
{
    /// Splits a rank-1 kernel into a horizontal and a vertical 1D kernel
    /// such that `weights[ky][kx] == vertical[ky] * horizontal[kx]`.
    ///
    /// Detection uses exact weight equality, so only kernels whose rows are
    /// literal multiples of one another factor; anything else, including an
    /// all-zero kernel, returns `None` and runs through the general engine.
    pub fn factor(&self) -> Option<(Kernel1d<F>, Kernel1d<F>)> {
        let base_ky = (0..self.size).find(|&ky| self.row(ky).iter().any(|w| *w != F::zero()))?;
        let base = self.row(base_ky);
        let pivot = base.iter().position(|w| *w != F::zero())?;

        let mut scales = Vec::with_capacity(self.size);
        for ky in 0..self.size {
            let row = self.row(ky);
            let scale = row[pivot] / base[pivot];
            for (w, b) in row.iter().zip(base.iter()) {
                if *w != scale * *b {
                    return None;
                }
            }
            scales.push(scale);
        }

        let horizontal = Kernel1d::new(base.to_vec(), self.anchor_x).ok()?;
        let vertical = Kernel1d::new(scales, self.anchor_y).ok()?;
        Some((horizontal, vertical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_bad_shapes() {
        assert!(Kernel2d::<f32>::new(vec![], 0, 0, 0).is_err());
        assert!(Kernel2d::new(vec![1.0f32; 8], 3, 1, 1).is_err());
        assert!(Kernel2d::new(vec![1.0f32; 9], 3, 3, 1).is_err());
    }

    #[test]
    fn gaussian_like_kernel_factors() {
        let weights = vec![1.0f32, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0];
        let kernel = Kernel2d::centered(weights, 3).unwrap();
        let (horizontal, vertical) = kernel.factor().unwrap();
        for ky in 0..3 {
            for kx in 0..3 {
                assert_eq!(
                    kernel.row(ky)[kx],
                    vertical.weights()[ky] * horizontal.weights()[kx]
                );
            }
        }
    }

    #[test]
    fn kernel_with_leading_zero_row_factors() {
        let weights = vec![0.0f32, 0.0, 0.0, 1.0, 2.0, 1.0, 2.0, 4.0, 2.0];
        let kernel = Kernel2d::centered(weights, 3).unwrap();
        let (horizontal, vertical) = kernel.factor().unwrap();
        assert_eq!(vertical.weights()[0], 0.0);
        assert_eq!(horizontal.weights(), &[1.0, 2.0, 1.0]);
    }

    #[test]
    fn laplacian_does_not_factor() {
        let weights = vec![0.0f32, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];
        let kernel = Kernel2d::centered(weights, 3).unwrap();
        assert!(kernel.factor().is_none());
    }

    #[test]
    fn all_zero_kernel_does_not_factor() {
        let kernel = Kernel2d::centered(vec![0.0f32; 9], 3).unwrap();
        assert!(kernel.factor().is_none());
    }

    #[test]
    fn reversed_mirrors_both_axes() {
        let weights: Vec<f32> = (0..9).map(|v| v as f32).collect();
        let kernel = Kernel2d::new(weights, 3, 0, 2).unwrap();
        let reversed = kernel.reversed();
        assert_eq!(reversed.row(0), &[8.0, 7.0, 6.0]);
        assert_eq!(reversed.row(2), &[2.0, 1.0, 0.0]);
        assert_eq!(reversed.anchor_x(), 2);
        assert_eq!(reversed.anchor_y(), 0);
    }
}
