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
use crate::{FilterError, MismatchedSize};

/// A 1D filtering kernel: an ordered sequence of weights with an anchor.
///
/// The anchor is the weight aligned with the destination pixel being
/// computed. Kernels are immutable; [Kernel1d::reversed] produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel1d<F> {
    weights: Vec<F>,
    anchor: usize,
}

impl<F: Copy> Kernel1d<F> {
    /// Creates a kernel from weights and an explicit anchor offset.
    ///
    /// Fails when `weights` is empty or `anchor >= weights.len()`.
    pub fn new(weights: Vec<F>, anchor: usize) -> Result<Kernel1d<F>, FilterError> {
        if weights.is_empty() {
            return Err(FilterError::ZeroKernelSize);
        }
        if anchor >= weights.len() {
            return Err(FilterError::AnchorOutOfBounds(MismatchedSize {
                expected: weights.len(),
                received: anchor,
            }));
        }
        Ok(Kernel1d { weights, anchor })
    }

    /// Creates a kernel anchored at its center, `len / 2`.
    pub fn centered(weights: Vec<F>) -> Result<Kernel1d<F>, FilterError> {
        let anchor = weights.len() / 2;
        Kernel1d::new(weights, anchor)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Number of weights to the left of the anchor.
    #[inline]
    pub fn left_size(&self) -> usize {
        self.anchor
    }

    /// Number of weights to the right of the anchor.
    #[inline]
    pub fn right_size(&self) -> usize {
        self.weights.len() - 1 - self.anchor
    }

    #[inline]
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// The kernel with reversed weights and the anchor relocated to
    /// `right_size()`, so that convolution equals correlation with the
    /// reversed kernel.
    pub fn reversed(&self) -> Kernel1d<F> {
        Kernel1d {
            weights: self.weights.iter().rev().copied().collect(),
            anchor: self.right_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_rejects_empty_weights() {
        assert!(Kernel1d::<f32>::new(vec![], 0).is_err());
    }

    #[test]
    fn construction_rejects_anchor_out_of_bounds() {
        assert!(Kernel1d::new(vec![1.0f32, 2.0], 2).is_err());
    }

    #[test]
    fn left_and_right_sizes() {
        let kernel = Kernel1d::new(vec![1.0f32, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(kernel.left_size(), 1);
        assert_eq!(kernel.right_size(), 2);
    }

    #[test]
    fn reversed_relocates_anchor() {
        let kernel = Kernel1d::new(vec![1.0f32, 2.0, 3.0], 0).unwrap();
        let reversed = kernel.reversed();
        assert_eq!(reversed.weights(), &[3.0, 2.0, 1.0]);
        assert_eq!(reversed.anchor(), 2);
    }

    #[test]
    fn reversed_twice_is_identity() {
        let kernel = Kernel1d::new(vec![1.0f32, -2.0, 3.0, 0.5], 1).unwrap();
        assert_eq!(kernel.reversed().reversed(), kernel);
    }
}
