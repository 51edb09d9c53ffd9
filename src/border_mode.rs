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

/// Declares how the engines behave where the kernel support leaves the image.
///
/// The `Extend*` modes synthesize virtual pixels outside the source and compute
/// every destination pixel normally. The `Output*` modes never synthesize:
/// destination pixels whose kernel support is incomplete are copied from the
/// source or zeroed instead.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Default)]
pub enum BorderMode {
    /// Border output pixels are copied verbatim from the source.
    OutputIgnore,
    /// Border output pixels are set to the zero pixel.
    OutputZero,
    /// Virtual pixels are the zero pixel.
    ExtendZero,
    /// Virtual pixels replicate the nearest edge pixel (clamp to edge).
    #[default]
    ExtendConstant,
    /// Virtual pixels mirror across the edge pixel, rule `dcb|abcd|cba`.
    ExtendReflection,
    /// No synthesis: the source is a sub-view whose parent already contains
    /// the required margin, and virtual pixels are read from it directly.
    ExtendPadded,
}

impl BorderMode {
    /// True for the modes that synthesize (or read) pixels outside the view.
    #[inline]
    pub(crate) fn is_extending(self) -> bool {
        matches!(
            self,
            BorderMode::ExtendZero
                | BorderMode::ExtendConstant
                | BorderMode::ExtendReflection
                | BorderMode::ExtendPadded
        )
    }
}

/// Mirrors an out-of-range index across the edge pixel without duplicating it.
///
/// For `n = 4` the extension reads `dcb|abcd|cba`, so `-1 -> 1` and `n -> n-2`.
/// Valid for any `i` and any `n >= 1`.
#[inline]
pub(crate) fn reflect_index_101(i: isize, n: isize) -> usize {
    if n == 1 {
        return 0;
    }
    let period = 2 * (n - 1);
    let i = i.rem_euclid(period);
    if i < n {
        i as usize
    } else {
        (period - i) as usize
    }
}
