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
use crate::{FilterError, ImageSize, MismatchedSize};
use std::fmt::Debug;

/// Borrowed or owned destination storage.
#[derive(Debug)]
pub enum PixelStore<'a, T: Copy + Debug> {
    Borrowed(&'a mut [T]),
    Owned(Vec<T>),
}

impl<T: Copy + Debug> PixelStore<'_, T> {
    #[allow(clippy::should_implement_trait)]
    pub fn borrow(&self) -> &[T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn borrow_mut(&mut self) -> &mut [T] {
        match self {
            Self::Borrowed(p_ref) => p_ref,
            Self::Owned(vec) => vec,
        }
    }
}

/// Immutable image view.
///
/// Pixels are stored interleaved: a pixel at `(x, y)` occupies `channels`
/// consecutive items. A view never owns borrowed storage and may address a
/// sub-region of a larger image, see [FilterImage::sub_view]; the surrounding
/// margin stays reachable for [crate::BorderMode::ExtendPadded].
pub struct FilterImage<'a, T: Clone + Copy + Default + Debug> {
    pub data: std::borrow::Cow<'a, [T]>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0.
    pub stride: u32,
    pub channels: u32,
    origin_x: u32,
    origin_y: u32,
}

/// Mutable image store.
pub struct FilterImageMut<'a, T: Clone + Copy + Default + Debug> {
    pub data: PixelStore<'a, T>,
    pub width: u32,
    pub height: u32,
    /// Image stride, items per row, might be 0.
    pub stride: u32,
    pub channels: u32,
}

impl<'a, T: Clone + Copy + Default + Debug> FilterImage<'a, T> {
    /// Allocates a zeroed image with the default layout.
    pub fn alloc(width: u32, height: u32, channels: u32) -> Self {
        Self {
            data: std::borrow::Cow::Owned(vec![
                T::default();
                width as usize * height as usize * channels as usize
            ]),
            width,
            height,
            stride: width * channels,
            channels,
            origin_x: 0,
            origin_y: 0,
        }
    }

    /// Borrows existing data.
    /// Stride will be default `width * channels`.
    pub fn borrow(arr: &'a [T], width: u32, height: u32, channels: u32) -> Self {
        Self {
            data: std::borrow::Cow::Borrowed(arr),
            width,
            height,
            stride: width * channels,
            channels,
            origin_x: 0,
            origin_y: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Returns row stride.
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels
        } else {
            self.stride
        }
    }

    /// Re-addresses a rectangular region of this view.
    ///
    /// The returned view borrows the same storage; pixels outside the region
    /// remain reachable as padding margin.
    pub fn sub_view(
        &self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Result<FilterImage<'_, T>, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::ZeroBaseSize);
        }
        if x.checked_add(width).is_none_or(|right| right > self.width)
            || y.checked_add(height).is_none_or(|bottom| bottom > self.height)
        {
            return Err(FilterError::RegionOutOfBounds);
        }
        Ok(FilterImage {
            data: std::borrow::Cow::Borrowed(self.data.as_ref()),
            width,
            height,
            stride: self.row_stride(),
            channels: self.channels,
            origin_x: self.origin_x + x,
            origin_y: self.origin_y + y,
        })
    }

    /// Checks if layout matches necessary requirements by using external channels count.
    #[inline]
    pub fn check_layout_channels(&self, cn: usize) -> Result<(), FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::ZeroBaseSize);
        }
        if self.channels as usize != cn {
            return Err(FilterError::ChannelsMismatch(MismatchedSize {
                expected: cn,
                received: self.channels as usize,
            }));
        }
        let stride = self.row_stride() as usize;
        if stride < (self.origin_x as usize + self.width as usize) * cn {
            return Err(FilterError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: (self.origin_x as usize + self.width as usize) * cn,
                received: stride,
            }));
        }
        let required = (self.origin_y as usize + self.height as usize - 1) * stride
            + (self.origin_x as usize + self.width as usize) * cn;
        let data_len = self.data.as_ref().len();
        if data_len < required {
            return Err(FilterError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: required,
                received: data_len,
            }));
        }
        Ok(())
    }

    /// Checks if it matches the size of the other image.
    #[inline]
    pub fn size_matches_mut<D: Clone + Copy + Default + Debug>(
        &self,
        other: &FilterImageMut<'_, D>,
    ) -> Result<(), FilterError> {
        if self.width == other.width
            && self.height == other.height
            && self.channels == other.channels
        {
            return Ok(());
        }
        Err(FilterError::ImagesMustMatch)
    }

    /// Verifies that the parent storage carries the requested margin around
    /// this view, in pixels per side.
    pub(crate) fn check_padding(
        &self,
        left: usize,
        top: usize,
        right: usize,
        bottom: usize,
        cn: usize,
    ) -> Result<(), FilterError> {
        if (self.origin_x as usize) < left {
            return Err(FilterError::InsufficientPadding(MismatchedSize {
                expected: left,
                received: self.origin_x as usize,
            }));
        }
        if (self.origin_y as usize) < top {
            return Err(FilterError::InsufficientPadding(MismatchedSize {
                expected: top,
                received: self.origin_y as usize,
            }));
        }
        let stride = self.row_stride() as usize;
        let right_edge = (self.origin_x as usize + self.width as usize + right) * cn;
        if stride < right_edge {
            return Err(FilterError::InsufficientPadding(MismatchedSize {
                expected: right_edge,
                received: stride,
            }));
        }
        let required = (self.origin_y as usize + self.height as usize + bottom - 1) * stride
            + right_edge;
        let data_len = self.data.as_ref().len();
        if data_len < required {
            return Err(FilterError::InsufficientPadding(MismatchedSize {
                expected: required,
                received: data_len,
            }));
        }
        Ok(())
    }

    /// One full row of the view, `width * cn` items.
    #[inline]
    pub(crate) fn row(&self, y: usize, cn: usize) -> &[T] {
        let stride = self.row_stride() as usize;
        let start = (self.origin_y as usize + y) * stride + self.origin_x as usize * cn;
        &self.data.as_ref()[start..start + self.width as usize * cn]
    }

    /// A run of `len` items starting at the (possibly out-of-view) pixel
    /// `(x, y)` in view coordinates. Only valid once [Self::check_padding]
    /// admitted the access.
    #[inline]
    pub(crate) fn padded_slice(&self, x: i64, y: i64, len: usize, cn: usize) -> &[T] {
        let stride = self.row_stride() as i64;
        let start = (self.origin_y as i64 + y) * stride + (self.origin_x as i64 + x) * cn as i64;
        let start = start as usize;
        &self.data.as_ref()[start..start + len]
    }
}

impl<'a, T: Clone + Copy + Default + Debug> FilterImageMut<'a, T> {
    /// Allocates a zeroed image with the default layout.
    pub fn alloc(width: u32, height: u32, channels: u32) -> Self {
        Self {
            data: PixelStore::Owned(vec![
                T::default();
                width as usize * height as usize * channels as usize
            ]),
            width,
            height,
            stride: width * channels,
            channels,
        }
    }

    /// Mutably borrows existing data.
    /// Stride will be default `width * channels`.
    pub fn borrow(arr: &'a mut [T], width: u32, height: u32, channels: u32) -> Self {
        Self {
            data: PixelStore::Borrowed(arr),
            width,
            height,
            stride: width * channels,
            channels,
        }
    }

    #[inline]
    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.width as usize, self.height as usize)
    }

    /// Returns row stride.
    #[inline]
    pub fn row_stride(&self) -> u32 {
        if self.stride == 0 {
            self.width * self.channels
        } else {
            self.stride
        }
    }

    /// Checks if layout matches necessary requirements by using external channels count.
    ///
    /// The destination must cover whole stride rows so rows can be handed out
    /// as independent chunks.
    #[inline]
    pub fn check_layout_channels(&self, cn: usize) -> Result<(), FilterError> {
        if self.width == 0 || self.height == 0 {
            return Err(FilterError::ZeroBaseSize);
        }
        if self.channels as usize != cn {
            return Err(FilterError::ChannelsMismatch(MismatchedSize {
                expected: cn,
                received: self.channels as usize,
            }));
        }
        let stride = self.row_stride() as usize;
        if stride < self.width as usize * cn {
            return Err(FilterError::MinimumStrideSizeMismatch(MismatchedSize {
                expected: self.width as usize * cn,
                received: stride,
            }));
        }
        let required = stride * self.height as usize;
        let data_len = self.data.borrow().len();
        if data_len < required {
            return Err(FilterError::MinimumSliceSizeMismatch(MismatchedSize {
                expected: required,
                received: data_len,
            }));
        }
        Ok(())
    }

    #[inline]
    pub fn to_immutable_ref(&self) -> FilterImage<'_, T> {
        FilterImage {
            data: std::borrow::Cow::Borrowed(self.data.borrow()),
            width: self.width,
            height: self.height,
            stride: self.row_stride(),
            channels: self.channels,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_view_keeps_margin_reachable() {
        let data: Vec<u8> = (0..25).collect();
        let image = FilterImage::borrow(&data, 5, 5, 1);
        let inner = image.sub_view(1, 1, 3, 3).unwrap();
        assert_eq!(inner.row(0, 1), &[6, 7, 8]);
        assert!(inner.check_padding(1, 1, 1, 1, 1).is_ok());
        assert!(inner.check_padding(2, 0, 0, 0, 1).is_err());
        assert_eq!(inner.padded_slice(-1, -1, 3, 1), &[0, 1, 2]);
    }

    #[test]
    fn sub_view_rejects_out_of_bounds() {
        let data = vec![0u8; 16];
        let image = FilterImage::borrow(&data, 4, 4, 1);
        assert!(image.sub_view(2, 2, 3, 1).is_err());
        assert!(image.sub_view(0, 0, 0, 2).is_err());
    }

    #[test]
    fn layout_check_catches_short_slice() {
        let data = vec![0u8; 10];
        let image = FilterImage::borrow(&data, 4, 4, 1);
        assert!(image.check_layout_channels(1).is_err());
    }

    #[test]
    fn layout_check_catches_channel_mismatch() {
        let data = vec![0u8; 48];
        let image = FilterImage::borrow(&data, 4, 4, 3);
        assert!(image.check_layout_channels(1).is_err());
        assert!(image.check_layout_channels(3).is_ok());
    }
}
