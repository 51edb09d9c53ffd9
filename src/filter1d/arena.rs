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
use crate::border_mode::reflect_index_101;
use crate::image::FilterImage;
use crate::BorderMode;
use std::fmt::Debug;

/// Margin sizes around a view, in pixels per side.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ArenaPads {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl ArenaPads {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> ArenaPads {
        ArenaPads {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Fills `row` with one source row plus synthesized horizontal margins.
///
/// `row` must hold `(pad_left + width + pad_right) * CN` items. Only the
/// `Extend*` modes reach this function; the `Output*` modes never build a
/// margin.
pub(crate) fn write_row_window<T, const CN: usize>(
    row: &mut [T],
    image: &FilterImage<T>,
    source_y: usize,
    pad_left: usize,
    pad_right: usize,
    border_mode: BorderMode,
) where
    T: Copy + Default + Debug,
{
    debug_assert!(border_mode.is_extending());
    let width = image.width as usize;
    let source_row = image.row(source_y, CN);

    row[pad_left * CN..(pad_left + width) * CN].copy_from_slice(source_row);

    for (x, dst) in row[..pad_left * CN].chunks_exact_mut(CN).enumerate() {
        let vx = x as i64 - pad_left as i64;
        match border_mode {
            BorderMode::ExtendZero => dst.fill(T::default()),
            BorderMode::ExtendConstant => dst.copy_from_slice(&source_row[..CN]),
            BorderMode::ExtendReflection => {
                let ox = reflect_index_101(vx as isize, width as isize);
                dst.copy_from_slice(&source_row[ox * CN..(ox + 1) * CN]);
            }
            BorderMode::ExtendPadded => {
                dst.copy_from_slice(image.padded_slice(vx, source_y as i64, CN, CN));
            }
            BorderMode::OutputIgnore | BorderMode::OutputZero => dst.fill(T::default()),
        }
    }

    for (x, dst) in row[(pad_left + width) * CN..]
        .chunks_exact_mut(CN)
        .take(pad_right)
        .enumerate()
    {
        let vx = (width + x) as i64;
        match border_mode {
            BorderMode::ExtendZero => dst.fill(T::default()),
            BorderMode::ExtendConstant => {
                dst.copy_from_slice(&source_row[(width - 1) * CN..width * CN]);
            }
            BorderMode::ExtendReflection => {
                let ox = reflect_index_101(vx as isize, width as isize);
                dst.copy_from_slice(&source_row[ox * CN..(ox + 1) * CN]);
            }
            BorderMode::ExtendPadded => {
                dst.copy_from_slice(image.padded_slice(vx, source_y as i64, CN, CN));
            }
            BorderMode::OutputIgnore | BorderMode::OutputZero => dst.fill(T::default()),
        }
    }
}

/// Synthesized rows above and below the image for column filtering.
///
/// `top_pad` holds `pad_top` rows where row `i` is the virtual row
/// `i - pad_top`; `bottom_pad` holds `pad_bottom` rows where row `i` is the
/// virtual row `height + i`. Each row is `width * CN` items.
pub(crate) fn make_column_pads<T, const CN: usize>(
    image: &FilterImage<T>,
    pad_top: usize,
    pad_bottom: usize,
    border_mode: BorderMode,
) -> (Vec<T>, Vec<T>)
where
    T: Copy + Default + Debug,
{
    debug_assert!(border_mode.is_extending());
    let width = image.width as usize;
    let height = image.height as usize;
    let row_stride = width * CN;

    let mut top_pad = vec![T::default(); pad_top * row_stride];
    let mut bottom_pad = vec![T::default(); pad_bottom * row_stride];

    for (ky, dst) in top_pad.chunks_exact_mut(row_stride).enumerate() {
        let vy = ky as i64 - pad_top as i64;
        match border_mode {
            BorderMode::ExtendZero => {}
            BorderMode::ExtendConstant => dst.copy_from_slice(image.row(0, CN)),
            BorderMode::ExtendReflection => {
                let oy = reflect_index_101(vy as isize, height as isize);
                dst.copy_from_slice(image.row(oy, CN));
            }
            BorderMode::ExtendPadded => {
                dst.copy_from_slice(image.padded_slice(0, vy, row_stride, CN));
            }
            BorderMode::OutputIgnore | BorderMode::OutputZero => {}
        }
    }

    for (ky, dst) in bottom_pad.chunks_exact_mut(row_stride).enumerate() {
        let vy = (height + ky) as i64;
        match border_mode {
            BorderMode::ExtendZero => {}
            BorderMode::ExtendConstant => dst.copy_from_slice(image.row(height - 1, CN)),
            BorderMode::ExtendReflection => {
                let oy = reflect_index_101(vy as isize, height as isize);
                dst.copy_from_slice(image.row(oy, CN));
            }
            BorderMode::ExtendPadded => {
                dst.copy_from_slice(image.padded_slice(0, vy, row_stride, CN));
            }
            BorderMode::OutputIgnore | BorderMode::OutputZero => {}
        }
    }

    (top_pad, bottom_pad)
}

/// Collects the `taps` row slices feeding one output row of a column pass.
pub(crate) fn collect_brows<'a, T>(
    image: &'a FilterImage<T>,
    top_pad: &'a [T],
    bottom_pad: &'a [T],
    y: usize,
    pad_top: usize,
    taps: usize,
    cn: usize,
) -> Vec<&'a [T]>
where
    T: Copy + Default + Debug,
{
    let height = image.height as i64;
    let row_stride = image.width as usize * cn;
    (0..taps)
        .map(|k| {
            let vy = y as i64 + k as i64 - pad_top as i64;
            if vy < 0 {
                let slot = (vy + pad_top as i64) as usize;
                &top_pad[slot * row_stride..(slot + 1) * row_stride]
            } else if vy >= height {
                let slot = (vy - height) as usize;
                &bottom_pad[slot * row_stride..(slot + 1) * row_stride]
            } else {
                image.row(vy as usize, cn)
            }
        })
        .collect()
}
