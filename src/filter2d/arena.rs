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
use crate::filter1d::{write_row_window, ArenaPads};
use crate::image::FilterImage;
use crate::BorderMode;
use std::fmt::Debug;

/// Copies the image into a freshly allocated buffer surrounded by the
/// requested margin, with the margin filled per `border_mode`.
///
/// Returns the buffer and its row stride in items; the buffer holds
/// `pads.top + height + pads.bottom` rows. Only the `Extend*` modes reach
/// this function.
pub(crate) fn make_arena_2d<T, const CN: usize>(
    image: &FilterImage<T>,
    pads: ArenaPads,
    border_mode: BorderMode,
) -> (Vec<T>, usize)
where
    T: Copy + Default + Debug,
{
    debug_assert!(border_mode.is_extending());
    let width = image.width as usize;
    let height = image.height as usize;
    let arena_stride = (pads.left + width + pads.right) * CN;
    let arena_height = pads.top + height + pads.bottom;
    let mut arena = vec![T::default(); arena_stride * arena_height];

    for (ay, dst) in arena.chunks_exact_mut(arena_stride).enumerate() {
        let vy = ay as i64 - pads.top as i64;
        match border_mode {
            BorderMode::ExtendZero => {
                if vy >= 0 && vy < height as i64 {
                    write_row_window::<T, CN>(
                        dst,
                        image,
                        vy as usize,
                        pads.left,
                        pads.right,
                        border_mode,
                    );
                }
            }
            BorderMode::ExtendConstant => {
                let oy = vy.clamp(0, height as i64 - 1) as usize;
                write_row_window::<T, CN>(dst, image, oy, pads.left, pads.right, border_mode);
            }
            BorderMode::ExtendReflection => {
                let oy = reflect_index_101(vy as isize, height as isize);
                write_row_window::<T, CN>(dst, image, oy, pads.left, pads.right, border_mode);
            }
            BorderMode::ExtendPadded => {
                dst.copy_from_slice(image.padded_slice(
                    -(pads.left as i64),
                    vy,
                    arena_stride,
                    CN,
                ));
            }
            BorderMode::OutputIgnore | BorderMode::OutputZero => {}
        }
    }
    (arena, arena_stride)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflection_arena_mirrors_both_axes() {
        let data = vec![1.0f32, 2.0, 3.0, 4.0];
        let image = FilterImage::borrow(&data, 2, 2, 1);
        let (arena, stride) =
            make_arena_2d::<f32, 1>(&image, ArenaPads::new(1, 1, 1, 1), BorderMode::ExtendReflection);
        assert_eq!(stride, 4);
        // Virtual row -1 reflects to row 1 = [3, 4], extended sideways.
        assert_eq!(&arena[..4], &[4.0, 3.0, 4.0, 3.0]);
        assert_eq!(&arena[4..8], &[2.0, 1.0, 2.0, 1.0]);
        assert_eq!(&arena[12..16], &[2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn zero_arena_keeps_margin_dark() {
        let data = vec![7u8; 4];
        let image = FilterImage::borrow(&data, 2, 2, 1);
        let (arena, stride) =
            make_arena_2d::<u8, 1>(&image, ArenaPads::new(1, 1, 1, 1), BorderMode::ExtendZero);
        assert_eq!(stride, 4);
        assert_eq!(&arena[..4], &[0, 0, 0, 0]);
        assert_eq!(&arena[4..8], &[0, 7, 7, 0]);
    }

    #[test]
    fn padded_arena_copies_the_parent() {
        let data: Vec<i32> = (0..25).collect();
        let parent = FilterImage::borrow(&data, 5, 5, 1);
        let inner = parent.sub_view(1, 1, 3, 3).unwrap();
        let (arena, stride) =
            make_arena_2d::<i32, 1>(&inner, ArenaPads::new(1, 1, 1, 1), BorderMode::ExtendPadded);
        assert_eq!(stride, 5);
        assert_eq!(&arena[..5], &[0, 1, 2, 3, 4]);
        assert_eq!(&arena[5..10], &[5, 6, 7, 8, 9]);
    }
}
