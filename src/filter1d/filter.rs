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
use crate::filter1d::arena::{collect_brows, make_column_pads, write_row_window};
use crate::filter1d::filter_column::filter_column_window;
use crate::filter1d::filter_row::{filter_row_window, filter_scalar_row};
use crate::filter1d::Kernel1d;
use crate::image::{FilterImage, FilterImageMut};
use crate::safe_math::{SafeAdd, SafeMul};
use crate::to_storage::ToStorage;
use crate::{BorderMode, FilterError, ThreadingPolicy};
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_traits::{AsPrimitive, MulAdd};
use std::fmt::Debug;
use std::ops::Mul;

/// Horizontal correlation with distinct source, accumulator and destination
/// element types, for the `Extend*` policies. The public row entry points fix
/// `S == D`; the separable 2D path keeps a full-precision intermediate by
/// setting `D = F`. The `Output*` policies require a verbatim source copy at
/// the border and go through [filter_rows_output_mode] instead.
pub(crate) fn correlate_rows_typed<S, F, D, const CN: usize>(
    image: &FilterImage<S>,
    destination: &mut FilterImageMut<D>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<D> + 'static,
    D: Copy + Default + Debug + Send + Sync + 'static,
{
    image.check_layout_channels(CN)?;
    destination.check_layout_channels(CN)?;
    image.size_matches_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let pad_left = kernel.left_size();
    let pad_right = kernel.right_size();
    width.safe_add(kernel.size())?.safe_mul(CN)?;

    if border_mode == BorderMode::ExtendPadded {
        image.check_padding(pad_left, 0, pad_right, 0, CN)?;
    }

    let pool = novtb::ThreadPool::new(threading_policy.thread_count(image.width, image.height));
    let dst_stride = destination.row_stride() as usize;
    let weights = kernel.weights();

    let dst = destination.data.borrow_mut();
    let dst = &mut dst[..dst_stride * height];

    if kernel.size() == 1 {
        let weight = weights[0];
        dst.tb_par_chunks_exact_mut(dst_stride)
            .for_each_enumerated(&pool, |y, row| {
                filter_scalar_row(image.row(y, CN), &mut row[..width * CN], weight);
            });
        return Ok(());
    }

    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(&pool, |y, row| {
            let row = &mut row[..width * CN];
            let mut window = vec![S::default(); (width + pad_left + pad_right) * CN];
            write_row_window::<S, CN>(&mut window, image, y, pad_left, pad_right, border_mode);
            filter_row_window::<S, F, D, CN>(&window, row, weights);
        });
    Ok(())
}

/// Horizontal pass for `OutputIgnore` / `OutputZero`: the interior is
/// computed from the source row directly and border pixels are copied
/// verbatim or zeroed, so the source pixel type survives untouched.
fn filter_rows_output_mode<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    image.check_layout_channels(CN)?;
    destination.check_layout_channels(CN)?;
    image.size_matches_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let pad_left = kernel.left_size();
    let pad_right = kernel.right_size();
    width.safe_add(kernel.size())?.safe_mul(CN)?;

    let pool = novtb::ThreadPool::new(threading_policy.thread_count(image.width, image.height));
    let dst_stride = destination.row_stride() as usize;
    let weights = kernel.weights();

    let dst = destination.data.borrow_mut();
    let dst = &mut dst[..dst_stride * height];

    if kernel.size() == 1 {
        let weight = weights[0];
        dst.tb_par_chunks_exact_mut(dst_stride)
            .for_each_enumerated(&pool, |y, row| {
                filter_scalar_row(image.row(y, CN), &mut row[..width * CN], weight);
            });
        return Ok(());
    }

    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(&pool, |y, row| {
            let row = &mut row[..width * CN];
            let src_row = image.row(y, CN);
            if width > pad_left + pad_right {
                filter_row_window::<T, F, T, CN>(
                    src_row,
                    &mut row[pad_left * CN..(width - pad_right) * CN],
                    weights,
                );
            }
            for x in 0..width {
                if x >= pad_left && x + pad_right < width {
                    continue;
                }
                let dst_px = &mut row[x * CN..(x + 1) * CN];
                if border_mode == BorderMode::OutputZero {
                    dst_px.fill(T::default());
                } else {
                    dst_px.copy_from_slice(&src_row[x * CN..(x + 1) * CN]);
                }
            }
        });
    Ok(())
}

/// Vertical correlation, see [correlate_rows_typed] for the type roles.
pub(crate) fn correlate_cols_typed<S, F, D, const CN: usize>(
    image: &FilterImage<S>,
    destination: &mut FilterImageMut<D>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    S: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<D> + 'static,
    D: Copy + Default + Debug + Send + Sync + 'static,
{
    image.check_layout_channels(CN)?;
    destination.check_layout_channels(CN)?;
    image.size_matches_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let pad_top = kernel.left_size();
    let pad_bottom = kernel.right_size();
    let taps = kernel.size();
    height.safe_add(taps)?.safe_mul(width.safe_mul(CN)?)?;

    if border_mode == BorderMode::ExtendPadded {
        image.check_padding(0, pad_top, 0, pad_bottom, CN)?;
    }

    let pool = novtb::ThreadPool::new(threading_policy.thread_count(image.width, image.height));
    let dst_stride = destination.row_stride() as usize;
    let weights = kernel.weights();

    let dst = destination.data.borrow_mut();
    let dst = &mut dst[..dst_stride * height];

    if taps == 1 {
        let weight = weights[0];
        dst.tb_par_chunks_exact_mut(dst_stride)
            .for_each_enumerated(&pool, |y, row| {
                filter_scalar_row(image.row(y, CN), &mut row[..width * CN], weight);
            });
        return Ok(());
    }

    let (top_pad, bottom_pad) = make_column_pads::<S, CN>(image, pad_top, pad_bottom, border_mode);
    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(&pool, |y, row| {
            let row = &mut row[..width * CN];
            let brows = collect_brows(image, &top_pad, &bottom_pad, y, pad_top, taps, CN);
            filter_column_window(&brows, row, weights);
        });
    Ok(())
}

/// Vertical pass for `OutputIgnore` / `OutputZero`: interior rows are
/// computed from real source rows only, border rows are copied verbatim or
/// zeroed.
fn filter_cols_output_mode<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    image.check_layout_channels(CN)?;
    destination.check_layout_channels(CN)?;
    image.size_matches_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let pad_top = kernel.left_size();
    let pad_bottom = kernel.right_size();
    let taps = kernel.size();
    height.safe_add(taps)?.safe_mul(width.safe_mul(CN)?)?;

    let pool = novtb::ThreadPool::new(threading_policy.thread_count(image.width, image.height));
    let dst_stride = destination.row_stride() as usize;
    let weights = kernel.weights();

    let dst = destination.data.borrow_mut();
    let dst = &mut dst[..dst_stride * height];

    if taps == 1 {
        let weight = weights[0];
        dst.tb_par_chunks_exact_mut(dst_stride)
            .for_each_enumerated(&pool, |y, row| {
                filter_scalar_row(image.row(y, CN), &mut row[..width * CN], weight);
            });
        return Ok(());
    }

    dst.tb_par_chunks_exact_mut(dst_stride)
        .for_each_enumerated(&pool, |y, row| {
            let row = &mut row[..width * CN];
            if y < pad_top || y + pad_bottom >= height {
                if border_mode == BorderMode::OutputZero {
                    row.fill(T::default());
                } else {
                    row.copy_from_slice(image.row(y, CN));
                }
            } else {
                let brows = collect_brows(image, &[], &[], y, pad_top, taps, CN);
                filter_column_window(&brows, row, weights);
            }
        });
    Ok(())
}

/// Correlates image rows with a 1D kernel (horizontal pass).
///
/// Destination pixel `(x, y)` is the inner product of the kernel with the
/// pixels `(x - anchor .. x - anchor + taps, y)`, evaluated in `F` and stored
/// back into `T` with rounding and saturation.
pub fn correlate_rows<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    match border_mode {
        BorderMode::OutputIgnore | BorderMode::OutputZero => filter_rows_output_mode::<T, F, CN>(
            image,
            destination,
            kernel,
            border_mode,
            threading_policy,
        ),
        _ => correlate_rows_typed::<T, F, T, CN>(
            image,
            destination,
            kernel,
            border_mode,
            threading_policy,
        ),
    }
}

/// Convolves image rows with a 1D kernel.
///
/// Convolution is correlation with the reversed kernel and a mirrored anchor.
pub fn convolve_rows<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    let reversed = kernel.reversed();
    correlate_rows::<T, F, CN>(image, destination, &reversed, border_mode, threading_policy)
}

/// Correlates image columns with a 1D kernel (vertical pass).
///
/// The kernel runs along `y`; destination pixel `(x, y)` reads the pixels
/// `(x, y - anchor .. y - anchor + taps)`.
pub fn correlate_cols<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    match border_mode {
        BorderMode::OutputIgnore | BorderMode::OutputZero => filter_cols_output_mode::<T, F, CN>(
            image,
            destination,
            kernel,
            border_mode,
            threading_policy,
        ),
        _ => correlate_cols_typed::<T, F, T, CN>(
            image,
            destination,
            kernel,
            border_mode,
            threading_policy,
        ),
    }
}

/// Convolves image columns with a 1D kernel.
pub fn convolve_cols<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy + Default + Send + Sync + Mul<Output = F> + MulAdd<F, Output = F> + ToStorage<T> + 'static,
{
    let reversed = kernel.reversed();
    correlate_cols::<T, F, CN>(image, destination, &reversed, border_mode, threading_policy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_rows(
        data: &[f32],
        width: u32,
        height: u32,
        kernel: &Kernel1d<f32>,
        mode: BorderMode,
    ) -> Vec<f32> {
        let image = FilterImage::borrow(data, width, height, 1);
        let mut destination = FilterImageMut::alloc(width, height, 1);
        correlate_rows::<f32, f32, 1>(&image, &mut destination, kernel, mode, ThreadingPolicy::Single)
            .unwrap();
        destination.data.borrow().to_vec()
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-5, "{a} != {e}");
        }
    }

    #[test]
    fn single_weight_kernel_scales() {
        let kernel = Kernel1d::new(vec![2.0f32], 0).unwrap();
        let out = run_rows(&[1.0, 2.0, 3.0], 3, 1, &kernel, BorderMode::ExtendConstant);
        assert_close(&out, &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn moving_average_clamps_at_edges() {
        let third = 1.0f32 / 3.0;
        let kernel = Kernel1d::centered(vec![third; 3]).unwrap();
        let out = run_rows(&[5.0, 1.0, 9.0], 3, 1, &kernel, BorderMode::ExtendConstant);
        assert_close(&out, &[11.0 / 3.0, 5.0, 19.0 / 3.0]);
    }

    #[test]
    fn moving_average_reflects_at_edges() {
        let third = 1.0f32 / 3.0;
        let kernel = Kernel1d::centered(vec![third; 3]).unwrap();
        let out = run_rows(&[5.0, 1.0, 9.0], 3, 1, &kernel, BorderMode::ExtendReflection);
        assert_close(&out, &[7.0 / 3.0, 5.0, 11.0 / 3.0]);
    }

    #[test]
    fn zero_extension_darkens_edges() {
        let kernel = Kernel1d::centered(vec![1.0f32; 3]).unwrap();
        let out = run_rows(&[1.0, 1.0, 1.0], 3, 1, &kernel, BorderMode::ExtendZero);
        assert_close(&out, &[2.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_image_stays_zero() {
        let kernel = Kernel1d::centered(vec![0.25f32, 0.5, 0.25]).unwrap();
        let out = run_rows(&[0.0; 12], 4, 3, &kernel, BorderMode::ExtendZero);
        assert_close(&out, &[0.0; 12]);
    }

    #[test]
    fn output_zero_blanks_the_border_band() {
        let kernel = Kernel1d::new(vec![1.0f32, 1.0, 1.0, 1.0], 1).unwrap();
        let out = run_rows(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            5,
            1,
            &kernel,
            BorderMode::OutputZero,
        );
        // Anchor 1: one ignored pixel on the left, two on the right.
        assert_close(&out, &[0.0, 10.0, 14.0, 0.0, 0.0]);
    }

    #[test]
    fn output_ignore_copies_the_border_band() {
        let kernel = Kernel1d::new(vec![1.0f32, 1.0, 1.0, 1.0], 1).unwrap();
        let out = run_rows(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            5,
            1,
            &kernel,
            BorderMode::OutputIgnore,
        );
        assert_close(&out, &[1.0, 10.0, 14.0, 4.0, 5.0]);
    }

    #[test]
    fn convolve_is_correlate_with_reversed_kernel() {
        let data = [3.0f32, -1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        let kernel = Kernel1d::new(vec![1.0f32, -2.0, 3.0], 0).unwrap();
        let image = FilterImage::borrow(&data, 8, 1, 1);

        let mut convolved = FilterImageMut::alloc(8, 1, 1);
        convolve_rows::<f32, f32, 1>(
            &image,
            &mut convolved,
            &kernel,
            BorderMode::ExtendConstant,
            ThreadingPolicy::Single,
        )
        .unwrap();

        let mut correlated = FilterImageMut::alloc(8, 1, 1);
        correlate_rows::<f32, f32, 1>(
            &image,
            &mut correlated,
            &kernel.reversed(),
            BorderMode::ExtendConstant,
            ThreadingPolicy::Single,
        )
        .unwrap();

        assert_close(convolved.data.borrow(), correlated.data.borrow());
    }

    #[test]
    fn cols_match_rows_on_transposed_image() {
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
        let transposed = [1.0f32, 4.0, 2.0, 5.0, 3.0, 6.0];
        let kernel = Kernel1d::centered(vec![0.25f32, 0.5, 0.25]).unwrap();

        let image = FilterImage::borrow(&data, 3, 2, 1);
        let mut by_rows = FilterImageMut::alloc(3, 2, 1);
        correlate_rows::<f32, f32, 1>(
            &image,
            &mut by_rows,
            &kernel,
            BorderMode::ExtendReflection,
            ThreadingPolicy::Single,
        )
        .unwrap();

        let image_t = FilterImage::borrow(&transposed, 2, 3, 1);
        let mut by_cols = FilterImageMut::alloc(2, 3, 1);
        correlate_cols::<f32, f32, 1>(
            &image_t,
            &mut by_cols,
            &kernel,
            BorderMode::ExtendReflection,
            ThreadingPolicy::Single,
        )
        .unwrap();

        let rows = by_rows.data.borrow();
        let cols = by_cols.data.borrow();
        for y in 0..2 {
            for x in 0..3 {
                assert!((rows[y * 3 + x] - cols[x * 2 + y]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn padded_mode_reads_the_parent_margin() {
        let data: Vec<f32> = (0..25).map(|v| v as f32).collect();
        let parent = FilterImage::borrow(&data, 5, 5, 1);
        let inner = parent.sub_view(1, 1, 3, 3).unwrap();
        let kernel = Kernel1d::centered(vec![1.0f32 / 3.0; 3]).unwrap();

        let mut destination = FilterImageMut::alloc(3, 3, 1);
        correlate_rows::<f32, f32, 1>(
            &inner,
            &mut destination,
            &kernel,
            BorderMode::ExtendPadded,
            ThreadingPolicy::Single,
        )
        .unwrap();

        // Row 1 of the parent is 5..=9; the window always exists in storage.
        let out = destination.data.borrow();
        assert_close(&out[..3], &[6.0, 7.0, 8.0]);
    }

    #[test]
    fn padded_mode_requires_a_real_margin() {
        let data = vec![0.0f32; 9];
        let image = FilterImage::borrow(&data, 3, 3, 1);
        let kernel = Kernel1d::centered(vec![1.0f32 / 3.0; 3]).unwrap();
        let mut destination = FilterImageMut::alloc(3, 3, 1);
        let result = correlate_rows::<f32, f32, 1>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::ExtendPadded,
            ThreadingPolicy::Single,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_mismatched_destination() {
        let data = vec![0.0f32; 9];
        let image = FilterImage::borrow(&data, 3, 3, 1);
        let kernel = Kernel1d::centered(vec![1.0f32; 3]).unwrap();
        let mut destination = FilterImageMut::alloc(4, 3, 1);
        let result = correlate_rows::<f32, f32, 1>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::ExtendConstant,
            ThreadingPolicy::Single,
        );
        assert!(result.is_err());
    }

    #[test]
    fn interleaved_channels_filter_independently() {
        let data = [10u8, 0, 20, 100, 30, 200];
        let image = FilterImage::borrow(&data, 3, 1, 2);
        let kernel = Kernel1d::centered(vec![1.0f32 / 3.0; 3]).unwrap();
        let mut destination = FilterImageMut::alloc(3, 1, 2);
        correlate_rows::<u8, f32, 2>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::ExtendConstant,
            ThreadingPolicy::Single,
        )
        .unwrap();
        let out = destination.data.borrow();
        assert_eq!(out[0], 13);
        assert_eq!(out[1], 33);
        assert_eq!(out[2], 20);
        assert_eq!(out[3], 100);
    }

    #[test]
    fn output_ignore_preserves_pixels_wider_than_the_accumulator() {
        // 16_777_217 = 2^24 + 1 has no exact f32 representation; a border
        // copy routed through the accumulator would come back as 16_777_216.
        let data = [16_777_217i32, 0, 0, 0, 16_777_217];
        let image = FilterImage::borrow(&data, 5, 1, 1);
        let kernel = Kernel1d::centered(vec![1.0f32; 3]).unwrap();
        let mut destination = FilterImageMut::alloc(5, 1, 1);
        correlate_rows::<i32, f32, 1>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::OutputIgnore,
            ThreadingPolicy::Single,
        )
        .unwrap();
        let out = destination.data.borrow();
        assert_eq!(out[0], 16_777_217);
        assert_eq!(out[4], 16_777_217);

        let column = [16_777_217i32, 0, 0];
        let image = FilterImage::borrow(&column, 1, 3, 1);
        let mut destination = FilterImageMut::alloc(1, 3, 1);
        correlate_cols::<i32, f32, 1>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::OutputIgnore,
            ThreadingPolicy::Single,
        )
        .unwrap();
        assert_eq!(destination.data.borrow()[0], 16_777_217);
    }

    #[test]
    fn half_precision_pixels_filter() {
        use half::f16;
        let data: Vec<f16> = [1.0f32, 2.0, 3.0, 4.0]
            .iter()
            .map(|&v| f16::from_f32(v))
            .collect();
        let image = FilterImage::borrow(&data, 4, 1, 1);
        let kernel = Kernel1d::centered(vec![0.25f32, 0.5, 0.25]).unwrap();
        let mut destination = FilterImageMut::alloc(4, 1, 1);
        correlate_rows::<f16, f32, 1>(
            &image,
            &mut destination,
            &kernel,
            BorderMode::ExtendConstant,
            ThreadingPolicy::Single,
        )
        .unwrap();
        let out = destination.data.borrow();
        assert!((out[1].to_f32() - 2.0).abs() < 1e-2);
        assert!((out[0].to_f32() - 1.25).abs() < 1e-2);
    }

    #[test]
    fn threaded_matches_single_threaded() {
        let data: Vec<f32> = (0..64 * 16).map(|v| ((v * 31 + 7) % 97) as f32).collect();
        let image = FilterImage::borrow(&data, 64, 16, 1);
        let kernel = Kernel1d::centered(vec![0.1f32, 0.2, 0.4, 0.2, 0.1]).unwrap();

        let mut single = FilterImageMut::alloc(64, 16, 1);
        correlate_rows::<f32, f32, 1>(
            &image,
            &mut single,
            &kernel,
            BorderMode::ExtendReflection,
            ThreadingPolicy::Single,
        )
        .unwrap();

        let mut threaded = FilterImageMut::alloc(64, 16, 1);
        correlate_rows::<f32, f32, 1>(
            &image,
            &mut threaded,
            &kernel,
            BorderMode::ExtendReflection,
            ThreadingPolicy::Fixed(std::num::NonZeroUsize::new(4).unwrap()),
        )
        .unwrap();

        assert_eq!(single.data.borrow(), threaded.data.borrow());
    }
}
