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
use crate::filter1d::{
    correlate_cols_typed, correlate_rows_typed, filter_scalar_row, ArenaPads, Kernel1d,
};
use crate::filter2d::arena::make_arena_2d;
use crate::filter2d::scan::scan_kernel_2d;
use crate::filter2d::window::filter_window_2d;
use crate::filter2d::Kernel2d;
use crate::image::{FilterImage, FilterImageMut};
use crate::safe_math::{SafeAdd, SafeMul};
use crate::to_storage::ToStorage;
use crate::{BorderMode, FilterError, ThreadingPolicy};
use novtb::{ParallelZonedIterator, TbSliceMut};
use num_traits::{AsPrimitive, MulAdd, Zero};
use std::fmt::Debug;
use std::ops::{Div, Mul};

/// Correlates an image with a square 2D kernel.
///
/// A rank-1 kernel under the `ExtendZero`, `ExtendConstant` and
/// `ExtendReflection` policies is executed as a horizontal and a vertical 1D
/// pass through a full-precision intermediate image; those policies commute
/// with the split, so the result matches the general engine up to float
/// association. Every other kernel and policy runs through the general sparse
/// window engine.
pub fn correlate_2d<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel2d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy
        + Default
        + Debug
        + Send
        + Sync
        + PartialEq
        + Zero
        + Div<Output = F>
        + Mul<Output = F>
        + MulAdd<F, Output = F>
        + AsPrimitive<F>
        + ToStorage<T>
        + ToStorage<F>
        + 'static,
{
    if kernel.size() > 1
        && matches!(
            border_mode,
            BorderMode::ExtendZero | BorderMode::ExtendConstant | BorderMode::ExtendReflection
        )
    {
        if let Some((horizontal, vertical)) = kernel.factor() {
            return correlate_2d_separable::<T, F, CN>(
                image,
                destination,
                &horizontal,
                &vertical,
                border_mode,
                threading_policy,
            );
        }
    }
    correlate_2d_direct::<T, F, CN>(image, destination, kernel, border_mode, threading_policy)
}

/// Convolves an image with a square 2D kernel.
///
/// Convolution is correlation with the kernel reversed along both axes and a
/// mirrored anchor.
pub fn convolve_2d<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel2d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy
        + Default
        + Debug
        + Send
        + Sync
        + PartialEq
        + Zero
        + Div<Output = F>
        + Mul<Output = F>
        + MulAdd<F, Output = F>
        + AsPrimitive<F>
        + ToStorage<T>
        + ToStorage<F>
        + 'static,
{
    let reversed = kernel.reversed();
    correlate_2d::<T, F, CN>(image, destination, &reversed, border_mode, threading_policy)
}

fn correlate_2d_separable<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    horizontal: &Kernel1d<F>,
    vertical: &Kernel1d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy
        + Default
        + Debug
        + Send
        + Sync
        + Mul<Output = F>
        + MulAdd<F, Output = F>
        + AsPrimitive<F>
        + ToStorage<T>
        + ToStorage<F>
        + 'static,
{
    image.size_matches_mut(destination)?;
    let mut transient = FilterImageMut::<F>::alloc(image.width, image.height, image.channels);
    correlate_rows_typed::<T, F, F, CN>(
        image,
        &mut transient,
        horizontal,
        border_mode,
        threading_policy,
    )?;
    let transient_ref = transient.to_immutable_ref();
    correlate_cols_typed::<F, F, T, CN>(
        &transient_ref,
        destination,
        vertical,
        border_mode,
        threading_policy,
    )
}

/// The general engine: every nonzero tap is accumulated per destination
/// pixel. Always exact with respect to the declared border policy.
pub(crate) fn correlate_2d_direct<T, F, const CN: usize>(
    image: &FilterImage<T>,
    destination: &mut FilterImageMut<T>,
    kernel: &Kernel2d<F>,
    border_mode: BorderMode,
    threading_policy: ThreadingPolicy,
) -> Result<(), FilterError>
where
    T: Copy + Default + Debug + Send + Sync + AsPrimitive<F> + 'static,
    F: Copy
        + Default
        + Debug
        + Send
        + Sync
        + PartialEq
        + Zero
        + Mul<Output = F>
        + MulAdd<F, Output = F>
        + ToStorage<T>
        + 'static,
{
    image.check_layout_channels(CN)?;
    destination.check_layout_channels(CN)?;
    image.size_matches_mut(destination)?;

    let width = image.width as usize;
    let height = image.height as usize;
    let pads = ArenaPads::new(
        kernel.left_size(),
        kernel.upper_size(),
        kernel.right_size(),
        kernel.lower_size(),
    );
    width
        .safe_add(kernel.size())?
        .safe_mul(CN)?
        .safe_mul(height.safe_add(kernel.size())?)?;

    if border_mode == BorderMode::ExtendPadded {
        image.check_padding(pads.left, pads.top, pads.right, pads.bottom, CN)?;
    }

    let pool = novtb::ThreadPool::new(threading_policy.thread_count(image.width, image.height));
    let dst_stride = destination.row_stride() as usize;

    let dst = destination.data.borrow_mut();
    let dst = &mut dst[..dst_stride * height];

    if kernel.size() == 1 {
        let weight = kernel.row(0)[0];
        dst.tb_par_chunks_exact_mut(dst_stride)
            .for_each_enumerated(&pool, |y, row| {
                filter_scalar_row(image.row(y, CN), &mut row[..width * CN], weight);
            });
        return Ok(());
    }

    let taps = scan_kernel_2d(kernel);
    let kernel_size = kernel.size();

    match border_mode {
        BorderMode::OutputIgnore | BorderMode::OutputZero => {
            dst.tb_par_chunks_exact_mut(dst_stride)
                .for_each_enumerated(&pool, |y, row| {
                    let row = &mut row[..width * CN];
                    let src_row = image.row(y, CN);
                    if y < pads.top || y + pads.bottom >= height {
                        if border_mode == BorderMode::OutputZero {
                            row.fill(T::default());
                        } else {
                            row.copy_from_slice(src_row);
                        }
                        return;
                    }
                    let brows: Vec<&[T]> = (0..kernel_size)
                        .map(|ky| image.row(y + ky - pads.top, CN))
                        .collect();
                    for x in 0..width {
                        let dst_px = &mut row[x * CN..(x + 1) * CN];
                        if x < pads.left || x + pads.right >= width {
                            if border_mode == BorderMode::OutputZero {
                                dst_px.fill(T::default());
                            } else {
                                dst_px.copy_from_slice(&src_row[x * CN..(x + 1) * CN]);
                            }
                            continue;
                        }
                        for (c, d) in dst_px.iter_mut().enumerate() {
                            let t0 = &taps[0];
                            let mut k = brows[t0.ky][(x - pads.left + t0.kx) * CN + c]
                                .as_()
                                .mul(t0.weight);
                            for t in taps.iter().skip(1) {
                                k = MulAdd::mul_add(
                                    brows[t.ky][(x - pads.left + t.kx) * CN + c].as_(),
                                    t.weight,
                                    k,
                                );
                            }
                            *d = k.to_();
                        }
                    }
                });
        }
        _ => {
            let (arena, arena_stride) = make_arena_2d::<T, CN>(image, pads, border_mode);
            dst.tb_par_chunks_exact_mut(dst_stride)
                .for_each_enumerated(&pool, |y, row| {
                    filter_window_2d::<T, F, T, CN>(
                        &arena,
                        arena_stride,
                        &mut row[..width * CN],
                        y,
                        &taps,
                    );
                });
        }
    }
    Ok(())
}
