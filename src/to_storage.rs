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
use half::f16;

/// Converts an accumulator value into a storage channel value.
///
/// Narrowing is explicit and uniform: values are rounded to the nearest
/// integer and saturated to the destination range. Float-to-float stores are
/// plain casts.
pub trait ToStorage<T>: 'static + Copy
where
    T: 'static + Copy,
{
    /// Convert a value to storage, using the `to_` operator.
    fn to_(self) -> T;
}

macro_rules! impl_to_integral_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline]
            fn to_(self) -> $to {
                self.round()
                    .max(<$to>::MIN as $from)
                    .min(<$to>::MAX as $from) as $to
            }
        }
    };
}

impl_to_integral_storage!(f32, u8);
impl_to_integral_storage!(f64, u8);
impl_to_integral_storage!(f32, i8);
impl_to_integral_storage!(f64, i8);
impl_to_integral_storage!(f32, u16);
impl_to_integral_storage!(f64, u16);
impl_to_integral_storage!(f32, i16);
impl_to_integral_storage!(f64, i16);
impl_to_integral_storage!(f32, u32);
impl_to_integral_storage!(f64, u32);
impl_to_integral_storage!(f32, i32);
impl_to_integral_storage!(f64, i32);

macro_rules! impl_to_direct_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline]
            fn to_(self) -> $to {
                self as $to
            }
        }
    };
}

impl_to_direct_storage!(f32, f32);
impl_to_direct_storage!(f64, f64);
impl_to_direct_storage!(f64, f32);
impl_to_direct_storage!(f32, f64);

macro_rules! impl_identity_storage {
    ($ty:ty) => {
        impl ToStorage<$ty> for $ty {
            #[inline]
            fn to_(self) -> $ty {
                self
            }
        }
    };
}

impl_identity_storage!(u8);
impl_identity_storage!(i8);
impl_identity_storage!(u16);
impl_identity_storage!(i16);
impl_identity_storage!(u32);
impl_identity_storage!(i32);
impl_identity_storage!(u64);
impl_identity_storage!(i64);

macro_rules! impl_signed_to_narrow_storage {
    ($from:ty, $to:ty) => {
        impl ToStorage<$to> for $from {
            #[inline]
            fn to_(self) -> $to {
                self.max(<$to>::MIN as $from).min(<$to>::MAX as $from) as $to
            }
        }
    };
}

impl_signed_to_narrow_storage!(i16, u8);
impl_signed_to_narrow_storage!(i32, u8);
impl_signed_to_narrow_storage!(i64, u8);
impl_signed_to_narrow_storage!(i32, i16);
impl_signed_to_narrow_storage!(i32, u16);
impl_signed_to_narrow_storage!(i64, u16);
impl_signed_to_narrow_storage!(i64, i32);

impl ToStorage<f16> for f32 {
    #[inline]
    fn to_(self) -> f16 {
        f16::from_f32(self)
    }
}

impl ToStorage<f16> for f64 {
    #[inline]
    fn to_(self) -> f16 {
        f16::from_f64(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_to_u8_saturates() {
        assert_eq!(ToStorage::<u8>::to_(300.6f32), 255u8);
        assert_eq!(ToStorage::<u8>::to_(-5.0f32), 0u8);
    }

    #[test]
    fn float_to_u8_rounds() {
        assert_eq!(ToStorage::<u8>::to_(1.5f32), 2u8);
        assert_eq!(ToStorage::<u8>::to_(1.4f32), 1u8);
    }

    #[test]
    fn float_to_signed_saturates_both_ends() {
        assert_eq!(ToStorage::<i8>::to_(200.0f32), 127i8);
        assert_eq!(ToStorage::<i8>::to_(-200.0f32), -128i8);
    }

    #[test]
    fn int_to_narrow_saturates() {
        assert_eq!(ToStorage::<u8>::to_(1000i32), 255u8);
        assert_eq!(ToStorage::<u8>::to_(-3i32), 0u8);
    }
}
