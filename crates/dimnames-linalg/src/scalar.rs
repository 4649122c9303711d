//! Element types.
//!
//! [`LinalgScalar`] is the set of element types the numeric backend can
//! work with. [`EigType`] maps any element type to the type a decomposition
//! is computed in (integers are promoted to `f64`).

use crate::backend::{self, LuResult, SvdResult};
use mdarray::{DSlice, DTensor};
use num_complex::{Complex32, Complex64};
use num_traits::{Float, One, Zero};

/// Scalar type accepted by the numeric kernels.
pub trait LinalgScalar:
    Copy
    + Zero
    + One
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::Neg<Output = Self>
    + PartialEq
    + Default
    + std::fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Real counterpart (`f32` for `Complex32`), used for singular values.
    type Real: Copy + PartialOrd + Into<f64> + std::fmt::Debug + Send + Sync + 'static;

    /// Complex conjugate of the value.
    fn conj(self) -> Self;

    /// Real part.
    fn re(self) -> Self::Real;

    /// Real part as f64.
    fn re_f64(self) -> f64 {
        self.re().into()
    }

    /// Create from f64 value.
    fn from_f64(val: f64) -> Self;

    fn is_finite(self) -> bool;

    /// Matrix product on the backend.
    fn matmul(a: &DSlice<Self, 2>, b: &DSlice<Self, 2>) -> DTensor<Self, 2>;

    /// SVD on the backend.
    fn svd(a: &mut DSlice<Self, 2>) -> anyhow::Result<SvdResult<Self>>;

    /// Full QR on the backend.
    fn qr(a: &mut DSlice<Self, 2>) -> (DTensor<Self, 2>, DTensor<Self, 2>);

    /// LU with partial pivoting on the backend.
    fn lu(a: &mut DSlice<Self, 2>) -> LuResult<Self>;

    /// Inverse on the backend.
    fn inv(a: &mut DSlice<Self, 2>) -> anyhow::Result<DTensor<Self, 2>>;

    /// Linear solve on the backend.
    fn solve(a: &mut DSlice<Self, 2>, b: &DSlice<Self, 2>) -> anyhow::Result<DTensor<Self, 2>>;
}

macro_rules! backend_kernels {
    () => {
        fn matmul(a: &DSlice<Self, 2>, b: &DSlice<Self, 2>) -> DTensor<Self, 2> {
            backend::matmul_backend(a, b)
        }

        fn svd(a: &mut DSlice<Self, 2>) -> anyhow::Result<SvdResult<Self>> {
            backend::svd_backend(a)
        }

        fn qr(a: &mut DSlice<Self, 2>) -> (DTensor<Self, 2>, DTensor<Self, 2>) {
            backend::qr_backend(a)
        }

        fn lu(a: &mut DSlice<Self, 2>) -> LuResult<Self> {
            backend::lu_backend(a)
        }

        fn inv(a: &mut DSlice<Self, 2>) -> anyhow::Result<DTensor<Self, 2>> {
            backend::inv_backend(a)
        }

        fn solve(
            a: &mut DSlice<Self, 2>,
            b: &DSlice<Self, 2>,
        ) -> anyhow::Result<DTensor<Self, 2>> {
            backend::solve_backend(a, b)
        }
    };
}

macro_rules! impl_real_scalar {
    ($($t:ty),*) => {$(
        impl LinalgScalar for $t {
            type Real = $t;

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn re(self) -> $t {
                self
            }

            #[inline]
            fn from_f64(val: f64) -> Self {
                val as $t
            }

            #[inline]
            fn is_finite(self) -> bool {
                Float::is_finite(self)
            }

            backend_kernels!();
        }
    )*};
}

macro_rules! impl_complex_scalar {
    ($($t:ident => $r:ty),*) => {$(
        impl LinalgScalar for $t {
            type Real = $r;

            #[inline]
            fn conj(self) -> Self {
                $t::conj(&self)
            }

            #[inline]
            fn re(self) -> $r {
                self.re
            }

            #[inline]
            fn from_f64(val: f64) -> Self {
                $t::new(val as $r, 0.0)
            }

            #[inline]
            fn is_finite(self) -> bool {
                self.re.is_finite() && self.im.is_finite()
            }

            backend_kernels!();
        }
    )*};
}

impl_real_scalar!(f32, f64);
impl_complex_scalar!(Complex32 => f32, Complex64 => f64);

/// Element type a decomposition of `Self` is computed in.
///
/// Decompositions need a field; integer arrays are copied into `f64`
/// before factorizing, floating types are kept as they are.
pub trait EigType: Copy {
    type Eig: LinalgScalar;

    fn to_eig(self) -> Self::Eig;
}

macro_rules! impl_eig_type_promote {
    ($($t:ty),*) => {$(
        impl EigType for $t {
            type Eig = f64;

            #[inline]
            fn to_eig(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_eig_type_identity {
    ($($t:ty),*) => {$(
        impl EigType for $t {
            type Eig = $t;

            #[inline]
            fn to_eig(self) -> $t {
                self
            }
        }
    )*};
}

impl_eig_type_promote!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_eig_type_identity!(f32, f64, Complex32, Complex64);

/// Copy `a` into its decomposition element type.
pub fn eigencopy<T: EigType>(a: &DTensor<T, 2>) -> DTensor<T::Eig, 2> {
    DTensor::<T::Eig, 2>::from_fn([a.dim(0), a.dim(1)], |idx| a[[idx[0], idx[1]]].to_eig())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scalar_generic<T: LinalgScalar>() {
        let one = T::from_f64(1.0);
        let two = T::from_f64(2.0);

        let sum = one + one;
        assert!(sum == two);
        assert!((two.conj().re_f64() - 2.0).abs() < 1e-6);
        assert!(one.is_finite());
        assert!(!(one / T::zero()).is_finite());
    }

    #[test]
    fn test_scalar_all_types() {
        test_scalar_generic::<f32>();
        test_scalar_generic::<f64>();
        test_scalar_generic::<Complex32>();
        test_scalar_generic::<Complex64>();
    }

    #[test]
    fn test_complex_conj() {
        let z = Complex64::new(3.0, 4.0);
        assert_eq!(LinalgScalar::conj(z), Complex64::new(3.0, -4.0));
        assert!((LinalgScalar::re_f64(z) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_real_type_keeps_precision() {
        let x: f32 = LinalgScalar::re(Complex32::new(1.5, -2.0));
        assert_eq!(x, 1.5_f32);
        let y: f64 = LinalgScalar::re(2.5_f64);
        assert_eq!(y, 2.5);
    }

    #[test]
    fn test_eig_type_promotes_integers() {
        assert_eq!(3_i32.to_eig(), 3.0_f64);
        assert_eq!(7_u8.to_eig(), 7.0_f64);
        assert_eq!(1.5_f32.to_eig(), 1.5_f32);
        let z = Complex64::new(1.0, -1.0);
        assert_eq!(z.to_eig(), z);
    }

    #[test]
    fn test_eigencopy_keeps_values() {
        let a = DTensor::<i64, 2>::from_fn([2, 3], |idx| (idx[0] * 3 + idx[1]) as i64);
        let b = eigencopy(&a);
        assert_eq!(b.dim(0), 2);
        assert_eq!(b.dim(1), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(b[[i, j]], (i * 3 + j) as f64);
                assert_eq!(a[[i, j]], (i * 3 + j) as i64);
            }
        }
    }
}
