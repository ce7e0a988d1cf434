//! Owning vectors: [`Vector2`], [`Vector3`] and [`VectorN`].
//!
//! A concrete vector is where an expression ends. Construction from an
//! expression ([`Vector3::from_expr`]) and the compound assignment operators
//! read each component of the right-hand side exactly once and write it
//! straight into storage.
//!
//! Borrowed vectors (`&Vector3<T>`) are themselves expressions, so they mix
//! freely with lazy nodes. Because the right-hand side of `+=` borrows its
//! operands, `v += &v + &w` is rejected by the borrow checker; copy `v` first
//! when the update must read the old value.

mod vector2;
mod vector3;
mod vectorn;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vectorn::VectorN;

/// Methods, operators and trait impls shared by every concrete vector.
///
/// The type must provide `splat`, `from_expr` and `Index`/`IndexMut`.
macro_rules! impl_vector_common {
    ([$($gen:tt)*] $ty:ty, $n:expr) => {
        impl<$($gen)*> $ty
        where
            T: $crate::traits::Scalar,
        {
            /// Vector with every component set to zero.
            #[inline(always)]
            pub fn zero() -> Self {
                Self::splat(<T as num::Zero>::zero())
            }

            /// Number of components.
            #[inline(always)]
            pub const fn size(&self) -> usize {
                $n
            }

            /// Overwrites every component with the value of `expr`.
            #[inline(always)]
            pub fn assign<E>(&mut self, expr: E)
            where
                E: $crate::expr::VecExpr<Scalar = T>,
            {
                *self = Self::from_expr(expr);
            }

            /// Checked component read.
            #[inline]
            pub fn get(&self, i: usize) -> $crate::error::Result<T> {
                if i < $n {
                    Ok(self[i])
                } else {
                    Err($crate::error::index_error(i, $n))
                }
            }

            /// Checked mutable component access.
            #[inline]
            pub fn get_mut(&mut self, i: usize) -> $crate::error::Result<&mut T> {
                if i < $n {
                    Ok(&mut self[i])
                } else {
                    Err($crate::error::index_error(i, $n))
                }
            }

            /// Dot product with any expression of the same size.
            #[inline(always)]
            pub fn dot<R>(&self, rhs: R) -> T
            where
                R: $crate::expr::VecExpr<Scalar = T>,
            {
                $crate::expr::dot(self, rhs)
            }

            /// Squared Euclidean norm.
            #[inline(always)]
            pub fn norm2(&self) -> T {
                $crate::expr::norm2(self)
            }

            /// Sum of the components.
            #[inline]
            pub fn sum(&self) -> T {
                $crate::expr::sum(self)
            }

            /// Lazy Hadamard product.
            #[inline(always)]
            pub fn elem_prod<R>(&self, rhs: R) -> $crate::expr::ElemProd<&Self, R>
            where
                R: $crate::expr::VecExpr<Scalar = T>,
            {
                $crate::expr::ElemProd::new(self, rhs)
            }

            /// Lazy element-wise division.
            #[inline(always)]
            pub fn elem_div<R>(&self, rhs: R) -> $crate::expr::ElemDiv<&Self, R>
            where
                R: $crate::expr::VecExpr<Scalar = T>,
            {
                $crate::expr::ElemDiv::new(self, rhs)
            }

            /// Divides in place, reporting a negligible divisor.
            pub fn try_div_assign(&mut self, divisor: T) -> $crate::error::Result<()> {
                if $crate::traits::Scalar::is_negligible(divisor) {
                    return Err($crate::error::division_error(
                        $crate::traits::Scalar::magnitude(divisor),
                    ));
                }
                for i in 0..$n {
                    self[i] = self[i] / divisor;
                }
                Ok(())
            }

            /// Prints the vector as `(c0,c1,...)` followed by a newline.
            pub fn show(&self) {
                println!("{self}");
            }
        }

        impl<$($gen)*> $ty
        where
            T: $crate::traits::Real,
        {
            /// Euclidean norm.
            #[inline(always)]
            pub fn norm(&self) -> T {
                $crate::expr::norm(self)
            }

            /// Angle to `rhs` in `[0, π]`, see [`angle`]($crate::expr::angle).
            #[inline]
            pub fn angle<R>(&self, rhs: R) -> $crate::error::Result<T>
            where
                R: $crate::expr::VecExpr<Scalar = T>,
            {
                $crate::expr::angle(self, rhs)
            }

            /// Lazy unit vector. The zero vector stays zero.
            #[inline]
            pub fn unit(&self) -> $crate::expr::Unit<&Self> {
                $crate::expr::unit(self)
            }

            /// Lazy unit vector, failing on the zero vector.
            #[inline]
            pub fn try_unit(&self) -> $crate::error::Result<$crate::expr::Unit<&Self>> {
                $crate::expr::try_unit(self)
            }

            /// Scales the vector to unit length in place. The zero vector stays zero.
            pub fn normalize(&mut self) {
                let norm = self.norm();
                if !<T as num::Zero>::is_zero(&norm) {
                    for i in 0..$n {
                        self[i] = self[i] / norm;
                    }
                }
            }
        }

        impl<$($gen)*> Default for $ty
        where
            T: $crate::traits::Scalar,
        {
            #[inline(always)]
            fn default() -> Self {
                Self::zero()
            }
        }

        impl<$($gen)*> $crate::expr::FromExpr<T> for $ty
        where
            T: $crate::traits::Scalar,
        {
            #[inline(always)]
            fn from_expr<E: $crate::expr::VecExpr<Scalar = T>>(expr: E) -> Self {
                <$ty>::from_expr(expr)
            }
        }

        impl<$($gen)*> std::fmt::Display for $ty
        where
            T: $crate::traits::Scalar,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "(")?;
                for i in 0..$n {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", self[i])?;
                }
                write!(f, ")")
            }
        }

        impl<$($gen)*, E> std::ops::AddAssign<E> for $ty
        where
            T: $crate::traits::Scalar,
            E: $crate::expr::VecExpr<Scalar = T>,
        {
            #[inline(always)]
            fn add_assign(&mut self, rhs: E) {
                const { assert!(E::SIZE == $n, "`+=` operands must have the same size") };
                for i in 0..$n {
                    self[i] = self[i] + rhs.at(i);
                }
            }
        }

        impl<$($gen)*, E> std::ops::SubAssign<E> for $ty
        where
            T: $crate::traits::Scalar,
            E: $crate::expr::VecExpr<Scalar = T>,
        {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: E) {
                const { assert!(E::SIZE == $n, "`-=` operands must have the same size") };
                for i in 0..$n {
                    self[i] = self[i] - rhs.at(i);
                }
            }
        }

        impl<$($gen)*> std::ops::MulAssign<T> for $ty
        where
            T: $crate::traits::Scalar,
        {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: T) {
                for i in 0..$n {
                    self[i] = self[i] * rhs;
                }
            }
        }

        /// Element-wise `/=`.
        impl<$($gen)*, E> std::ops::DivAssign<E> for $ty
        where
            T: $crate::traits::Scalar,
            E: $crate::expr::VecExpr<Scalar = T>,
        {
            #[inline(always)]
            fn div_assign(&mut self, rhs: E) {
                const { assert!(E::SIZE == $n, "`/=` operands must have the same size") };
                for i in 0..$n {
                    self[i] = self[i] / rhs.at(i);
                }
            }
        }
    };
}

/// Scalar `/=` for each supported scalar type.
///
/// A blanket `DivAssign<T>` would overlap with the element-wise impl, so the
/// scalar form is generated per concrete type.
macro_rules! impl_scalar_div_assign {
    (array; $($s:ty),* $(,)?) => {
        $(
            impl<const N: usize> std::ops::DivAssign<$s> for VectorN<$s, N> {
                #[inline]
                fn div_assign(&mut self, rhs: $s) {
                    if let Err(e) = self.try_div_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }
        )*
    };
    ($v:ident; $($s:ty),* $(,)?) => {
        $(
            impl std::ops::DivAssign<$s> for $v<$s> {
                #[inline]
                fn div_assign(&mut self, rhs: $s) {
                    if let Err(e) = self.try_div_assign(rhs) {
                        panic!("{e}");
                    }
                }
            }
        )*
    };
}

pub(crate) use impl_scalar_div_assign;
pub(crate) use impl_vector_common;
