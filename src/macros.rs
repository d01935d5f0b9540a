//! Utility macros.

/// Folds the given expressions from left to right with the binary function
/// `$f`.
macro_rules! reduce_fields {
    ($f:path; $first:expr $(, $rest:expr)*) => {{
        let acc = $first;
        $(let acc = $f(acc, $rest);)*
        acc
    }};
}

/// Implements a componentwise arithmetic operator for a vector type, both
/// between vectors and between a vector and a scalar on either side. Operands
/// of different domains are first promoted to their common domain.
macro_rules! impl_elementwise_binop {
    ($vector:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T, U> ::std::ops::$op<$vector<U>> for $vector<T>
        where
            T: $crate::promotion::Promote<U>,
            U: $crate::num::Scalar,
            <T as $crate::promotion::Promote<U>>::Output:
                ::std::ops::$op<Output = <T as $crate::promotion::Promote<U>>::Output>,
        {
            type Output = $vector<<T as $crate::promotion::Promote<U>>::Output>;

            #[inline]
            fn $method(self, rhs: $vector<U>) -> Self::Output {
                self.zip_map(&rhs, |a, b| {
                    ::std::ops::$op::$method(
                        <T as $crate::promotion::Promote<U>>::promote_lhs(a),
                        <T as $crate::promotion::Promote<U>>::promote_rhs(b),
                    )
                })
            }
        }

        impl<'a, T, U> ::std::ops::$op<&'a $vector<U>> for &'a $vector<T>
        where
            T: $crate::promotion::Promote<U>,
            U: $crate::num::Scalar,
            <T as $crate::promotion::Promote<U>>::Output:
                ::std::ops::$op<Output = <T as $crate::promotion::Promote<U>>::Output>,
        {
            type Output = $vector<<T as $crate::promotion::Promote<U>>::Output>;

            #[inline]
            fn $method(self, rhs: &'a $vector<U>) -> Self::Output {
                ::std::ops::$op::$method(*self, *rhs)
            }
        }

        impl<T, U> ::std::ops::$op_assign<$vector<U>> for $vector<T>
        where
            T: $crate::promotion::Promote<U, Output = T> + ::std::ops::$op<Output = T>,
            U: $crate::num::Scalar,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: $vector<U>) {
                *self = ::std::ops::$op::$method(*self, rhs);
            }
        }

        impl_elementwise_binop!(
            @scalars $vector, $op, $method, $op_assign, $method_assign;
            ::half::f16, f32, f64, i32, i64, u32, ::num_complex::Complex64, ::rust_decimal::Decimal
        );
    };
    (@scalars $vector:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident; $($scalar:ty),+) => {
        $(
            impl<T> ::std::ops::$op<$scalar> for $vector<T>
            where
                T: $crate::promotion::Promote<$scalar>,
                <T as $crate::promotion::Promote<$scalar>>::Output:
                    ::std::ops::$op<Output = <T as $crate::promotion::Promote<$scalar>>::Output>,
            {
                type Output = $vector<<T as $crate::promotion::Promote<$scalar>>::Output>;

                #[inline]
                fn $method(self, rhs: $scalar) -> Self::Output {
                    let rhs = <T as $crate::promotion::Promote<$scalar>>::promote_rhs(rhs);
                    self.mapped(|a| {
                        ::std::ops::$op::$method(
                            <T as $crate::promotion::Promote<$scalar>>::promote_lhs(a),
                            rhs,
                        )
                    })
                }
            }

            impl<T> ::std::ops::$op<$vector<T>> for $scalar
            where
                $scalar: $crate::promotion::Promote<T>,
                T: $crate::num::Scalar,
                <$scalar as $crate::promotion::Promote<T>>::Output:
                    ::std::ops::$op<Output = <$scalar as $crate::promotion::Promote<T>>::Output>,
            {
                type Output = $vector<<$scalar as $crate::promotion::Promote<T>>::Output>;

                #[inline]
                fn $method(self, rhs: $vector<T>) -> Self::Output {
                    let lhs = <$scalar as $crate::promotion::Promote<T>>::promote_lhs(self);
                    rhs.mapped(|b| {
                        ::std::ops::$op::$method(
                            lhs,
                            <$scalar as $crate::promotion::Promote<T>>::promote_rhs(b),
                        )
                    })
                }
            }

            impl<T> ::std::ops::$op_assign<$scalar> for $vector<T>
            where
                T: $crate::promotion::Promote<$scalar, Output = T> + ::std::ops::$op<Output = T>,
            {
                #[inline]
                fn $method_assign(&mut self, rhs: $scalar) {
                    *self = ::std::ops::$op::$method(*self, rhs);
                }
            }
        )+
    };
}

/// Implements a componentwise operator between vectors of the same domain.
macro_rules! impl_same_domain_binop {
    ($vector:ident, $op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T> ::std::ops::$op for $vector<T>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip_map(&rhs, ::std::ops::$op::$method)
            }
        }

        impl<'a, T> ::std::ops::$op<&'a $vector<T>> for &'a $vector<T>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = $vector<T>;

            #[inline]
            fn $method(self, rhs: &'a $vector<T>) -> $vector<T> {
                self.zip_map(rhs, ::std::ops::$op::$method)
            }
        }

        impl<T> ::std::ops::$op_assign for $vector<T>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            #[inline]
            fn $method_assign(&mut self, rhs: Self) {
                *self = self.zip_map(&rhs, ::std::ops::$op::$method);
            }
        }
    };
}

macro_rules! impl_unary_op {
    ($vector:ident, $op:ident, $method:ident) => {
        impl<T> ::std::ops::$op for $vector<T>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn $method(self) -> Self {
                self.mapped(::std::ops::$op::$method)
            }
        }

        impl<T> ::std::ops::$op for &$vector<T>
        where
            T: $crate::num::Scalar + ::std::ops::$op<Output = T>,
        {
            type Output = $vector<T>;

            #[inline]
            fn $method(self) -> $vector<T> {
                self.mapped(::std::ops::$op::$method)
            }
        }
    };
}

/// Implements approximate comparison for a type whose listed fields all
/// support it.
macro_rules! impl_approx_eq {
    ($t:ident<T>, [$($field:tt),+]) => {
        impl<T> ::approx::AbsDiffEq for $t<T>
        where
            T: ::approx::AbsDiffEq,
            T::Epsilon: Copy,
            Self: PartialEq,
        {
            type Epsilon = T::Epsilon;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(self.$field.abs_diff_eq(&other.$field, epsilon))&&+
            }
        }

        impl<T> ::approx::RelativeEq for $t<T>
        where
            T: ::approx::RelativeEq,
            T::Epsilon: Copy,
            Self: PartialEq,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(self.$field.relative_eq(&other.$field, epsilon, max_relative))&&+
            }
        }
    };
}
