//! Reference semantics of the `add` template shipped in `demos/library.cpp`.
//!
//! `add(left, right)` converts `left` to the type of `right` and sums in that
//! type, mirroring `static_cast<T>(left) + right`. Conversions follow `as`
//! casts. Integer sums wrap modulo the width of `T`, which is what C++ yields
//! for unsigned types and for the narrow types promoted to `int` and
//! converted back on return.

/// Numeric conversion with `as`-cast semantics.
pub trait CastInto<T> {
    fn cast_into(self) -> T;
}

/// Addition in the arithmetic of the result type.
pub trait TemplateAdd: Copy {
    fn template_add(self, rhs: Self) -> Self;
}

macro_rules! impl_cast_into {
    ($from:ty => $($to:ty),+) => {
        $(
            impl CastInto<$to> for $from {
                #[inline]
                fn cast_into(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}

macro_rules! impl_cast_matrix {
    ($($from:ty),+) => {
        $(
            impl_cast_into!($from => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )+
    };
}

macro_rules! impl_template_add {
    (wrapping: $($int:ty),+; float: $($float:ty),+) => {
        $(
            impl TemplateAdd for $int {
                #[inline]
                fn template_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )+
        $(
            impl TemplateAdd for $float {
                #[inline]
                fn template_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )+
    };
}

impl_cast_matrix!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_template_add!(wrapping: i8, i16, i32, i64, u8, u16, u32, u64; float: f32, f64);

pub fn add<S, T>(left: S, right: T) -> T
where
    S: CastInto<T>,
    T: TemplateAdd,
{
    left.cast_into().template_add(right)
}
