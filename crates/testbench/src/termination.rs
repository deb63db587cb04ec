/// Return values accepted from test procedures.
///
/// The value itself is never inspected: anything that is not an `Err`
/// counts as a pass, including `false`, `None` and `0`.
///
/// Implemented for `()`, `Result`, `Option`, primitive scalars, strings,
/// `Vec`, `Box` and tuples of up to four elements. Other return types can
/// implement it directly.
pub trait Termination {
    /// Convert the return value into the pass/fail signal.
    fn into_result(self) -> anyhow::Result<()>;
}

impl Termination for () {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T, E> Termination for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        self.map(drop).map_err(Into::into)
    }
}

impl<T> Termination for Option<T> {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T> Termination for Vec<T> {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<T: ?Sized> Termination for Box<T> {
    #[inline]
    fn into_result(self) -> anyhow::Result<()> {
        Ok(())
    }
}

macro_rules! impl_tuple_termination {
    ($( ($($t:ident),+) )*) => {$(
        impl<$($t),+> Termination for ($($t,)+) {
            #[inline]
            fn into_result(self) -> anyhow::Result<()> {
                Ok(())
            }
        }
    )*};
}

impl_tuple_termination! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
}

macro_rules! impl_ignored_termination {
    ($($t:ty),* $(,)?) => {$(
        impl Termination for $t {
            #[inline]
            fn into_result(self) -> anyhow::Result<()> {
                Ok(())
            }
        }
    )*};
}

impl_ignored_termination! {
    bool, char, String, &'static str,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}
