//! Generic concatenation over any element type.
//!
//! `concatenate_arrays` borrows its inputs and clones elements;
//! `concat_owned` consumes them. The `concat_arrays!` macro gives the
//! variadic call shape: `concat_arrays![[1, 2], [3, 4], [5]]`.

/// Concatenates `arrays` in argument order. An empty argument list yields an
/// empty `Vec`.
pub fn concatenate_arrays<T: Clone>(arrays: &[&[T]]) -> Vec<T> {
    let total = arrays.iter().map(|array| array.len()).sum();
    let mut out = Vec::with_capacity(total);
    for array in arrays {
        out.extend_from_slice(array);
    }
    out
}

/// Concatenates owned sequences without cloning.
pub fn concat_owned<T, I>(arrays: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    arrays.into_iter().flatten().collect()
}

/// Variadic concatenation: each argument is anything that converts into an
/// iterator of the same element type.
#[macro_export]
macro_rules! concat_arrays {
    () => {
        ::std::vec::Vec::new()
    };
    ($($array:expr),+ $(,)?) => {{
        let mut out = ::std::vec::Vec::new();
        $(
            out.extend($array);
        )+
        out
    }};
}
