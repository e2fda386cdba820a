//! Length of possibly-absent values

/// Values with a length
pub trait Measured {
    /// Number of elements (characters for text)
    fn measured_len(&self) -> usize;
}

impl Measured for str {
    fn measured_len(&self) -> usize {
        self.chars().count()
    }
}

impl Measured for String {
    fn measured_len(&self) -> usize {
        self.as_str().measured_len()
    }
}

impl<T> Measured for [T] {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T> Measured for Vec<T> {
    fn measured_len(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Measured for [T; N] {
    fn measured_len(&self) -> usize {
        N
    }
}

/// Returns the length of `value`, or 0 when it is absent
///
/// Text is measured in `char`s. A JavaScript `length` counts UTF-16 code
/// units and reports 2 for each astral character such as an emoji.
pub fn len<T: Measured + ?Sized>(value: Option<&T>) -> usize {
    value.map_or(0, |v| v.measured_len())
}
