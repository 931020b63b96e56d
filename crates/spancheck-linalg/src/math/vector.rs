use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl Array1<f64> {
    /// Largest elementwise absolute difference. `None` when lengths differ.
    pub fn max_abs_diff(&self, other: &Array1<f64>) -> Option<f64> {
        if self.len() != other.len() {
            return None;
        }
        Some(
            self.iter()
                .zip(other.iter())
                .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs())),
        )
    }
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_abs_diff_requires_equal_lengths() {
        let a = Array1::from_vec(vec![1.0, -2.0]);
        let b = Array1::from_vec(vec![1.5, 1.0]);
        assert_eq!(a.max_abs_diff(&b), Some(3.0));
        assert_eq!(a.max_abs_diff(&Array1::from_vec(vec![0.0; 3])), None);
    }

    #[test]
    fn display_is_comma_separated() {
        let v: Array1<f64> = vec![2.0, 1.5].into();
        assert_eq!(v.to_string(), "[2, 1.5]");
    }
}
