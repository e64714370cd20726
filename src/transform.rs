//! Pluggable one-dimensional scalar transforms.
//!
//! A `ScalarTransform` is the function-valued half of the boundary
//! contract: anywhere an API needs a caller-supplied `f64 -> f64`
//! computation (a density, a kernel, a link function), it accepts any
//! value of this trait. Whether a given transform is pure, thread-safe,
//! or reentrant is the caller's contract, not enforced here.
use std::fmt;

/// A one-dimensional floating point transform.
pub trait ScalarTransform {
    /// Applies this transform to `x`.
    fn apply(&self, x: f64) -> f64;
}
impl<F> ScalarTransform for F
where
    F: Fn(f64) -> f64,
{
    fn apply(&self, x: f64) -> f64 {
        self(x)
    }
}

/// An owned, type-erased scalar transform.
///
/// Use this where a transform has to be stored or sent across a module
/// (or language binding) boundary as a value.
pub struct BoxScalarTransform(Box<dyn Fn(f64) -> f64 + Send + Sync>);
impl BoxScalarTransform {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }
}
impl ScalarTransform for BoxScalarTransform {
    fn apply(&self, x: f64) -> f64 {
        (self.0)(x)
    }
}
impl fmt::Debug for BoxScalarTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoxScalarTransform(_)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_twice<T: ScalarTransform>(t: &T, x: f64) -> f64 {
        t.apply(t.apply(x))
    }

    #[test]
    fn closures_are_transforms() {
        let double = |x: f64| x * 2.0;
        assert_eq!(double.apply(3.0), 6.0);
        assert_eq!(apply_twice(&double, 3.0), 12.0);
    }

    #[test]
    fn equivalent_transforms_are_interchangeable() {
        let a = |x: f64| x + 1.0;
        let b = BoxScalarTransform::new(|x| x + 1.0);
        assert_eq!(apply_twice(&a, 0.0), apply_twice(&b, 0.0));
    }

    #[test]
    fn boxed_transform_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let t = BoxScalarTransform::new(f64::exp);
        assert_send_sync(&t);
        assert!((t.apply(0.0) - 1.0).abs() < 1e-15);
    }
}
