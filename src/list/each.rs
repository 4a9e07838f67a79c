//! Early-exit contract for `each` callbacks.
//!
//! An `each` callback stops iteration only by returning exactly `false`
//! (or `ControlFlow::Break`). Any other value, including "falsy" ones such as
//! `0` or an empty string, lets iteration continue.

use std::ops::ControlFlow;

/// A value returned from an `each` callback.
pub trait EachOutcome {
    /// Returns true if iteration should stop after this callback.
    fn should_stop(&self) -> bool;
}

impl EachOutcome for () {
    fn should_stop(&self) -> bool {
        false
    }
}

impl EachOutcome for bool {
    fn should_stop(&self) -> bool {
        !*self
    }
}

impl<B, C> EachOutcome for ControlFlow<B, C> {
    fn should_stop(&self) -> bool {
        self.is_break()
    }
}

impl EachOutcome for &str {
    fn should_stop(&self) -> bool {
        false
    }
}

impl EachOutcome for String {
    fn should_stop(&self) -> bool {
        false
    }
}

macro_rules! never_stops {
    ($($ty:ty),*) => {
        $(
            impl EachOutcome for $ty {
                fn should_stop(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_stops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_false_stops() {
        assert!(false.should_stop());
        assert!(!true.should_stop());
        assert!(!().should_stop());
    }

    #[test]
    fn test_falsy_values_do_not_stop() {
        assert!(!0i32.should_stop());
        assert!(!0usize.should_stop());
        assert!(!0.0f64.should_stop());
        assert!(!"".should_stop());
        assert!(!String::new().should_stop());
    }

    #[test]
    fn test_control_flow() {
        assert!(ControlFlow::<()>::Break(()).should_stop());
        assert!(!ControlFlow::<(), ()>::Continue(()).should_stop());
    }
}
