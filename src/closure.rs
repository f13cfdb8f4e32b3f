//! Closure factory
//!
//! [`make_adder`] captures its argument by value and hands back a function
//! that adds the captured value to whatever it is called with later.
//!
//! ```
//! use notjs::closure::make_adder;
//!
//! let add_forty = make_adder(40);
//! assert_eq!(add_forty(2), 42);
//! ```

use std::ops::Add;

/// Returns `f` such that `f(b) == a + b`.
///
/// `a` is moved into the closure and never changes for the lifetime of `f`.
pub fn make_adder<T>(a: T) -> impl Fn(T) -> T
where
    T: Add<Output = T> + Copy,
{
    move |b| a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adder_keeps_captured_value_between_calls() {
        let add_three = make_adder(3);
        assert_eq!(add_three(1), 4);
        assert_eq!(add_three(10), 13);
    }

    #[test]
    fn adder_follows_float_addition() {
        let add_half = make_adder(0.5_f64);
        assert_eq!(add_half(0.25), 0.75);
    }
}
