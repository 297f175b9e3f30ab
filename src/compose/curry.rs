//! Binding leading arguments of a function.
//!
//! [`curry`] fixes the first arguments of a function and returns a
//! [`Curried`] value that supplies them, followed by the remaining
//! arguments, on every call. Arguments travel as tuples, so any arity from
//! 0 to 6 is supported with one entry point.

use super::callable::Callable;

/// Concatenation of two tuples, used to splice bound and remaining
/// arguments.
///
/// Implemented for every pair of tuples whose combined arity is at most 6.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compose::Concat;
///
/// assert_eq!((1, "two").concat((3.0,)), (1, "two", 3.0));
/// assert_eq!(().concat((1,)), (1,));
/// ```
pub trait Concat<Rest> {
    /// The concatenated tuple.
    type Output;

    /// Appends `rest` to `self`.
    fn concat(self, rest: Rest) -> Self::Output;
}

macro_rules! impl_concat {
    (@single [$($left:ident)*] [$($right:ident)*]) => {
        impl<$($left,)* $($right,)*> Concat<($($right,)*)> for ($($left,)*) {
            type Output = ($($left,)* $($right,)*);

            #[inline]
            #[allow(non_snake_case, clippy::unused_unit)]
            fn concat(self, rest: ($($right,)*)) -> Self::Output {
                let ($($left,)*) = self;
                let ($($right,)*) = rest;
                ($($left,)* $($right,)*)
            }
        }
    };
    ([$($left:ident)*] []) => {
        impl_concat!(@single [$($left)*] []);
    };
    ([$($left:ident)*] [$head:ident $($tail:ident)*]) => {
        impl_concat!(@single [$($left)*] [$head $($tail)*]);
        impl_concat!([$($left)* $head] [$($tail)*]);
    };
}

impl_concat!([] []);
impl_concat!([] [A]);
impl_concat!([] [A B]);
impl_concat!([] [A B C]);
impl_concat!([] [A B C D]);
impl_concat!([] [A B C D E]);
impl_concat!([] [A B C D E F]);

/// A function with some of its leading arguments already bound.
///
/// Created by [`curry`]. The bound arguments are cloned on every call, so a
/// `Curried` value can be called any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curried<Function, Bound> {
    function: Function,
    bound: Bound,
}

impl<Function, Bound> Curried<Function, Bound> {
    /// Returns the bound arguments.
    #[inline]
    pub const fn bound(&self) -> &Bound {
        &self.bound
    }

    /// Calls the function with the bound arguments followed by `rest`.
    #[inline]
    pub fn call<Rest>(
        &self,
        rest: Rest,
    ) -> <Function as Callable<<Bound as Concat<Rest>>::Output>>::Output
    where
        Bound: Clone + Concat<Rest>,
        Function: Callable<<Bound as Concat<Rest>>::Output>,
    {
        self.function.call_with(self.bound.clone().concat(rest))
    }

    /// Binds more leading arguments after the ones already bound.
    #[inline]
    pub fn bind<More>(self, more: More) -> Curried<Function, <Bound as Concat<More>>::Output>
    where
        Bound: Concat<More>,
    {
        Curried {
            function: self.function,
            bound: self.bound.concat(more),
        }
    }
}

/// Binds the leading arguments of `function`.
///
/// The returned value, when called with the remaining arguments, calls
/// `function` with `bound` followed by those arguments.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compose::curry;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let increment = curry(add, (1,));
/// assert_eq!(increment.call((1,)), 2);
/// assert_eq!(increment.call((41,)), 42);
///
/// let three = increment.bind((2,));
/// assert_eq!(three.call(()), 3);
/// ```
#[inline]
pub const fn curry<Function, Bound>(function: Function, bound: Bound) -> Curried<Function, Bound> {
    Curried { function, bound }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn format_greeting(greeting: String, name: &str, punctuation: char) -> String {
        format!("{greeting}, {name}{punctuation}")
    }

    #[rstest]
    fn test_curry_clones_bound_arguments_per_call() {
        let hello = curry(format_greeting, ("Hello".to_string(),));

        assert_eq!(hello.call(("Alice", '!')), "Hello, Alice!");
        assert_eq!(hello.call(("Bob", '?')), "Hello, Bob?");
        assert_eq!(hello.bound(), &("Hello".to_string(),));
    }

    #[rstest]
    fn test_curry_with_nothing_bound() {
        let same = curry(|first: i32, second: i32| first - second, ());
        assert_eq!(same.call((5, 3)), 2);
    }

    #[rstest]
    fn test_curry_with_everything_bound() {
        let thunk = curry(|first: i32, second: i32| first * second, (6, 7));
        assert_eq!(thunk.call(()), 42);
    }

    #[rstest]
    fn test_concat_six() {
        assert_eq!((1, 2, 3).concat((4, 5, 6)), (1, 2, 3, 4, 5, 6));
    }
}
