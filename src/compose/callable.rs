//! Calling functions with their arguments packed in a tuple.

/// A function that can be called with its arguments packed in a tuple.
///
/// Implemented for every [`Fn`] of arity 0 to 6.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compose::Callable;
///
/// fn volume(width: u32, height: u32, depth: u32) -> u32 {
///     width * height * depth
/// }
///
/// assert_eq!(volume.call_with((2, 3, 4)), 24);
/// ```
pub trait Callable<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function, spreading `arguments` over its parameters.
    fn call_with(&self, arguments: Args) -> Self::Output;
}

macro_rules! impl_callable {
    ($($argument:ident),*) => {
        impl<Function, Return, $($argument),*> Callable<($($argument,)*)> for Function
        where
            Function: Fn($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            #[allow(non_snake_case)]
            fn call_with(&self, ($($argument,)*): ($($argument,)*)) -> Return {
                self($($argument),*)
            }
        }
    };
}

impl_callable!();
impl_callable!(A);
impl_callable!(A, B);
impl_callable!(A, B, C);
impl_callable!(A, B, C, D);
impl_callable!(A, B, C, D, E);
impl_callable!(A, B, C, D, E, F);

/// Invokes `function` immediately, spreading `arguments` over its parameters.
///
/// # Examples
///
/// ```rust
/// use lazyfn::compose::apply;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// assert_eq!(apply(add, (1, 2)), 3);
/// assert_eq!(apply(|| "thunk", ()), "thunk");
/// ```
#[inline]
pub fn apply<Function, Args>(function: Function, arguments: Args) -> <Function as Callable<Args>>::Output
where
    Function: Callable<Args>,
{
    function.call_with(arguments)
}
