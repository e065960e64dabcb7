//! Reader Monad - computations that need a context.
//!
//! A `Reader<C, R>` wraps a function `C -> R`. Nothing runs until
//! [`read`](Reader::read) supplies the context; the result is never stored,
//! so the same reader can be read any number of times with different
//! contexts.
//!
//! # Note on Type Classes
//!
//! Reader provides `map`, `flat_map`, `zip2`, ... directly on the type rather
//! than implementing `Functor`/`Monad`, because the `Rc<dyn Fn>` it wraps
//! requires `'static` bounds the type class traits do not carry.
//!
//! # Laws
//!
//! - Functor identity: `reader.map(|x| x) == reader`
//! - Functor composition: `reader.map(f).map(g) == reader.map(|x| g(f(x)))`
//! - Left identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right identity: `m.flat_map(Reader::pure) == m`
//! - Local identity: `m.local(|c| c) == m`
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::Reader;
//!
//! #[derive(Clone)]
//! struct Config {
//!     host: String,
//!     port: u16,
//! }
//!
//! let host: Reader<Config, String> = Reader::new(|config: Config| config.host);
//! let port: Reader<Config, u16> = Reader::new(|config: Config| config.port);
//! let address = host.zip2(port).map(|(host, port)| format!("{host}:{port}"));
//!
//! let config = Config { host: "localhost".to_string(), port: 8080 };
//! assert_eq!(address.read(config), "localhost:8080");
//! ```

#![forbid(unsafe_code)]

use std::rc::Rc;

use crate::compose::{and_then, compose};

/// A computation producing an `R` once it is given a context `C`.
///
/// # Type Parameters
///
/// - `C`: The context type
/// - `R`: The result type
pub struct Reader<C, R>
where
    C: 'static,
    R: 'static,
{
    /// Shared so that cloning a Reader does not clone the closure.
    run_function: Rc<dyn Fn(C) -> R>,
}

impl<C, R> Reader<C, R>
where
    C: 'static,
    R: 'static,
{
    /// Creates a Reader from a function of the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::new(|context| context * 2);
    /// assert_eq!(reader.read(21), 42);
    /// ```
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(C) -> R + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation against `context`.
    ///
    /// This is the only point at which the wrapped function executes.
    pub fn read(&self, context: C) -> R {
        (self.run_function)(context)
    }

    /// Creates a Reader that ignores its context and returns `value`.
    pub fn pure(value: R) -> Self
    where
        R: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Transforms the result after the context has been read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::new(|text: String| text.len());
    /// let is_long = length.map(|n| n > 3);
    /// assert!(is_long.read("four".to_string()));
    /// ```
    pub fn map<B, F>(self, function: F) -> Reader<C, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(compose(function, move |context: C| {
            (original_function)(context)
        }))
    }

    /// Chains a Reader that depends on this one's result.
    ///
    /// The same context is given to both readers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let base: Reader<i32, i32> = Reader::new(|context| context);
    /// let chained = base.flat_map(|value| Reader::new(move |context| value + context));
    /// assert_eq!(chained.read(10), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<C, B>
    where
        F: Fn(R) -> Reader<C, B> + 'static,
        B: 'static,
        C: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |context: C| {
            let result = (original_function)(context.clone());
            function(result).read(context)
        })
    }

    /// Adapts this Reader to an outer context type.
    ///
    /// `function` turns the outer context into the one this Reader expects
    /// before delegating to it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// struct Request {
    ///     user: String,
    /// }
    ///
    /// let greet: Reader<String, String> = Reader::new(|user: String| format!("hello {user}"));
    /// let handler = greet.local(|request: Request| request.user);
    /// assert_eq!(handler.read(Request { user: "ada".to_string() }), "hello ada");
    /// ```
    pub fn local<Outer, F>(self, function: F) -> Reader<Outer, R>
    where
        F: Fn(Outer) -> C + 'static,
        Outer: 'static,
    {
        let original_function = self.run_function;
        Reader::new(and_then(function, move |context: C| {
            (original_function)(context)
        }))
    }

    /// Runs both Readers against the same context and pairs the results.
    pub fn zip2<B>(self, other: Reader<C, B>) -> Reader<C, (R, B)>
    where
        B: 'static,
        C: Clone,
    {
        let first_function = self.run_function;
        let second_function = other.run_function;
        Reader::new(move |context: C| {
            let first = (first_function)(context.clone());
            let second = (second_function)(context);
            (first, second)
        })
    }

    /// Runs three Readers against the same context, left to right.
    pub fn zip3<B, D>(self, second: Reader<C, B>, third: Reader<C, D>) -> Reader<C, (R, B, D)>
    where
        B: 'static,
        D: 'static,
        C: Clone,
    {
        self.zip2(second)
            .zip2(third)
            .map(|((first, second), third)| (first, second, third))
    }
}

impl<C> Reader<C, C>
where
    C: 'static,
{
    /// The Reader that returns its context unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::Reader;
    ///
    /// let reader: Reader<&str, &str> = Reader::ask();
    /// assert_eq!(reader.read("context"), "context");
    /// ```
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|context| context)
    }
}

impl<R> Reader<(), R>
where
    R: 'static,
{
    /// Wraps a zero-argument function as a Reader over the unit context.
    pub fn from_thunk<F>(thunk: F) -> Self
    where
        F: Fn() -> R + 'static,
    {
        Self::new(move |()| thunk())
    }
}

// =============================================================================
// Clone Implementation
// =============================================================================

impl<C, R> Clone for Reader<C, R>
where
    C: 'static,
    R: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: self.run_function.clone(),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<C, R> std::fmt::Display for Reader<C, R>
where
    C: 'static,
    R: 'static,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "<Reader>")
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);
