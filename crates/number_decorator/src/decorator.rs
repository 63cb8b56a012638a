use crate::{parse::parse_number, traits::Function, words::render_word};
use log::{debug, trace};

/// Wraps `inner` into a function from numeric strings to English words, `h ∘ inner ∘ k`.
///
/// The returned function parses its input, applies `inner` and spells out the result.
/// It returns an empty string if the input isn't an integer literal or if the result of
/// `inner` has no spelling. A parse failure is logged and otherwise dropped, so callers
/// can't tell the two cases apart.
pub fn decorate<F>(inner: F) -> impl Fn(&str) -> String
where
    F: Fn(i64) -> i64,
{
    move |token: &str| apply(&inner, token)
}

fn apply<F>(inner: &F, token: &str) -> String
where
    F: Fn(i64) -> i64,
{
    let n = match parse_number(token) {
        Ok(n) => n,
        Err(e) => {
            debug!("Ignoring unparsable token: {e}");
            return String::new();
        }
    };
    let out = inner(n);
    let word = render_word(out);
    if word.is_empty() {
        trace!("No word for {out} (from token {token:?})");
    }
    word.to_owned()
}

/// Owning form of [`decorate`]. Holds the inner function and can be passed around as a [`Function`].
#[derive(Debug, Clone, Copy)]
pub struct Decorator<F> {
    inner: F,
}

impl<F> Decorator<F>
where
    F: Fn(i64) -> i64,
{
    /// [`Decorator`] constructor.
    pub fn new(inner: F) -> Self {
        Decorator { inner }
    }

    /// Decorated call. See [`decorate`].
    pub fn call(&self, token: &str) -> String {
        apply(&self.inner, token)
    }

    #[must_use]
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F> Function for Decorator<F>
where
    F: Fn(i64) -> i64,
{
    type Input = String;
    type Output = String;

    fn map(&self, input: Self::Input) -> Self::Output {
        self.call(&input)
    }
}
