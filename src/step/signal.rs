use derive_more::IsVariant;

/// The outcome of a single breaking step, deciding whether a traversal goes on.
///
/// A [`Break`](Signal::Break) ends the traversal immediately and becomes the result of the whole
/// traversal call. It has no effect beyond that call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Signal {
    #[default]
    Continue,
    Break,
}

impl Signal {
    /// Returns [`Break`](Signal::Break) if `stop` is true, otherwise
    /// [`Continue`](Signal::Continue).
    pub const fn break_if(stop: bool) -> Signal {
        if stop { Signal::Break } else { Signal::Continue }
    }
}
