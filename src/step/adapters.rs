use super::{Signal, Visit, VisitBreak, VisitEdge, VisitEdgeBreak, VisitMut, VisitMutBreak};

/// Lifts a non-breaking step into a breaking one which always returns [`Signal::Continue`].
///
/// - [`Visit`] becomes [`VisitBreak`].
/// - [`VisitMut`] becomes [`VisitMutBreak`].
/// - [`VisitEdge`] becomes [`VisitEdgeBreak`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Continuing<S>(pub S);

impl<T: ?Sized, S: Visit<T>> VisitBreak<T> for Continuing<S> {
    #[inline]
    fn visit(&mut self, item: &T) -> Signal {
        self.0.visit(item);
        Signal::Continue
    }
}

impl<T: ?Sized, S: VisitMut<T>> VisitMutBreak<T> for Continuing<S> {
    #[inline]
    fn visit_mut(&mut self, item: &mut T) -> Signal {
        self.0.visit_mut(item);
        Signal::Continue
    }
}

impl<T: ?Sized, S: VisitEdge<T>> VisitEdgeBreak<T> for Continuing<S> {
    #[inline]
    fn visit(&mut self, start: &T, end: &T) -> Signal {
        self.0.visit(start, end);
        Signal::Continue
    }
}

/// Lifts a read-only breaking step into a [`VisitMutBreak`] by only ever reading the element it is
/// given mutable access to.
///
/// Combined with [`Continuing`], this lifts a plain [`Visit`] all the way to [`VisitMutBreak`]:
/// `ReadOnly(Continuing(step))`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReadOnly<S>(pub S);

impl<T: ?Sized, S: VisitBreak<T>> VisitMutBreak<T> for ReadOnly<S> {
    #[inline]
    fn visit_mut(&mut self, item: &mut T) -> Signal {
        self.0.visit(item)
    }
}
