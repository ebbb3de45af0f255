use super::Signal;

/// A read-only step.
pub trait Visit<T: ?Sized> {
    fn visit(&mut self, item: &T);
}

/// A step which may replace the visited element in place.
pub trait VisitMut<T: ?Sized> {
    fn visit_mut(&mut self, item: &mut T);
}

/// A read-only step which can end the traversal by returning [`Signal::Break`].
pub trait VisitBreak<T: ?Sized> {
    fn visit(&mut self, item: &T) -> Signal;
}

/// A step which may replace the visited element and can end the traversal by returning
/// [`Signal::Break`].
pub trait VisitMutBreak<T: ?Sized> {
    fn visit_mut(&mut self, item: &mut T) -> Signal;
}

/// A read-only step over an edge, given as its start and end.
pub trait VisitEdge<T: ?Sized> {
    fn visit(&mut self, start: &T, end: &T);
}

/// A read-only step over an edge which can end the traversal.
pub trait VisitEdgeBreak<T: ?Sized> {
    fn visit(&mut self, start: &T, end: &T) -> Signal;
}

impl<T: ?Sized, F: FnMut(&T)> Visit<T> for F {
    fn visit(&mut self, item: &T) {
        self(item)
    }
}

impl<T: ?Sized, F: FnMut(&mut T)> VisitMut<T> for F {
    fn visit_mut(&mut self, item: &mut T) {
        self(item)
    }
}

impl<T: ?Sized, F: FnMut(&T) -> Signal> VisitBreak<T> for F {
    fn visit(&mut self, item: &T) -> Signal {
        self(item)
    }
}

impl<T: ?Sized, F: FnMut(&mut T) -> Signal> VisitMutBreak<T> for F {
    fn visit_mut(&mut self, item: &mut T) -> Signal {
        self(item)
    }
}

impl<T: ?Sized, F: FnMut(&T, &T)> VisitEdge<T> for F {
    fn visit(&mut self, start: &T, end: &T) {
        self(start, end)
    }
}

impl<T: ?Sized, F: FnMut(&T, &T) -> Signal> VisitEdgeBreak<T> for F {
    fn visit(&mut self, start: &T, end: &T) -> Signal {
        self(start, end)
    }
}
