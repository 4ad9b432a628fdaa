/// Builds a [`WeakSequence`](crate::WeakSequence) from element expressions.
///
/// Each element is anything convertible into a handle: a live `&Rc<T>`, an
/// `Option<&Rc<T>>`, or an explicit [`WeakHandle`](crate::WeakHandle). None
/// of the elements are retained by the result.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use weakseq_core::{WeakHandle, weak_seq};
///
/// let a = Rc::new(1);
/// let b = Rc::new(2);
/// let seq = weak_seq![&a, WeakHandle::empty(), &b];
///
/// assert_eq!(seq.len(), 3);
/// assert!(seq.get(1).unwrap().is_none());
/// ```
#[macro_export]
macro_rules! weak_seq {
    () => {
        $crate::WeakSequence::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut seq = $crate::WeakSequence::new();
        $(seq.push($value);)+
        seq
    }};
}
