//! End-to-end exercise of the public surface: a listener registry that
//! must never keep its listeners alive.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use weakseq::{Error, WeakSequence, weak_seq};

struct Listener {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Listener {
    fn notify(&self) {
        self.log.borrow_mut().push(self.name);
    }
}

#[test]
fn listener_registry_round_trip() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let make = |name| {
        Rc::new(Listener {
            name,
            log: Rc::clone(&log),
        })
    };

    let first = make("first");
    let second = make("second");
    let third = make("third");

    let mut registry: WeakSequence<Listener> = weak_seq![&first, &second, &third];
    assert_eq!(registry.len(), 3);

    // Dispatch reaches everyone that is still around.
    for listener in &registry {
        listener.notify();
    }
    assert_eq!(*log.borrow(), ["first", "second", "third"]);

    // A listener going away elsewhere silently leaves the roster's shape
    // intact but drops out of dispatch.
    drop(second);
    log.borrow_mut().clear();
    for listener in &registry {
        listener.notify();
    }
    assert_eq!(*log.borrow(), ["first", "third"]);
    assert_eq!(registry.len(), 3);

    // Explicit replacement of the dead slot.
    let replacement = make("replacement");
    registry.set(1, &replacement).unwrap();
    assert_eq!(registry.index_of(&replacement), Some(1));

    // Splicing the roster.
    registry.replace_range(0..1, [&third, &replacement]).unwrap();
    assert_eq!(registry.len(), 4);

    // Structural misuse is a hard error, not a clamp.
    assert!(matches!(
        registry.get(9),
        Err(Error::IndexOutOfRange { index: 9, len: 4 })
    ));
}

#[test]
fn snapshots_and_filters_compose() {
    let a = Rc::new(10);
    let b = Rc::new(20);
    let c = Rc::new(30);
    let seq: WeakSequence<i32> = weak_seq![&a, &b, &c];

    let big = seq.filter(|value| **value >= 20);
    assert_eq!(big.len(), 2);

    let reversed = big.reversed();
    assert_eq!(reversed.index_of(&c), Some(0));
    assert_eq!(reversed.index_of(&b), Some(1));

    // Views compare positionally against sequences and other views.
    let window = seq.slice(1..3).unwrap();
    assert_eq!(window, big);
}
