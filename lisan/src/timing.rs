//! Rate limiting for event handlers.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::backend::Backend;

/// Runs only the last of a burst of calls, once the calls stop for `wait_ms` .
pub struct Debounce {
    wait_ms: u32,
    generation: Cell<u64>,
}

impl Debounce {
    /// Create with the quiet period.
    pub fn new(wait_ms: u32) -> Rc<Self> {
        Rc::new(Self {
            wait_ms,
            generation: Cell::new(0),
        })
    }

    /// Schedule `f` after the quiet period, cancelling the pending one.
    pub fn call<B: Backend>(self: &Rc<Self>, backend: &B, f: impl 'static + FnOnce()) {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let sleep = backend.sleep(self.wait_ms);
        let this = self.clone();
        B::async_task(async move {
            sleep.await;
            if this.generation.get() == generation {
                f();
            }
        });
    }
}

/// Runs a call at once, then holds further calls until `limit_ms` has passed.
///
/// Of the calls held in an interval, the last one runs when the interval ends.
pub struct Throttle {
    limit_ms: f64,
    last: Cell<Option<f64>>,
    held: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl Throttle {
    /// Create with the minimum interval.
    pub fn new(limit_ms: u32) -> Rc<Self> {
        Rc::new(Self {
            limit_ms: limit_ms as f64,
            last: Cell::new(None),
            held: RefCell::new(None),
        })
    }

    /// Run `f` now if the interval has passed, or hold it until the interval ends.
    pub fn call<B: Backend>(self: &Rc<Self>, backend: &B, f: impl 'static + FnOnce()) {
        let now = backend.now();
        let end = match self.last.get() {
            Some(last) if now - last < self.limit_ms => last + self.limit_ms,
            _ => {
                self.last.set(Some(now));
                f();
                return;
            }
        };
        // a held call is already waiting for the end of this interval
        if self.held.replace(Some(Box::new(f))).is_some() {
            return;
        }
        let sleep = backend.sleep((end - now).ceil() as u32);
        let this = self.clone();
        B::async_task(async move {
            sleep.await;
            let f = this.held.borrow_mut().take();
            if let Some(f) = f {
                this.last.set(Some(end));
                f();
            }
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::backend::mem::MemBackend;

    #[test]
    fn debounce_keeps_the_last_call() {
        let backend = MemBackend::new();
        let debounce = Debounce::new(100);
        let calls = Rc::new(RefCell::new(vec![]));
        for i in 0..3 {
            let calls = calls.clone();
            debounce.call(&backend, move || calls.borrow_mut().push(i));
            backend.advance(50);
        }
        assert!(calls.borrow().is_empty());
        backend.advance(50);
        assert_eq!(*calls.borrow(), vec![2]);
        backend.advance(500);
        assert_eq!(*calls.borrow(), vec![2]);
    }

    #[test]
    fn throttle_runs_the_last_held_call() {
        let backend = MemBackend::new();
        let throttle = Throttle::new(100);
        let calls = Rc::new(RefCell::new(vec![]));
        let push = |i: i32| {
            let calls = calls.clone();
            move || calls.borrow_mut().push(i)
        };
        throttle.call(&backend, push(0));
        assert_eq!(*calls.borrow(), vec![0]);
        backend.advance(50);
        throttle.call(&backend, push(1));
        backend.advance(20);
        throttle.call(&backend, push(2));
        assert_eq!(*calls.borrow(), vec![0]);
        backend.advance(30);
        assert_eq!(*calls.borrow(), vec![0, 2]);

        // the held call started a new interval
        backend.advance(50);
        throttle.call(&backend, push(3));
        assert_eq!(*calls.borrow(), vec![0, 2]);
        backend.advance(50);
        assert_eq!(*calls.borrow(), vec![0, 2, 3]);

        backend.advance(500);
        throttle.call(&backend, push(4));
        assert_eq!(*calls.borrow(), vec![0, 2, 3, 4]);
        backend.advance(500);
        assert_eq!(*calls.borrow(), vec![0, 2, 3, 4]);
    }
}
