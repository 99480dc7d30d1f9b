//! Asynchronous iteration through a scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use lazy_seq::{generate, lazy, range, QueueScheduler, Scheduler, Sequence, Step};

#[test]
fn elements_arrive_in_source_order() {
    let scheduler = Rc::new(QueueScheduler::new());
    let delivered = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&delivered);
    range(5).into_async(None).each(scheduler.clone(), move |x| {
        sink.borrow_mut().push(x);
        Step::Continue
    });

    scheduler.run();
    assert_eq!(*delivered.borrow(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn delivery_is_never_on_the_calling_stack() {
    let scheduler = Rc::new(QueueScheduler::new());
    let delivered = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&delivered);
    lazy(vec![1, 2, 3]).into_async(Some(Duration::from_millis(5))).each(
        scheduler.clone(),
        move |x| {
            sink.borrow_mut().push(x);
            Step::Continue
        },
    );

    // each() has returned, and nothing has been delivered yet
    assert!(delivered.borrow().is_empty());
    scheduler.run();
    assert_eq!(*delivered.borrow(), vec![1, 2, 3]);
}

#[test]
fn each_step_is_its_own_dispatch() {
    /// A scheduler that counts dispatches before forwarding to a queue.
    struct CountingScheduler {
        inner: QueueScheduler,
        dispatched: RefCell<usize>,
    }

    impl Scheduler for CountingScheduler {
        fn schedule(&self, delay: Option<Duration>, thunk: Box<dyn FnOnce()>) {
            *self.dispatched.borrow_mut() += 1;
            self.inner.schedule(delay, thunk);
        }
    }

    let scheduler = Rc::new(CountingScheduler {
        inner: QueueScheduler::new(),
        dispatched: RefCell::new(0),
    });

    let delivered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&delivered);
    lazy(vec![10, 20, 30]).into_async(None).each(scheduler.clone(), move |x| {
        sink.borrow_mut().push(x);
        Step::Continue
    });

    scheduler.inner.run();
    assert_eq!(*delivered.borrow(), vec![10, 20, 30]);
    assert_eq!(*scheduler.dispatched.borrow(), 3);
}

#[test]
fn paced_unbounded_generation_stops_after_enough_steps() {
    let scheduler = Rc::new(QueueScheduler::new());
    let delivered = Rc::new(RefCell::new(Vec::new()));

    // an endless ticker: wrapping must not materialize anything, and each
    // paced step pulls exactly one fresh element off the generator
    let sink = Rc::clone(&delivered);
    generate(|i| i * 10)
        .into_async(Some(Duration::from_millis(25)))
        .each(scheduler.clone(), move |x| {
            let mut seen = sink.borrow_mut();
            seen.push(x);
            if seen.len() == 4 {
                Step::Stop
            } else {
                Step::Continue
            }
        });

    assert!(delivered.borrow().is_empty());
    scheduler.run();
    assert_eq!(*delivered.borrow(), vec![0, 10, 20, 30]);
}

#[test]
fn stopping_prevents_further_scheduling() {
    let scheduler = Rc::new(QueueScheduler::new());
    let delivered = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&delivered);
    range(100).into_async(None).each(scheduler.clone(), move |x| {
        sink.borrow_mut().push(x);
        if x >= 2 {
            Step::Stop
        } else {
            Step::Continue
        }
    });

    scheduler.run();
    assert_eq!(*delivered.borrow(), vec![0, 1, 2]);
}
