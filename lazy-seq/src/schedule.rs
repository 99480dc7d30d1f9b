//! The asynchronous driver: iteration re-expressed through a scheduler.
//!
//! An [`AsyncSequence`] does not run its pipeline on the caller's stack.
//! Instead it pulls one element per *step* from the pipeline's own pull
//! cursor, and each step is dispatched through a host-supplied
//! [`Scheduler`], the "run this thunk later" primitive. With an interval the
//! steps are paced; without one they land in the scheduler's
//! highest-priority deferred slot. Between steps the host event loop is free
//! to interleave other work, so visitors must not assume they run on the
//! stack that started the iteration.
//!
//! The cursor is bound when the sequence is wrapped: generated sequences
//! supply their unbuffered generator cursor, so an unbounded `generate` or
//! `repeat` can tick through a scheduler until a visitor stops it; other
//! sequences supply a cursor that buffers on its first advance.
//!
//! An `AsyncSequence` is deliberately *not* a
//! [`Sequence`](crate::Sequence): wrapping an already-asynchronous sequence
//! in `into_async` again is a type error rather than a runtime one.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use log::trace;

use crate::cursor::Cursor;
use crate::sequence::Step;

/// A host-supplied primitive that runs a thunk later.
///
/// `delay` of `None` asks for the highest-priority deferred execution the
/// host offers; `Some` asks to run no sooner than the given pacing interval.
/// The delay is pacing, not a deadline.
pub trait Scheduler {
    /// Enqueues `thunk` to run later.
    fn schedule(&self, delay: Option<Duration>, thunk: Box<dyn FnOnce()>);
}

/// A sequence whose iteration is dispatched through a [`Scheduler`].
///
/// Built by [`into_async`](crate::Sequence::into_async), which hands over
/// the pipeline's pull cursor; consumed by [`AsyncSequence::each`].
pub struct AsyncSequence<C> {
    cursor: C,
    interval: Option<Duration>,
}

impl<C> AsyncSequence<C> {
    pub(crate) fn new(cursor: C, interval: Option<Duration>) -> Self {
        AsyncSequence { cursor, interval }
    }
}

impl<C> AsyncSequence<C>
where
    C: Cursor + 'static,
{
    /// Delivers each element to `visitor` in its own scheduled step.
    ///
    /// Elements arrive in source order. The visitor is never invoked on the
    /// caller's stack: the first invocation happens when the scheduler runs
    /// the first step. Returning [`Step::Stop`] from the visitor ends the
    /// iteration; otherwise it ends when the cursor is exhausted.
    pub fn each<F>(self, scheduler: Rc<dyn Scheduler>, visitor: F)
    where
        F: FnMut(C::Item) -> Step + 'static,
    {
        let mut cursor = self.cursor;
        if cursor.advance() {
            trace!("scheduling first async step");
            let state = Rc::new(RefCell::new(DriverState { cursor, visitor }));
            schedule_step(&scheduler, self.interval, state);
        }
    }
}

struct DriverState<C, F> {
    cursor: C,
    visitor: F,
}

fn schedule_step<C, F>(
    scheduler: &Rc<dyn Scheduler>,
    interval: Option<Duration>,
    state: Rc<RefCell<DriverState<C, F>>>,
) where
    C: Cursor + 'static,
    F: FnMut(C::Item) -> Step + 'static,
{
    let again = Rc::clone(scheduler);
    scheduler.schedule(
        interval,
        Box::new(move || {
            let proceed = {
                let mut driver = state.borrow_mut();
                let item = driver.cursor.current();
                if (driver.visitor)(item).is_stop() {
                    trace!("async visitor stopped the iteration");
                    false
                } else {
                    driver.cursor.advance()
                }
            };
            if proceed {
                schedule_step(&again, interval, state);
            }
        }),
    );
}

/// A deterministic FIFO scheduler for tests and single-threaded hosts.
///
/// Thunks run only inside [`run`](QueueScheduler::run), in the order they
/// were scheduled; delays order no differently. Thunks scheduled while
/// draining (as the async driver does to step itself) run in the same drain.
#[derive(Default)]
pub struct QueueScheduler {
    queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
}

impl QueueScheduler {
    /// An empty scheduler.
    pub fn new() -> Self {
        QueueScheduler::default()
    }

    /// Runs queued thunks until none remain.
    pub fn run(&self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            match next {
                Some(thunk) => thunk(),
                None => return,
            }
        }
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&self, _delay: Option<Duration>, thunk: Box<dyn FnOnce()>) {
        self.queue.borrow_mut().push_back(thunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate, lazy, Sequence};

    #[test]
    fn async_each_delivers_in_order_off_the_calling_stack() {
        let scheduler = Rc::new(QueueScheduler::new());
        let delivered = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&delivered);
        lazy(vec![1, 2, 3]).into_async(None).each(scheduler.clone(), move |x| {
            sink.borrow_mut().push(x);
            Step::Continue
        });

        // nothing has run yet: delivery happens under the scheduler only
        assert!(delivered.borrow().is_empty());
        scheduler.run();
        assert_eq!(*delivered.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn async_visitor_stop_ends_the_iteration() {
        let scheduler = Rc::new(QueueScheduler::new());
        let delivered = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&delivered);
        lazy(vec![1, 2, 3, 4]).into_async(None).each(scheduler.clone(), move |x| {
            sink.borrow_mut().push(x);
            if x == 2 {
                Step::Stop
            } else {
                Step::Continue
            }
        });

        scheduler.run();
        assert_eq!(*delivered.borrow(), vec![1, 2]);
    }

    #[test]
    fn async_each_on_an_empty_sequence_schedules_nothing() {
        let scheduler = Rc::new(QueueScheduler::new());
        let touched = Rc::new(RefCell::new(false));

        let flag = Rc::clone(&touched);
        lazy(Vec::<i32>::new()).into_async(None).each(scheduler.clone(), move |_| {
            *flag.borrow_mut() = true;
            Step::Continue
        });

        scheduler.run();
        assert!(!*touched.borrow());
    }

    #[test]
    fn unbounded_generation_ticks_without_materializing() {
        let scheduler = Rc::new(QueueScheduler::new());
        let delivered = Rc::new(RefCell::new(Vec::new()));

        // wrapping and starting an endless generator must return promptly;
        // only the scheduled steps pull elements, one per step
        let sink = Rc::clone(&delivered);
        generate(|i| i as u64)
            .into_async(Some(Duration::from_millis(1)))
            .each(scheduler.clone(), move |x| {
                let mut seen = sink.borrow_mut();
                seen.push(x);
                if seen.len() == 5 {
                    Step::Stop
                } else {
                    Step::Continue
                }
            });

        scheduler.run();
        assert_eq!(*delivered.borrow(), vec![0, 1, 2, 3, 4]);
    }
}
