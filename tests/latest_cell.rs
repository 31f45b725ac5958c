//! Semantics of the single-slot latest-wins channel between the sampler and
//! the renderer, driven by polling the wait future directly.

use core::future::Future;
use core::pin::pin;
use core::task::{Context, Poll, Waker};

use marquee_clock::{Reading, ReadingNotifier};

fn reading(second: u8) -> Reading {
    Reading {
        hour: 12,
        minute: 0,
        second,
        day: 1,
        month: 1,
        year: 2024,
        temperature: 20.0,
    }
}

fn poll_once<F: Future>(future: core::pin::Pin<&mut F>) -> Poll<F::Output> {
    let mut context = Context::from_waker(Waker::noop());
    future.poll(&mut context)
}

#[test]
fn read_returns_most_recent_of_unread_writes() {
    let cell = ReadingNotifier::new();
    cell.signal(reading(1));
    cell.signal(reading(2));
    cell.signal(reading(3));

    let mut wait = pin!(cell.wait());
    assert_eq!(poll_once(wait.as_mut()), Poll::Ready(reading(3)));
}

#[test]
fn write_never_blocks_on_an_occupied_slot() {
    let cell = ReadingNotifier::new();
    cell.signal(reading(1));
    assert!(cell.signaled());
    // `signal` is a plain synchronous call; writing into the occupied slot
    // completes immediately and replaces the unread value.
    cell.signal(reading(2));

    let mut wait = pin!(cell.wait());
    assert_eq!(poll_once(wait.as_mut()), Poll::Ready(reading(2)));
}

#[test]
fn each_write_is_delivered_to_at_most_one_reader() {
    let cell = ReadingNotifier::new();
    cell.signal(reading(7));

    let mut first = pin!(cell.wait());
    let mut second = pin!(cell.wait());
    assert_eq!(poll_once(first.as_mut()), Poll::Ready(reading(7)));
    assert_eq!(poll_once(second.as_mut()), Poll::Pending);
}

#[test]
fn read_blocks_until_a_value_is_present() {
    let cell = ReadingNotifier::new();

    let mut wait = pin!(cell.wait());
    assert_eq!(poll_once(wait.as_mut()), Poll::Pending);

    cell.signal(reading(4));
    assert_eq!(poll_once(wait.as_mut()), Poll::Ready(reading(4)));
}

#[test]
fn consumed_value_is_not_delivered_twice() {
    let cell = ReadingNotifier::new();
    cell.signal(reading(5));

    let mut first = pin!(cell.wait());
    assert_eq!(poll_once(first.as_mut()), Poll::Ready(reading(5)));

    // The slot is empty again; a fresh write is the next delivery.
    let mut second = pin!(cell.wait());
    assert_eq!(poll_once(second.as_mut()), Poll::Pending);
    cell.signal(reading(6));
    assert_eq!(poll_once(second.as_mut()), Poll::Ready(reading(6)));
}
