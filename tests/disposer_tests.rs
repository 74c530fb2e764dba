// Host-side tests for listener disposal.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod disposer {
    include!("../src/disposer.rs");
}

use disposer::Disposer;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn dispose_runs_teardown_once() {
    let runs = Rc::new(Cell::new(0));
    let r = runs.clone();
    let d = Disposer::new(move || r.set(r.get() + 1));
    assert!(!d.is_disposed());
    d.dispose();
    d.dispose();
    assert!(d.is_disposed());
    drop(d);
    assert_eq!(runs.get(), 1);
}

#[test]
fn drop_disposes() {
    let runs = Rc::new(Cell::new(0));
    let r = runs.clone();
    drop(Disposer::new(move || r.set(r.get() + 1)));
    assert_eq!(runs.get(), 1);
}

#[test]
fn noop_is_already_disposed() {
    let d = Disposer::noop();
    assert!(d.is_disposed());
    d.dispose();
}

#[test]
fn merged_disposes_every_part() {
    let runs = Rc::new(Cell::new(0));
    let parts = (0..3)
        .map(|_| {
            let r = runs.clone();
            Disposer::new(move || r.set(r.get() + 1))
        })
        .collect();
    let all = Disposer::merge(parts);
    all.dispose();
    all.dispose();
    assert_eq!(runs.get(), 3);
    assert!(Disposer::merge(Vec::new()).is_disposed());
}
