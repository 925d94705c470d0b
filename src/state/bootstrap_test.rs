use std::cell::Cell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

#[test]
fn starts_preloading() {
    let controller = BootstrapController::new();
    assert!(controller.phase().is_preloading());
    assert_eq!(controller.phase(), BootstrapPhase::Init);
}

#[test]
fn delay_completion_reaches_ready_once() {
    let controller = BootstrapController::new();
    let fired = Rc::new(Cell::new(0));
    let counter = fired.clone();

    let (task, _timer) = controller
        .arm(futures::future::ready(()), move |phase| {
            assert_eq!(phase, BootstrapPhase::Ready);
            counter.set(counter.get() + 1);
        })
        .unwrap();
    block_on(task);

    assert_eq!(controller.phase(), BootstrapPhase::Ready);
    assert_eq!(fired.get(), 1);
}

#[test]
fn stays_in_init_until_delay_elapses() {
    let controller = BootstrapController::new();
    let (tx, rx) = oneshot::channel::<()>();
    let (mut task, _timer) = controller
        .arm(async move {
            let _ = rx.await;
        }, |_| {})
        .unwrap();

    assert!((&mut task).now_or_never().is_none());
    assert!(controller.phase().is_preloading());

    tx.send(()).unwrap();
    block_on(task);
    assert!(!controller.phase().is_preloading());
}

#[test]
fn second_arm_is_rejected() {
    let controller = BootstrapController::new();
    let (task, _timer) = controller.arm(futures::future::ready(()), |_| {}).unwrap();
    block_on(task);

    let again = controller.arm(futures::future::ready(()), |_| {});
    assert_eq!(again.err(), Some(BootstrapError::AlreadyArmed));
    assert_eq!(controller.phase(), BootstrapPhase::Ready);
}

#[test]
fn rearm_before_firing_is_rejected() {
    let controller = BootstrapController::new();
    let _first = controller.arm(futures::future::pending(), |_| {}).unwrap();
    assert!(controller.arm(futures::future::ready(()), |_| {}).is_err());
    assert!(controller.phase().is_preloading());
}

#[test]
fn cancelled_timer_never_transitions() {
    let controller = BootstrapController::new();
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let (task, timer) = controller.arm(futures::future::ready(()), move |_| flag.set(true)).unwrap();

    timer.cancel();
    block_on(task);

    assert!(controller.phase().is_preloading());
    assert!(!fired.get());
}

#[test]
fn clones_share_phase() {
    let controller = BootstrapController::new();
    let view = controller.clone();
    let (task, _timer) = controller.arm(futures::future::ready(()), |_| {}).unwrap();
    block_on(task);
    assert_eq!(view.phase(), BootstrapPhase::Ready);
}
