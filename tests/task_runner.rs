//! Background work delivered to the foreground dispatcher.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, ThreadId};
use std::time::Duration;

use parking_lot::Mutex;
use waifu_viewer::scope::Scope;
use waifu_viewer::ui::mvi::{Dispatcher, TaskError, TaskRunner, TaskStatus};
use waifu_viewer::AppError;

use common::settle;

#[tokio::test]
async fn success_is_delivered_once_on_the_foreground() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());

    let calls = Arc::new(AtomicUsize::new(0));
    let seen: Arc<Mutex<Option<(i32, ThreadId)>>> = Arc::new(Mutex::new(None));

    let handle = {
        let calls = Arc::clone(&calls);
        let seen = Arc::clone(&seen);
        runner.run(async { Ok(41 + 1) }, move |result| {
            calls.fetch_add(1, Ordering::SeqCst);
            *seen.lock() = Some((result.unwrap(), thread::current().id()));
        })
    };

    settle(&handle, &mut dispatcher).await;
    assert_eq!(dispatcher.drain(), 0);

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(handle.status(), TaskStatus::Succeeded);
    let (value, thread_id) = seen.lock().unwrap();
    assert_eq!(value, 42);
    assert_eq!(thread_id, thread::current().id());
}

#[tokio::test]
async fn callback_waits_for_the_dispatcher() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let calls = Arc::new(AtomicUsize::new(0));

    let handle = {
        let calls = Arc::clone(&calls);
        runner.run(async { Ok(()) }, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    handle.ready().await;

    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(handle.status(), TaskStatus::Pending);
    assert_eq!(dispatcher.drain(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn failure_carries_the_error_message() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let message = Arc::new(Mutex::new(None));

    let handle = {
        let message = Arc::clone(&message);
        runner.run(
            async { Err::<(), _>(AppError::from("network unreachable")) },
            move |result| {
                let err = result.unwrap_err();
                assert!(matches!(err, TaskError::Failed(_)));
                *message.lock() = Some(err.message());
            },
        )
    };
    settle(&handle, &mut dispatcher).await;

    assert_eq!(handle.status(), TaskStatus::Failed);
    assert_eq!(message.lock().as_deref(), Some("network unreachable"));
}

#[tokio::test]
async fn panic_in_work_becomes_a_failure() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let message = Arc::new(Mutex::new(None));

    let handle = {
        let message = Arc::clone(&message);
        runner.run(
            async {
                if true {
                    panic!("decoder exploded");
                }
                Ok(())
            },
            move |result| {
                let err = result.unwrap_err();
                assert!(matches!(err, TaskError::Panicked(_)));
                *message.lock() = Some(err.message());
            },
        )
    };
    settle(&handle, &mut dispatcher).await;

    assert_eq!(handle.status(), TaskStatus::Failed);
    assert_eq!(message.lock().as_deref(), Some("decoder exploded"));
}

#[tokio::test]
async fn teardown_before_completion_suppresses_the_callback() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let calls = Arc::new(AtomicUsize::new(0));

    let handle = {
        let calls = Arc::clone(&calls);
        runner.run(
            async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            },
            move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            },
        )
    };
    scope.cancel();
    settle(&handle, &mut dispatcher).await;

    assert_eq!(handle.status(), TaskStatus::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn teardown_after_completion_but_before_delivery_suppresses_the_callback() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let calls = Arc::new(AtomicUsize::new(0));

    let handle = {
        let calls = Arc::clone(&calls);
        runner.run(async { Ok(()) }, move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };
    handle.ready().await;
    scope.cancel();
    dispatcher.drain();

    assert_eq!(handle.status(), TaskStatus::Cancelled);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn run_after_teardown_is_rejected() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    scope.cancel();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());

    let handle = runner.run(async { Ok(()) }, |_| panic!("must not run"));
    settle(&handle, &mut dispatcher).await;
    assert_eq!(handle.status(), TaskStatus::Cancelled);
}

#[tokio::test]
async fn independent_tasks_each_deliver() {
    let mut dispatcher = Dispatcher::new();
    let scope = Scope::new();
    let runner = TaskRunner::new(dispatcher.handle(), scope.handle());
    let total = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (1..=5)
        .map(|n| {
            let total = Arc::clone(&total);
            runner.run(async move { Ok(n) }, move |result| {
                total.fetch_add(result.unwrap(), Ordering::SeqCst);
            })
        })
        .collect();
    for handle in &handles {
        settle(handle, &mut dispatcher).await;
    }

    assert_eq!(total.load(Ordering::SeqCst), 15);
    assert!(handles.iter().all(|h| h.status() == TaskStatus::Succeeded));
}
