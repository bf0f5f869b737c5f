//! Shared test utilities and fake collaborators.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

use waifu_viewer::domain::{LoginRepository, LoginResponse, WaifuImage, WaifuRepository};
use waifu_viewer::ui::mvi::{Dispatcher, TaskHandle};
use waifu_viewer::AppError;

pub fn image(id: u64) -> WaifuImage {
    WaifuImage {
        id,
        url: format!("https://cdn.waifu.im/{}.jpg", id),
        preview_url: Some(format!("https://www.waifu.im/preview/{}/", id)),
        width: 1200,
        height: 1800,
    }
}

pub fn images(count: u64) -> Vec<WaifuImage> {
    (1..=count).map(image).collect()
}

/// Wait for `handle` to finish, then run its callback on this thread.
pub async fn settle(handle: &TaskHandle, dispatcher: &mut Dispatcher) {
    tokio::time::timeout(Duration::from_secs(5), handle.ready())
        .await
        .expect("task did not finish in time");
    dispatcher.drain();
}

/// JSON body of a search response holding images `1..=count`.
pub fn search_body(count: u64) -> String {
    let images: Vec<String> = (1..=count)
        .map(|id| {
            format!(
                r#"{{"image_id": {id}, "url": "https://cdn.waifu.im/{id}.jpg", "preview_url": null, "width": 1200, "height": 1800, "tags": []}}"#
            )
        })
        .collect();
    format!(r#"{{"images": [{}]}}"#, images.join(","))
}

/// Scripted image source: each call pops the next outcome.
pub struct ScriptedWaifus {
    outcomes: Mutex<VecDeque<Result<Vec<WaifuImage>, String>>>,
    pub calls: AtomicUsize,
    pub last_limit: AtomicUsize,
    delay: Duration,
}

impl ScriptedWaifus {
    pub fn new(outcomes: Vec<Result<Vec<WaifuImage>, String>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
            last_limit: AtomicUsize::new(0),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaifuRepository for ScriptedWaifus {
    async fn portrait_waifus(&self, limit: usize) -> Result<Vec<WaifuImage>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.last_limit.store(limit, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let next = self.outcomes.lock().pop_front();
        match next {
            Some(Ok(images)) => Ok(images),
            Some(Err(message)) => Err(AppError::Message(message)),
            None => Err(AppError::Message("no scripted outcome".to_string())),
        }
    }
}

/// Login service that answers instantly with a fixed response.
pub struct FixedLogin {
    response: Result<LoginResponse, String>,
    pub calls: AtomicUsize,
}

impl FixedLogin {
    pub fn accepting(user_id: &str) -> Self {
        Self {
            response: Ok(LoginResponse::accepted(user_id)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            response: Ok(LoginResponse::rejected(reason)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LoginRepository for FixedLogin {
    async fn login(&self, _identifier: &str) -> Result<LoginResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone().map_err(AppError::Message)
    }
}

/// Write `content` to a config.toml inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
