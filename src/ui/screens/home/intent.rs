use crate::domain::WaifuImage;
use crate::ui::mvi::Intent;

/// User actions and load results of the home screen.
#[derive(Debug, Clone)]
pub enum HomeIntent {
    Load,
    Retry,
    Loaded(Vec<WaifuImage>),
    LoadFailed { message: String },
}

impl Intent for HomeIntent {}
