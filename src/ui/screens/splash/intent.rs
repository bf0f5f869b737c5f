use crate::ui::mvi::Intent;
use crate::ui::navigation::NavCommand;

#[derive(Debug, Clone, Copy)]
pub enum SplashIntent {
    SplashCompleted,
}

impl Intent for SplashIntent {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEvent {
    NavigateTo(NavCommand),
}
