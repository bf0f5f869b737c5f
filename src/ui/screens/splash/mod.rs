mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::{SplashEvent, SplashIntent};
pub use reducer::SplashReducer;
pub use state::SplashState;
pub use view_model::SplashViewModel;
