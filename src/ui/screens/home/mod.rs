mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::HomeIntent;
pub use reducer::HomeReducer;
pub use state::HomeState;
pub use view_model::HomeViewModel;
