mod intent;
mod reducer;
mod state;
mod validation;
mod view_model;

pub use intent::{LoginEvent, LoginIntent};
pub use reducer::LoginReducer;
pub use state::LoginState;
pub use validation::{identifier_error, is_valid_identifier, MIN_IDENTIFIER_LEN};
pub use view_model::LoginViewModel;
