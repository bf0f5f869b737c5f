mod http;
mod login_api;
mod waifu_api;

pub use http::{HttpClient, HttpError};
pub use login_api::LoginApi;
pub use waifu_api::WaifuApi;
