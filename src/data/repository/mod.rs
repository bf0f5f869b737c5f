mod login;
mod waifu;

pub use login::{MockLoginRepository, RemoteLoginRepository};
pub use waifu::WaifuRepositoryImpl;
