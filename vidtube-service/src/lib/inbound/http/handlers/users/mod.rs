mod change_password;
mod channel_profile;
mod current_user;
mod login;
mod logout;
mod refresh_token;
mod register;
mod update_account;
mod update_avatar;
mod update_cover_image;
mod watch_history;

pub use change_password::change_password;
pub use channel_profile::channel_profile;
pub use current_user::current_user;
pub use login::login;
pub use logout::logout;
pub use refresh_token::refresh_token;
pub use register::register;
pub use update_account::update_account;
pub use update_avatar::update_avatar;
pub use update_cover_image::update_cover_image;
pub use watch_history::watch_history;
