mod login;
pub use login::Login;

mod people;
pub use people::People;
