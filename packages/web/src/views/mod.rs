mod layout;
pub use layout::{ProfileLayout, SiteLayout};

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod blog;
pub use blog::Blog;

mod contact;
pub use contact::Contact;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;
