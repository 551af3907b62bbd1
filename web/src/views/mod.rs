mod home;
mod manage_page;

pub use home::HomePage;
pub use manage_page::ManagePage;
