pub mod actions;
pub mod client;
pub mod config;
pub mod error;
pub mod menu;
pub mod routes;
pub mod services;
pub mod store;
pub mod traits;

pub use actions::{settings_nav_name, ActionOutcome, PageActions};
pub use client::{PageApiClient, PageApiClientBuilder};
pub use config::{ApiConfig, CONFIG};
pub use error::{PageApiError, Result};
pub use menu::{AlertState, AlertTimer, Anchor, MenuItem, MenuState};
pub use routes::ManagePageQuery;
pub use services::{Services, ServicesBuilder};
pub use store::{PageCommand, PageListState};
pub use traits::{CredentialProvider, PageBackend, PageDispatch, PageNavigator, UiReset};
