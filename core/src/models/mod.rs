//! View-models for the admin pages.
//!
//! Each model owns its state and exposes it through accessors; the only way
//! to change it is through the model's operations, which call
//! `Browser::refresh` once the new state is in place. Collaborators are
//! passed in at construction.

pub mod add_service_provider;
pub mod dashboard;
pub mod reset_password;
pub mod service_provider_details;

pub use add_service_provider::AddServiceProviderModel;
pub use dashboard::{DashboardEntry, DashboardModel};
pub use reset_password::ResetPasswordModel;
pub use service_provider_details::{
    EditableServiceProvider, SelectableTag, ServiceProviderDetailsModel,
};
