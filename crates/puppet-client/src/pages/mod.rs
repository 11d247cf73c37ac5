//! Page components.

mod dispatcher;
mod not_found;
mod panel;

pub use dispatcher::DispatcherPage;
pub use not_found::NotFoundPage;
pub use panel::PanelPage;
