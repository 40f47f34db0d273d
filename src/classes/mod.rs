//! Class catalogue module.
//!
//! Registration, editing and activation of the classes the academy offers.

mod repository;
mod service;
mod types;

pub use repository::ClassRepository;
pub use service::{
    ClassService, MSG_ACTIVATED, MSG_DEACTIVATED, MSG_LISTED, MSG_NOT_FOUND, MSG_REGISTERED,
    MSG_UPDATED, MSG_UPDATE_NOT_FOUND,
};
pub use types::{ClassRecord, ClassUpdate, NewClass};
