//! Models shared between the designer frontend and any service that stores
//! or renders templates.

pub mod model;
