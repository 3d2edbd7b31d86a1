//---------------------------------------
pub mod web_api {
    pub mod controllers;
    pub mod error;
    pub mod routes;
}

pub use web_api::controllers::*;
pub use web_api::routes::map_routes;
//---------------------------------------

//---------------------------------------
pub mod shared {
    pub mod dto;
    pub mod models;
    pub mod validation;
}

pub use shared::dto::*;
pub use shared::models::*;
pub use shared::validation;
//---------------------------------------

//---------------------------------------
pub mod data_access {
    pub mod data_context;
}
//---------------------------------------
