pub mod error;
pub mod security;
pub mod tags;

pub mod beverage {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod recommendation {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
