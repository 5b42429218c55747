pub mod db;
pub mod auth {
    pub mod entity;
    pub mod repository;
}
pub mod beverage {
    pub mod entity;
    pub mod repository;
}
