pub mod application {
    pub mod beverage {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod recommendation {
        pub mod recommend_beverages;
        pub mod recommend_recipes;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod auth {
        pub mod repository;
    }
    pub mod beverage {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod recommendation {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod recommend_beverages;
            pub mod recommend_recipes;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
