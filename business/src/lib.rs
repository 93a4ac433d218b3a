pub mod application {
    pub mod cart {
        pub mod get_all;
        pub mod get_detail;
        pub mod delete;
    }
    pub mod checkout {
        pub mod confirm;
        pub mod confirm_one_click;
        pub mod view;
        pub mod view_one_click;
    }
    pub mod promotional_video {
        pub mod get_by_id;
        pub mod get_showcase;
    }
    pub mod shop {
        pub mod add_to_cart;
        pub mod browse;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod cart {
        pub mod errors;
        pub mod listing;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_detail;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
    }
    pub mod checkout {
        pub mod errors;
        pub mod pricing;
        pub mod use_cases {
            pub mod confirm;
            pub mod confirm_one_click;
            pub mod view;
            pub mod view_one_click;
        }
    }
    pub mod promotional_video {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod showcase;
        pub mod use_cases {
            pub mod get_by_id;
            pub mod get_showcase;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
    pub mod shop {
        pub mod decoration;
        pub mod errors;
        pub mod weights;
        pub mod use_cases {
            pub mod add_to_cart;
            pub mod browse;
        }
    }
    pub mod storefront {
        pub mod settings;
    }
}
