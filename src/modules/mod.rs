pub mod user {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod service;
}

pub mod message {
    pub mod model;
}

pub mod upload {
    pub mod model;
}

pub mod dashboard {
    pub mod navigation;
    pub mod model;
    pub mod handle;
    pub mod route;
}
