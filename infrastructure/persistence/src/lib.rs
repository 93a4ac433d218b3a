pub mod db;
pub mod cart {
    pub mod entity;
    pub mod repository;
}
pub mod promotional_video {
    pub mod entity;
    pub mod repository;
}
