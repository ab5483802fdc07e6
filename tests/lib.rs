/// Main test module that includes all sub-modules
/// Run specific tests with `cargo test <module>::<submodule>`
/// For example: `cargo test integration::ingest_test`
// Utility modules
pub mod utils;

// Integration tests
pub mod integration {
    pub mod async_test;
    pub mod catalog_test;
    pub mod ddl_test;
    pub mod ingest_test;
    pub mod storage_test;
}
