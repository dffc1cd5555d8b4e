pub mod store_catalog;
pub use store_catalog::StoreCatalog;
pub mod mock_sales_repo;
pub use mock_sales_repo::MockSalesRepository;
pub mod summary_api_repo;
pub use summary_api_repo::{HttpSummaryApiRepository, SummaryApiRepository};
