//! Crawl job identifiers.
//!
//! Format: `crawl_<YYYYMMDD>_<HHMMSS>_<spider>_<8 hex>`. The timestamp keeps
//! ids sortable and readable; the random suffix keeps ids created within the
//! same second apart.

use chrono::Local;
use uuid::Uuid;

const PREFIX: &str = "crawl";
const SUFFIX_LEN: usize = 8;

pub fn generate_job_id(spider_name: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let random = Uuid::new_v4().simple().to_string();

    format!(
        "{}_{}_{}_{}",
        PREFIX,
        timestamp,
        spider_name,
        &random[..SUFFIX_LEN]
    )
}
