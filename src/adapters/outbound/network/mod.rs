/// Network adapters for the scanning service API
mod http_scan_client;

pub use http_scan_client::HttpScanClient;
