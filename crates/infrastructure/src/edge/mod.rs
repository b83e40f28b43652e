mod http_deleter;

pub use http_deleter::HttpEdgeDeleter;
