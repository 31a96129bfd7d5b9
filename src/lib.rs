pub mod marker;
pub mod graph;
pub mod cust_error;
pub mod search_instance;
pub mod heuristics;
pub mod branch_and_reduce;
pub mod bounded_search;
pub mod generator;
pub mod downsample;
pub mod logging;
