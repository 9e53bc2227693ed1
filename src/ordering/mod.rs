pub mod topo;

pub use topo::sort_by_dependencies;
