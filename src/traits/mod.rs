pub mod graph_mut;
pub mod graph_view;
pub mod shortest_path;
