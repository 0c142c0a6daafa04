pub mod bounding_box;
pub mod geo_point;
pub mod selection_result;
pub mod shape;
