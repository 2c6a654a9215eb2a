pub mod loop_number;
pub mod pixel_to_uv;
