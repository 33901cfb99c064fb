#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, make_demo_items, render_ascii};
