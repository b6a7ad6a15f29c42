mod axis;
mod scatter;

pub use {
    axis::{DOMAIN_PAD_HIGH, DOMAIN_PAD_LOW, padded_domain},
    scatter::{ScatterData, build_scatter},
};
