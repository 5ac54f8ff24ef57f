pub mod error;
pub mod frequency;
pub mod helpers;
pub mod literal_cost;
pub mod macros;
pub mod ring;

pub use error::LiteralCostError;
pub use literal_cost::{
    estimate_bit_costs_for_literals, estimate_bit_costs_with, par_estimate_bit_costs,
    try_estimate_bit_costs_for_literals, ENTROPY_CORRECTION, WINDOW_HALF,
};
