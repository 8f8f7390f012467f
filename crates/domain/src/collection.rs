//! Guards over ordered sequences.
//!
//! Sequences are passed as `Option<&[S]>`: `None` stands for an absent
//! collection, and an element type implementing [`Slot`] may itself be absent.

pub mod each;
pub mod index;
pub mod size;
pub mod slot;

pub use each::{
    check_each_exact_value, check_each_max_value, check_each_min_value, check_each_negative,
    check_each_not_exact_value, check_each_not_negative, check_each_not_positive,
    check_each_positive, check_each_value_range, check_not_null_elements,
};
pub use index::{check_access_index, check_index_and_count, check_insert_index};
pub use size::{check_exact_size, check_max_size, check_min_size, check_not_empty, check_size_range};
pub use slot::Slot;
