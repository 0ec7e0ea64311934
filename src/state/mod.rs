//! Local component state.
//!
//! DESIGN
//! ======
//! Each component keeps its transient UI flags in a small plain struct here,
//! wrapped in an `RwSignal` by the component. Interaction rules live on these
//! structs so they can be exercised without mounting a view.

pub mod admin_table;
pub mod auth;
pub mod product_card;
pub mod sidebar;
