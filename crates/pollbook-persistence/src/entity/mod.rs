//! SeaORM entity definitions

pub mod operators;
pub mod voters;

pub mod prelude {
    pub use super::operators::Entity as Operators;
    pub use super::voters::Entity as Voters;
}
