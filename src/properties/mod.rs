//! # Property Module
//!
//! Typed attribute stores attached to every graph element.
//!
//! ## Components
//!
//! - **Properties**: ordered name→value map with set-time validation
//! - **PropertyValue**: free-form text, enumerated keyword or boolean flag
//! - **GlobalNodeProperties / GlobalEdgeProperties**: scope-wide defaults
//! - **Shape, RankType, RankDir, ArrowType, Direction**: the closed keyword
//!   sets behind enumerated properties
//!
//! ## Example
//!
//! ```
//! use dotweave::properties::{Properties, RenderStyle, Shape};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut props = Properties::new();
//! props.set_shape(Shape::Circle).set_label("start");
//! props.set("fixedsize", true)?;
//!
//! // Enumerated properties reject unknown keywords immediately
//! assert!(props.set("shape", "blob").is_err());
//!
//! assert_eq!(
//!     props.render(RenderStyle::AttributeList),
//!     r#" [shape=circle, label="start", fixedsize=true]"#
//! );
//! # Ok(())
//! # }
//! ```

mod kinds;
mod store;

pub use kinds::{ArrowType, Direction, PropertyKind, RankDir, RankType, Shape, SymbolSet};
pub use store::{
    DefaultsTarget, GlobalEdgeProperties, GlobalNodeProperties, Properties, PropertyValue,
    RenderStyle,
};
