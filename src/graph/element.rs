use crate::core::Identifier;
use crate::properties::Properties;

/// Behavior shared by every piece of a graph: nodes, edges, the root graph
/// and subgraphs.
pub trait GraphElement {
    fn id(&self) -> &Identifier;

    fn properties(&self) -> &Properties;

    fn properties_mut(&mut self) -> &mut Properties;

    /// The DOT text for this element and everything it contains
    fn source(&self) -> String;
}
