//! Closed keyword sets for enumerated Graphviz attributes

use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// Node shapes (`shape`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Box,
    Polygon,
    Ellipse,
    Oval,
    Circle,
    Point,
    Egg,
    Triangle,
    PlainText,
    Plain,
    Diamond,
    Trapezium,
    Parallelogram,
    House,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    TripleOctagon,
    InvTriangle,
    InvTrapezium,
    InvHouse,
    #[strum(serialize = "Mdiamond")]
    MDiamond,
    #[strum(serialize = "Msquare")]
    MSquare,
    #[strum(serialize = "Mcircle")]
    MCircle,
    Rect,
    Rectangle,
    Square,
    Star,
    None,
    Underline,
    Cylinder,
    Note,
    Tab,
    Folder,
    Box3d,
    Component,
    Record,
    #[strum(serialize = "Mrecord")]
    MRecord,
}

/// Rank constraints for subgraphs (`rank`)
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum RankType {
    #[default]
    Same,
    Min,
    Source,
    Max,
    Sink,
}

/// Layout direction (`rankdir`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames,
)]
pub enum RankDir {
    #[strum(serialize = "TB")]
    TopToBottom,
    #[strum(serialize = "LR")]
    LeftToRight,
    #[strum(serialize = "BT")]
    BottomToTop,
    #[strum(serialize = "RL")]
    RightToLeft,
}

/// Arrowhead shapes (`arrowhead`, `arrowtail`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum ArrowType {
    Normal,
    Inv,
    Dot,
    InvDot,
    ODot,
    InvODot,
    None,
    Tee,
    Empty,
    InvEmpty,
    Diamond,
    ODiamond,
    EDiamond,
    Crow,
    Box,
    OBox,
    Open,
    HalfOpen,
    Vee,
}

/// Edge arrow placement (`dir`)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Forward,
    Back,
    Both,
    None,
}

/// Which closed set an enumerated property draws its values from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolSet {
    Shape,
    Rank,
    RankDir,
    Arrow,
    Direction,
}

impl SymbolSet {
    pub fn variants(self) -> &'static [&'static str] {
        match self {
            SymbolSet::Shape => Shape::VARIANTS,
            SymbolSet::Rank => RankType::VARIANTS,
            SymbolSet::RankDir => RankDir::VARIANTS,
            SymbolSet::Arrow => ArrowType::VARIANTS,
            SymbolSet::Direction => Direction::VARIANTS,
        }
    }

    pub fn contains(self, value: &str) -> bool {
        self.variants().contains(&value)
    }
}

/// How values for a given property name are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Free-form, rendered quoted
    Text,
    /// `true` or `false`
    Flag,
    /// One keyword out of a closed set, rendered bare
    Symbol(SymbolSet),
}

const FLAG_PROPERTIES: &[&str] = &[
    "center",
    "compound",
    "concentrate",
    "constraint",
    "decorate",
    "fixedsize",
    "headclip",
    "newrank",
    "regular",
    "tailclip",
];

impl PropertyKind {
    /// Look up the kind of a property by name. Unknown names are free-form.
    pub fn of(name: &str) -> Self {
        match name {
            "shape" => PropertyKind::Symbol(SymbolSet::Shape),
            "rank" => PropertyKind::Symbol(SymbolSet::Rank),
            "rankdir" => PropertyKind::Symbol(SymbolSet::RankDir),
            "arrowhead" | "arrowtail" => PropertyKind::Symbol(SymbolSet::Arrow),
            "dir" => PropertyKind::Symbol(SymbolSet::Direction),
            _ if FLAG_PROPERTIES.contains(&name) => PropertyKind::Flag,
            _ => PropertyKind::Text,
        }
    }
}
