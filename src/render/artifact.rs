use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Kind tag carried by every render artifact.
///
/// Rebuild passes clear artifacts by kind instead of inspecting primitive
/// types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactKind {
    Grid,
    Line,
    Dot,
    Label,
    Highlight,
}

impl ArtifactKind {
    /// Kinds rebuilt by every layout pass, in draw order.
    pub const LAYOUT: [ArtifactKind; 4] = [Self::Grid, Self::Line, Self::Dot, Self::Label];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
    Path(PathPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Text(text) => text.validate(),
            Self::Path(path) => path.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderArtifact {
    pub kind: ArtifactKind,
    pub primitive: Primitive,
}

impl RenderArtifact {
    #[must_use]
    pub fn new(kind: ArtifactKind, primitive: Primitive) -> Self {
        Self { kind, primitive }
    }
}
