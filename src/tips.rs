use crate::scoring::FaceShape;

/// Tips shown when a result carries none of its own.
pub const GENERIC_TIPS: &[&str] = OVAL;

const OVAL: &[&str] = &[
    "Soft layers and side-swept bangs enhance balanced proportions.",
    "Try medium-length styles with volume around the cheeks.",
    "Round or oval glasses typically complement this shape.",
];

const ROUND: &[&str] = &[
    "Go for styles with height on top to elongate the face.",
    "Side parts and angled layers add definition.",
    "Frames with sharp lines help balance softer contours.",
];

const SQUARE: &[&str] = &[
    "Soft, layered cuts reduce sharp jaw angles.",
    "Textured fringes can add softness around the forehead.",
    "Rounded frames balance strong lines.",
];

const HEART: &[&str] = &[
    "Chin-length bobs and side-swept bangs add balance.",
    "Avoid too much volume at the crown.",
    "Oval frames work well with a wider forehead.",
];

const DIAMOND: &[&str] = &[
    "Chin-length styles widen the jawline area.",
    "Side-swept bangs reduce cheekbone width emphasis.",
    "Rimless or oval frames soften the cheekbones.",
];

const RECTANGLE: &[&str] = &[
    "Add width with waves or curls to balance a longer face.",
    "Avoid very long, straight styles with no layers.",
    "Square or bold frames can add structure.",
];

impl FaceShape {
    /// Hair and eyewear suggestions for this shape.
    pub const fn tips(self) -> &'static [&'static str] {
        match self {
            FaceShape::Oval => OVAL,
            FaceShape::Round => ROUND,
            FaceShape::Square => SQUARE,
            FaceShape::Heart => HEART,
            FaceShape::Diamond => DIAMOND,
            FaceShape::Rectangle => RECTANGLE,
        }
    }
}
