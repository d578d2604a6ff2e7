//! Element schema: the names a script may use and the positional type
//! signature of each.
//!
//! The table is a stable wire contract shared with script producers. Attribute
//! values bind to signature positions in encounter order; the attribute names
//! listed here are a reference ordering only, consulted when name validation
//! is enabled.

use ElementKind as K;
use TypeTag::{Float as F, FloatList as FL, Int as I, IntList as IL, Str as S};

/// Type of one attribute position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TypeTag {
    Int,
    Float,
    Str,
    IntList,
    FloatList,
}

/// Name of the element that brackets a whole script. Never dispatched.
pub const WRAPPER_ELEMENT: &str = "gr";

/// Maximum number of `FloatList` positions in one signature.
pub const MAX_FLOAT_LISTS: usize = 4;

/// Element id. The discriminant is the element's index in [`SCHEMA`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ElementKind {
    Axes,
    Axes3d,
    CellArray,
    Colormap,
    Contour,
    DrawArc,
    DrawArrow,
    DrawImage,
    DrawRect,
    FillArc,
    FillArea,
    FillRect,
    Grid,
    HErrorBars,
    MathTex,
    Polyline,
    Polymarker,
    SetArrowStyle,
    SetCharHeight,
    SetCharUp,
    SetColormap,
    SetFillColorInd,
    SetFillInd,
    SetFillIntStyle,
    SetFillStyle,
    SetLineColorInd,
    SetLineInd,
    SetLineType,
    SetLineWidth,
    SetMarkerColorInd,
    SetMarkerInd,
    SetMarkerSize,
    SetMarkerType,
    SetScale,
    SetSpace,
    SetTextAlign,
    SetTextColorInd,
    SetTextFontPrec,
    SetTextInd,
    SetTextPath,
    SetViewport,
    SetWindow,
    Spline,
    Surface,
    Text,
    TextExt,
    Titles3d,
    VErrorBars,
}

impl ElementKind {
    #[inline]
    pub const fn id(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn entry(self) -> &'static SchemaEntry {
        &SCHEMA[self.id()]
    }
}

/// One row of the schema table.
#[derive(Debug)]
pub struct SchemaEntry {
    pub name: &'static str,
    pub kind: ElementKind,
    /// Reference attribute name and type for each position.
    pub params: &'static [(&'static str, TypeTag)],
}

impl SchemaEntry {
    /// The positional type signature.
    pub fn signature(&self) -> impl ExactSizeIterator<Item = TypeTag> + '_ {
        self.params.iter().map(|&(_, tag)| tag)
    }

    /// Number of positions carrying the given type.
    pub fn count(&self, tag: TypeTag) -> usize {
        self.signature().filter(|&t| t == tag).count()
    }
}

const fn entry(
    name: &'static str,
    kind: ElementKind,
    params: &'static [(&'static str, TypeTag)],
) -> SchemaEntry {
    SchemaEntry { name, kind, params }
}

const RECT: &[(&str, TypeTag)] = &[("xmin", F), ("xmax", F), ("ymin", F), ("ymax", F)];
const ARC: &[(&str, TypeTag)] =
    &[("xmin", F), ("xmax", F), ("ymin", F), ("ymax", F), ("a1", I), ("a2", I)];
const POINTS: &[(&str, TypeTag)] = &[("n", I), ("x", FL), ("y", FL)];
const ERROR_BARS: &[(&str, TypeTag)] =
    &[("n", I), ("x", FL), ("y", FL), ("e1", FL), ("e2", FL)];
const TEXT: &[(&str, TypeTag)] = &[("x", F), ("y", F), ("string", S)];

/// All elements, strictly sorted by name (ordinal byte order).
pub static SCHEMA: [SchemaEntry; 48] = [
    entry("axes", K::Axes, &[
        ("x_tick", F), ("y_tick", F), ("x_org", F), ("y_org", F),
        ("major_x", I), ("major_y", I), ("tick_size", F),
    ]),
    entry("axes3d", K::Axes3d, &[
        ("x_tick", F), ("y_tick", F), ("z_tick", F),
        ("x_org", F), ("y_org", F), ("z_org", F),
        ("major_x", I), ("major_y", I), ("major_z", I), ("tick_size", F),
    ]),
    entry("cellarray", K::CellArray, &[
        ("xmin", F), ("xmax", F), ("ymin", F), ("ymax", F),
        ("dimx", I), ("dimy", I), ("scol", I), ("srow", I), ("ncol", I), ("nrow", I),
        ("color", IL),
    ]),
    entry("colormap", K::Colormap, &[]),
    entry("contour", K::Contour, &[
        ("nx", I), ("ny", I), ("nh", I),
        ("px", FL), ("py", FL), ("h", FL), ("pz", FL), ("major_h", I),
    ]),
    entry("drawarc", K::DrawArc, ARC),
    entry("drawarrow", K::DrawArrow, &[("x1", F), ("y1", F), ("x2", F), ("y2", F)]),
    entry("drawimage", K::DrawImage, &[
        ("xmin", F), ("xmax", F), ("ymin", F), ("ymax", F),
        ("width", I), ("height", I), ("data", IL),
    ]),
    entry("drawrect", K::DrawRect, RECT),
    entry("fillarc", K::FillArc, ARC),
    entry("fillarea", K::FillArea, POINTS),
    entry("fillrect", K::FillRect, RECT),
    entry("grid", K::Grid, &[
        ("x_tick", F), ("y_tick", F), ("x_org", F), ("y_org", F),
        ("major_x", I), ("major_y", I),
    ]),
    entry("herrorbars", K::HErrorBars, ERROR_BARS),
    entry("mathtex", K::MathTex, TEXT),
    entry("polyline", K::Polyline, POINTS),
    entry("polymarker", K::Polymarker, POINTS),
    entry("setarrowstyle", K::SetArrowStyle, &[("style", I)]),
    entry("setcharheight", K::SetCharHeight, &[("height", F)]),
    entry("setcharup", K::SetCharUp, &[("ux", F), ("uy", F)]),
    entry("setcolormap", K::SetColormap, &[("index", I)]),
    entry("setfillcolorind", K::SetFillColorInd, &[("color", I)]),
    entry("setfillind", K::SetFillInd, &[("index", I)]),
    entry("setfillintstyle", K::SetFillIntStyle, &[("intstyle", I)]),
    entry("setfillstyle", K::SetFillStyle, &[("style", I)]),
    entry("setlinecolorind", K::SetLineColorInd, &[("color", I)]),
    entry("setlineind", K::SetLineInd, &[("index", I)]),
    entry("setlinetype", K::SetLineType, &[("type", I)]),
    entry("setlinewidth", K::SetLineWidth, &[("width", F)]),
    entry("setmarkercolorind", K::SetMarkerColorInd, &[("color", I)]),
    entry("setmarkerind", K::SetMarkerInd, &[("index", I)]),
    entry("setmarkersize", K::SetMarkerSize, &[("size", F)]),
    entry("setmarkertype", K::SetMarkerType, &[("type", I)]),
    entry("setscale", K::SetScale, &[("scale", I)]),
    entry("setspace", K::SetSpace, &[("zmin", F), ("zmax", F), ("rotation", I), ("tilt", I)]),
    entry("settextalign", K::SetTextAlign, &[("horizontal", I), ("vertical", I)]),
    entry("settextcolorind", K::SetTextColorInd, &[("color", I)]),
    entry("settextfontprec", K::SetTextFontPrec, &[("font", I), ("precision", I)]),
    entry("settextind", K::SetTextInd, &[("index", I)]),
    entry("settextpath", K::SetTextPath, &[("path", I)]),
    entry("setviewport", K::SetViewport, RECT),
    entry("setwindow", K::SetWindow, RECT),
    entry("spline", K::Spline, &[("n", I), ("px", FL), ("py", FL), ("m", I), ("method", I)]),
    entry("surface", K::Surface, &[
        ("nx", I), ("ny", I), ("px", FL), ("py", FL), ("pz", FL), ("option", I),
    ]),
    entry("text", K::Text, TEXT),
    entry("textext", K::TextExt, TEXT),
    entry("titles3d", K::Titles3d, &[("x_title", S), ("y_title", S), ("z_title", S)]),
    entry("verrorbars", K::VErrorBars, ERROR_BARS),
];

/// Binary search over [`SCHEMA`] by name.
pub fn lookup(name: &[u8]) -> Option<&'static SchemaEntry> {
    SCHEMA
        .binary_search_by(|e| e.name.as_bytes().cmp(name))
        .ok()
        .map(|i| &SCHEMA[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact signature notation: i f s I F.
    fn code(entry: &SchemaEntry) -> String {
        entry
            .signature()
            .map(|t| match t {
                TypeTag::Int => 'i',
                TypeTag::Float => 'f',
                TypeTag::Str => 's',
                TypeTag::IntList => 'I',
                TypeTag::FloatList => 'F',
            })
            .collect()
    }

    #[test]
    fn table_is_strictly_sorted() {
        for pair in SCHEMA.windows(2) {
            assert!(
                pair[0].name.as_bytes() < pair[1].name.as_bytes(),
                "{} must sort before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn kind_matches_index() {
        for (i, e) in SCHEMA.iter().enumerate() {
            assert_eq!(e.kind.id(), i, "{}", e.name);
            assert!(std::ptr::eq(e.kind.entry(), e));
        }
    }

    #[test]
    fn every_name_is_found() {
        for e in SCHEMA.iter() {
            let found = lookup(e.name.as_bytes()).expect(e.name);
            assert_eq!(found.kind, e.kind);
        }
    }

    #[test]
    fn absent_names_not_found() {
        for name in ["", "a", "axe", "axes3", "bogus", "gr", "zzz", "Polyline", "textex", "verrorbarsx"] {
            assert!(lookup(name.as_bytes()).is_none(), "{name}");
        }
    }

    #[test]
    fn list_slot_limits_hold() {
        for e in SCHEMA.iter() {
            assert!(e.count(TypeTag::FloatList) <= MAX_FLOAT_LISTS, "{}", e.name);
            assert!(e.count(TypeTag::IntList) <= 1, "{}", e.name);
        }
    }

    #[test]
    fn wire_signatures() {
        let expected = [
            ("axes", "ffffiif"),
            ("axes3d", "ffffffiiif"),
            ("cellarray", "ffffiiiiiiI"),
            ("colormap", ""),
            ("contour", "iiiFFFFi"),
            ("drawarc", "ffffii"),
            ("drawarrow", "ffff"),
            ("drawimage", "ffffiiI"),
            ("drawrect", "ffff"),
            ("fillarc", "ffffii"),
            ("fillarea", "iFF"),
            ("fillrect", "ffff"),
            ("grid", "ffffii"),
            ("herrorbars", "iFFFF"),
            ("mathtex", "ffs"),
            ("polyline", "iFF"),
            ("polymarker", "iFF"),
            ("setarrowstyle", "i"),
            ("setcharheight", "f"),
            ("setcharup", "ff"),
            ("setcolormap", "i"),
            ("setfillcolorind", "i"),
            ("setfillind", "i"),
            ("setfillintstyle", "i"),
            ("setfillstyle", "i"),
            ("setlinecolorind", "i"),
            ("setlineind", "i"),
            ("setlinetype", "i"),
            ("setlinewidth", "f"),
            ("setmarkercolorind", "i"),
            ("setmarkerind", "i"),
            ("setmarkersize", "f"),
            ("setmarkertype", "i"),
            ("setscale", "i"),
            ("setspace", "ffii"),
            ("settextalign", "ii"),
            ("settextcolorind", "i"),
            ("settextfontprec", "ii"),
            ("settextind", "i"),
            ("settextpath", "i"),
            ("setviewport", "ffff"),
            ("setwindow", "ffff"),
            ("spline", "iFFii"),
            ("surface", "iiFFFi"),
            ("text", "ffs"),
            ("textext", "ffs"),
            ("titles3d", "sss"),
            ("verrorbars", "iFFFF"),
        ];
        assert_eq!(expected.len(), SCHEMA.len());
        for (e, (name, sig)) in SCHEMA.iter().zip(expected) {
            assert_eq!(e.name, name);
            assert_eq!(code(e), sig, "{name}");
        }
    }

    mod property_tests {
        use crate::schema::{SCHEMA, lookup};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_lookup_agrees_with_linear_scan(name in "[a-z]{0,6}[0-9]?[a-z]{0,12}") {
                let linear = SCHEMA.iter().find(|e| e.name == name).map(|e| e.kind);
                prop_assert_eq!(lookup(name.as_bytes()).map(|e| e.kind), linear);
            }
        }
    }
}
