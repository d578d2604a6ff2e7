use grml_script::ElementKind;

/// One recorded drawing call with owned arguments.
///
/// Variants mirror the methods of [`Graphics`](grml_script::Graphics)
/// one-to-one. Single-argument setters are tuple variants.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Axes {
        x_tick: f64,
        y_tick: f64,
        x_org: f64,
        y_org: f64,
        major_x: i32,
        major_y: i32,
        tick_size: f64,
    },
    Axes3d {
        x_tick: f64,
        y_tick: f64,
        z_tick: f64,
        x_org: f64,
        y_org: f64,
        z_org: f64,
        major_x: i32,
        major_y: i32,
        major_z: i32,
        tick_size: f64,
    },
    CellArray {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        dimx: i32,
        dimy: i32,
        scol: i32,
        srow: i32,
        ncol: i32,
        nrow: i32,
        color: Vec<i32>,
    },
    Colormap,
    Contour {
        nx: i32,
        ny: i32,
        nh: i32,
        px: Vec<f64>,
        py: Vec<f64>,
        h: Vec<f64>,
        pz: Vec<f64>,
        major_h: i32,
    },
    DrawArc { xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32 },
    DrawArrow { x1: f64, y1: f64, x2: f64, y2: f64 },
    DrawImage {
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
        width: i32,
        height: i32,
        data: Vec<i32>,
    },
    DrawRect { left: f64, right: f64, bottom: f64, top: f64 },
    FillArc { xmin: f64, xmax: f64, ymin: f64, ymax: f64, a1: i32, a2: i32 },
    FillArea { n: i32, x: Vec<f64>, y: Vec<f64> },
    FillRect { left: f64, right: f64, bottom: f64, top: f64 },
    Grid { x_tick: f64, y_tick: f64, x_org: f64, y_org: f64, major_x: i32, major_y: i32 },
    HErrorBars { n: i32, x: Vec<f64>, y: Vec<f64>, e1: Vec<f64>, e2: Vec<f64> },
    MathTex { x: f64, y: f64, formula: String },
    Polyline { n: i32, x: Vec<f64>, y: Vec<f64> },
    Polymarker { n: i32, x: Vec<f64>, y: Vec<f64> },
    SetArrowStyle(i32),
    SetCharHeight(f64),
    SetCharUp { ux: f64, uy: f64 },
    SetColormap(i32),
    SetFillColorInd(i32),
    SetFillInd(i32),
    SetFillIntStyle(i32),
    SetFillStyle(i32),
    SetLineColorInd(i32),
    SetLineInd(i32),
    SetLineType(i32),
    SetLineWidth(f64),
    SetMarkerColorInd(i32),
    SetMarkerInd(i32),
    SetMarkerSize(f64),
    SetMarkerType(i32),
    SetScale(i32),
    SetSpace { zmin: f64, zmax: f64, rotation: i32, tilt: i32 },
    SetTextAlign { horizontal: i32, vertical: i32 },
    SetTextColorInd(i32),
    SetTextFontPrec { font: i32, precision: i32 },
    SetTextInd(i32),
    SetTextPath(i32),
    SetViewport { xmin: f64, xmax: f64, ymin: f64, ymax: f64 },
    SetWindow { xmin: f64, xmax: f64, ymin: f64, ymax: f64 },
    Spline { n: i32, px: Vec<f64>, py: Vec<f64>, m: i32, method: i32 },
    Surface { nx: i32, ny: i32, px: Vec<f64>, py: Vec<f64>, pz: Vec<f64>, option: i32 },
    Text { x: f64, y: f64, string: String },
    TextExt { x: f64, y: f64, string: String },
    Titles3d { x_title: String, y_title: String, z_title: String },
    VErrorBars { n: i32, x: Vec<f64>, y: Vec<f64>, e1: Vec<f64>, e2: Vec<f64> },
}

impl DrawCmd {
    /// The script element this call was produced from.
    pub fn kind(&self) -> ElementKind {
        use ElementKind as K;

        match self {
            DrawCmd::Axes { .. } => K::Axes,
            DrawCmd::Axes3d { .. } => K::Axes3d,
            DrawCmd::CellArray { .. } => K::CellArray,
            DrawCmd::Colormap => K::Colormap,
            DrawCmd::Contour { .. } => K::Contour,
            DrawCmd::DrawArc { .. } => K::DrawArc,
            DrawCmd::DrawArrow { .. } => K::DrawArrow,
            DrawCmd::DrawImage { .. } => K::DrawImage,
            DrawCmd::DrawRect { .. } => K::DrawRect,
            DrawCmd::FillArc { .. } => K::FillArc,
            DrawCmd::FillArea { .. } => K::FillArea,
            DrawCmd::FillRect { .. } => K::FillRect,
            DrawCmd::Grid { .. } => K::Grid,
            DrawCmd::HErrorBars { .. } => K::HErrorBars,
            DrawCmd::MathTex { .. } => K::MathTex,
            DrawCmd::Polyline { .. } => K::Polyline,
            DrawCmd::Polymarker { .. } => K::Polymarker,
            DrawCmd::SetArrowStyle(_) => K::SetArrowStyle,
            DrawCmd::SetCharHeight(_) => K::SetCharHeight,
            DrawCmd::SetCharUp { .. } => K::SetCharUp,
            DrawCmd::SetColormap(_) => K::SetColormap,
            DrawCmd::SetFillColorInd(_) => K::SetFillColorInd,
            DrawCmd::SetFillInd(_) => K::SetFillInd,
            DrawCmd::SetFillIntStyle(_) => K::SetFillIntStyle,
            DrawCmd::SetFillStyle(_) => K::SetFillStyle,
            DrawCmd::SetLineColorInd(_) => K::SetLineColorInd,
            DrawCmd::SetLineInd(_) => K::SetLineInd,
            DrawCmd::SetLineType(_) => K::SetLineType,
            DrawCmd::SetLineWidth(_) => K::SetLineWidth,
            DrawCmd::SetMarkerColorInd(_) => K::SetMarkerColorInd,
            DrawCmd::SetMarkerInd(_) => K::SetMarkerInd,
            DrawCmd::SetMarkerSize(_) => K::SetMarkerSize,
            DrawCmd::SetMarkerType(_) => K::SetMarkerType,
            DrawCmd::SetScale(_) => K::SetScale,
            DrawCmd::SetSpace { .. } => K::SetSpace,
            DrawCmd::SetTextAlign { .. } => K::SetTextAlign,
            DrawCmd::SetTextColorInd(_) => K::SetTextColorInd,
            DrawCmd::SetTextFontPrec { .. } => K::SetTextFontPrec,
            DrawCmd::SetTextInd(_) => K::SetTextInd,
            DrawCmd::SetTextPath(_) => K::SetTextPath,
            DrawCmd::SetViewport { .. } => K::SetViewport,
            DrawCmd::SetWindow { .. } => K::SetWindow,
            DrawCmd::Spline { .. } => K::Spline,
            DrawCmd::Surface { .. } => K::Surface,
            DrawCmd::Text { .. } => K::Text,
            DrawCmd::TextExt { .. } => K::TextExt,
            DrawCmd::Titles3d { .. } => K::Titles3d,
            DrawCmd::VErrorBars { .. } => K::VErrorBars,
        }
    }

    /// Element name as written in scripts.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.kind().entry().name
    }
}
