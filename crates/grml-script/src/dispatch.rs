use crate::frame::ArgFrame;
use crate::graphics::Graphics;
use crate::schema::ElementKind;

/// Invokes the drawing call bound to `kind` with the marshaled arguments.
///
/// Slot indices count per type in signature order: for `axes:ffffiif`, the
/// trailing float is `f.float(4)`, not `f.float(6)`. Every arm must agree with
/// the element's schema signature.
pub fn dispatch<G: Graphics + ?Sized>(kind: ElementKind, f: &ArgFrame<'_>, g: &mut G) {
    use ElementKind as K;

    match kind {
        K::Axes => g.axes(
            f.float(0),
            f.float(1),
            f.float(2),
            f.float(3),
            f.int(0),
            f.int(1),
            f.float(4),
        ),
        K::Axes3d => g.axes3d(
            f.float(0),
            f.float(1),
            f.float(2),
            f.float(3),
            f.float(4),
            f.float(5),
            f.int(0),
            f.int(1),
            f.int(2),
            f.float(6),
        ),
        K::CellArray => g.cell_array(
            f.float(0),
            f.float(1),
            f.float(2),
            f.float(3),
            f.int(0),
            f.int(1),
            f.int(2),
            f.int(3),
            f.int(4),
            f.int(5),
            f.int_list(),
        ),
        K::Colormap => g.colormap(),
        K::Contour => g.contour(
            f.int(0),
            f.int(1),
            f.int(2),
            f.float_list(0),
            f.float_list(1),
            f.float_list(2),
            f.float_list(3),
            f.int(3),
        ),
        K::DrawArc => g.draw_arc(f.float(0), f.float(1), f.float(2), f.float(3), f.int(0), f.int(1)),
        K::DrawArrow => g.draw_arrow(f.float(0), f.float(1), f.float(2), f.float(3)),
        K::DrawImage => g.draw_image(
            f.float(0),
            f.float(1),
            f.float(2),
            f.float(3),
            f.int(0),
            f.int(1),
            f.int_list(),
        ),
        K::DrawRect => g.draw_rect(f.float(0), f.float(1), f.float(2), f.float(3)),
        K::FillArc => g.fill_arc(f.float(0), f.float(1), f.float(2), f.float(3), f.int(0), f.int(1)),
        K::FillArea => g.fill_area(f.int(0), f.float_list(0), f.float_list(1)),
        K::FillRect => g.fill_rect(f.float(0), f.float(1), f.float(2), f.float(3)),
        K::Grid => g.grid(f.float(0), f.float(1), f.float(2), f.float(3), f.int(0), f.int(1)),
        K::HErrorBars => g.herrorbars(
            f.int(0),
            f.float_list(0),
            f.float_list(1),
            f.float_list(2),
            f.float_list(3),
        ),
        K::MathTex => g.mathtex(f.float(0), f.float(1), f.string(0)),
        K::Polyline => g.polyline(f.int(0), f.float_list(0), f.float_list(1)),
        K::Polymarker => g.polymarker(f.int(0), f.float_list(0), f.float_list(1)),
        K::SetArrowStyle => g.set_arrow_style(f.int(0)),
        K::SetCharHeight => g.set_char_height(f.float(0)),
        K::SetCharUp => g.set_char_up(f.float(0), f.float(1)),
        K::SetColormap => g.set_colormap(f.int(0)),
        K::SetFillColorInd => g.set_fill_color_ind(f.int(0)),
        K::SetFillInd => g.set_fill_ind(f.int(0)),
        K::SetFillIntStyle => g.set_fill_int_style(f.int(0)),
        K::SetFillStyle => g.set_fill_style(f.int(0)),
        K::SetLineColorInd => g.set_line_color_ind(f.int(0)),
        K::SetLineInd => g.set_line_ind(f.int(0)),
        K::SetLineType => g.set_line_type(f.int(0)),
        K::SetLineWidth => g.set_line_width(f.float(0)),
        K::SetMarkerColorInd => g.set_marker_color_ind(f.int(0)),
        K::SetMarkerInd => g.set_marker_ind(f.int(0)),
        K::SetMarkerSize => g.set_marker_size(f.float(0)),
        K::SetMarkerType => g.set_marker_type(f.int(0)),
        K::SetScale => g.set_scale(f.int(0)),
        K::SetSpace => g.set_space(f.float(0), f.float(1), f.int(0), f.int(1)),
        K::SetTextAlign => g.set_text_align(f.int(0), f.int(1)),
        K::SetTextColorInd => g.set_text_color_ind(f.int(0)),
        K::SetTextFontPrec => g.set_text_font_prec(f.int(0), f.int(1)),
        K::SetTextInd => g.set_text_ind(f.int(0)),
        K::SetTextPath => g.set_text_path(f.int(0)),
        K::SetViewport => g.set_viewport(f.float(0), f.float(1), f.float(2), f.float(3)),
        K::SetWindow => g.set_window(f.float(0), f.float(1), f.float(2), f.float(3)),
        K::Spline => g.spline(f.int(0), f.float_list(0), f.float_list(1), f.int(1), f.int(2)),
        K::Surface => g.surface(
            f.int(0),
            f.int(1),
            f.float_list(0),
            f.float_list(1),
            f.float_list(2),
            f.int(2),
        ),
        K::Text => g.text(f.float(0), f.float(1), f.string(0)),
        K::TextExt => g.textext(f.float(0), f.float(1), f.string(0)),
        K::Titles3d => g.titles3d(f.string(0), f.string(1), f.string(2)),
        K::VErrorBars => g.verrorbars(
            f.int(0),
            f.float_list(0),
            f.float_list(1),
            f.float_list(2),
            f.float_list(3),
        ),
    }
}
